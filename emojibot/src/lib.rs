pub mod emojibot;
pub mod handlers;

use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::{Context, Result};
use log::info;

use crate::emojibot::config::manifest_dir;
use crate::emojibot::{BotConfig, EmojiService};
use crate::handlers::AppState;

pub async fn run() -> Result<()> {
    let config = BotConfig::load();
    let server_cfg = config.server.clone();

    // A bad vocabulary stops startup before any command can run.
    let state = build_state(&config).context("initializing emoji vocabulary")?;
    let state = web::Data::new(state);
    let max_bytes = server_cfg.max_payload_bytes;

    info!(
        "emojibot is listening on: http://{}:{}",
        server_cfg.host, server_cfg.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .app_data(web::JsonConfig::default().limit(max_bytes))
            .configure(handlers::config)
    })
    .bind((server_cfg.host.as_str(), server_cfg.port))?
    .run()
    .await?;

    Ok(())
}

pub fn build_state(config: &BotConfig) -> Result<AppState> {
    let base = manifest_dir();
    let vocabulary = config.emojis.load_vocabulary(&base)?;

    Ok(AppState {
        service: EmojiService::new(vocabulary),
        delivery: config.emojis.delivery_policy(&base),
        render_unicode: config.emojis.render_unicode,
    })
}
