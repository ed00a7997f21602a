use env_logger::Env;
use log::info;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    info!("Loading emojis...");
    emojibot::run().await
}
