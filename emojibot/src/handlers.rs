use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{HttpResponse, Responder, get, post, web};
use log::error;
use serde::Deserialize;
use serde_json::json;

use crate::emojibot::commands::{Command, CommandInfo};
use crate::emojibot::unicode::render_unicode;
use crate::emojibot::{Delivery, DeliveryPolicy, EmojiService};

/// Everything a request needs, shared across workers.
pub struct AppState {
    pub service: EmojiService,
    pub delivery: DeliveryPolicy,
    pub render_unicode: bool,
}

#[derive(Debug, Deserialize)]
pub struct CommandRequest {
    pub text: String,
}

pub fn config(conf: &mut web::ServiceConfig) {
    let api_scope = web::scope("/api")
        .service(healthcheck_handler)
        .service(list_commands_handler)
        .service(run_command_handler);

    conf.service(api_scope);
}

#[get("/health")]
pub async fn healthcheck_handler() -> impl Responder {
    HttpResponse::Ok().json(json!({ "message": "pong" }))
}

#[get("/commands")]
pub async fn list_commands_handler() -> impl Responder {
    let commands: Vec<CommandInfo> = Command::ALL.into_iter().map(Command::info).collect();
    HttpResponse::Ok().json(commands)
}

#[post("/commands/{name}")]
pub async fn run_command_handler(
    path: web::Path<String>,
    body: web::Json<CommandRequest>,
    state: web::Data<AppState>,
) -> impl Responder {
    let name = path.into_inner();
    let Some(command) = Command::from_name(&name) else {
        return HttpResponse::NotFound().json(json!({ "error": format!("unknown command `{name}`") }));
    };

    let text = body.into_inner().text;
    if text.trim().is_empty() {
        return HttpResponse::BadRequest().json(json!({ "error": "text must not be blank" }));
    }

    // Scoring is CPU bound; keep it off the async workers. Each call gets its own generator.
    let service = state.service.clone();
    let output = match web::block(move || service.run(command, &text, &mut rand::rng())).await {
        Ok(output) => output,
        Err(err) => {
            error!("command {} failed: {err}", command.name());
            return HttpResponse::InternalServerError().finish();
        }
    };

    let output = if state.render_unicode {
        render_unicode(&output)
    } else {
        output
    };

    match state.delivery.deliver(output).await {
        Ok(Delivery::Inline(text)) => HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(text),
        Ok(Delivery::Attachment { file_name, body }) => HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .insert_header(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename(file_name)],
            })
            .body(body),
        Err(err) => {
            error!("failed to deliver {} result: {err:#}", command.name());
            HttpResponse::InternalServerError().finish()
        }
    }
}
