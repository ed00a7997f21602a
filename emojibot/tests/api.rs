use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use serde_json::{Value, json};

use emojibot::emojibot::{DeliveryPolicy, EmojiService, Vocabulary};
use emojibot::handlers::{self, AppState};

fn state(entries: &[&str], attachment_dir: &std::path::Path, render_unicode: bool) -> web::Data<AppState> {
    web::Data::new(AppState {
        service: EmojiService::new(Vocabulary::new(entries.iter().copied()).unwrap()),
        delivery: DeliveryPolicy::new(2000, attachment_dir),
        render_unicode,
    })
}

#[actix_web::test]
async fn health_answers_pong() {
    let dir = tempfile::tempdir().unwrap();
    let app = test::init_service(
        App::new()
            .app_data(state(&["dog"], dir.path(), false))
            .configure(handlers::config),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "message": "pong" }));
}

#[actix_web::test]
async fn lists_both_commands() {
    let dir = tempfile::tempdir().unwrap();
    let app = test::init_service(
        App::new()
            .app_data(state(&["dog"], dir.path(), false))
            .configure(handlers::config),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/commands").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["emojify", "english-to-emojis"]);
}

#[actix_web::test]
async fn english_to_emojis_replaces_exact_matches() {
    let dir = tempfile::tempdir().unwrap();
    let app = test::init_service(
        App::new()
            .app_data(state(&["dog"], dir.path(), false))
            .configure(handlers::config),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/commands/english-to-emojis")
        .set_json(json!({ "text": "dog runs fast" }))
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(body, ":dog: runs fast");
}

#[actix_web::test]
async fn unicode_rendering_is_optional() {
    let dir = tempfile::tempdir().unwrap();
    let app = test::init_service(
        App::new()
            .app_data(state(&["dog"], dir.path(), true))
            .configure(handlers::config),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/commands/english-to-emojis")
        .set_json(json!({ "text": "good dog" }))
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(body, "good 🐶");
}

#[actix_web::test]
async fn emojify_keeps_every_word() {
    let dir = tempfile::tempdir().unwrap();
    let app = test::init_service(
        App::new()
            .app_data(state(&["dog", "cat"], dir.path(), false))
            .configure(handlers::config),
    )
    .await;

    let text = "sprinkle some emojis over this sentence please";
    let req = test::TestRequest::post()
        .uri("/api/commands/emojify")
        .set_json(json!({ "text": text }))
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let body = std::str::from_utf8(&body).unwrap();

    let kept: Vec<&str> = body
        .split_whitespace()
        .filter(|w| *w != ":dog:" && *w != ":cat:")
        .collect();
    assert_eq!(kept, text.split_whitespace().collect::<Vec<_>>());
}

#[actix_web::test]
async fn oversized_results_arrive_as_attachments() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("TextFiles");
    let app = test::init_service(
        App::new()
            .app_data(state(&["dog"], &out, false))
            .configure(handlers::config),
    )
    .await;

    // 700 unmatched words: 2099 chars once rejoined.
    let text = vec!["ab"; 700].join(" ");
    let req = test::TestRequest::post()
        .uri("/api/commands/english-to-emojis")
        .set_json(json!({ "text": text }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let disposition = resp
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment"));
    assert!(disposition.contains(".txt"));

    let body = test::read_body(resp).await;
    assert_eq!(body, text.as_bytes());
    assert_eq!(std::fs::read_dir(&out).unwrap().count(), 0);
}

#[actix_web::test]
async fn unknown_command_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let app = test::init_service(
        App::new()
            .app_data(state(&["dog"], dir.path(), false))
            .configure(handlers::config),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/commands/shout")
        .set_json(json!({ "text": "hello" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn blank_text_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let app = test::init_service(
        App::new()
            .app_data(state(&["dog"], dir.path(), false))
            .configure(handlers::config),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/commands/emojify")
        .set_json(json!({ "text": "   " }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
