//! Integration tests for the generation client against a mock vendor API.

use std::time::Duration;

use reno_core::{ImageFormat, ImagePayload, Resolution};
use reno_gen::{
    GenClient, GenConfig, GenError, RetryConfig, FLASH_IMAGE_MODEL, PRO_IMAGE_MODEL, TEXT_MODEL,
};
use url::Url;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn client_for(server: &MockServer) -> GenClient {
    let config = GenConfig {
        base_url: Url::parse(&server.uri()).expect("mock server URI"),
        api_key: Some("test-key".to_string()),
        timeout: Duration::from_secs(5),
        retry: RetryConfig {
            max_attempts: 2,
            base_delay_ms: 1,
            max_delay_ms: 2,
        },
    };
    GenClient::new(config).expect("client")
}

fn before_photo() -> ImagePayload {
    ImagePayload::from_bytes(ImageFormat::Jpeg, b"before pixels")
}

fn model_path(model: &str) -> String {
    format!("/v1beta/models/{model}:generateContent")
}

fn text_response(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "candidates": [{ "content": { "parts": [{ "text": text }] } }]
    }))
}

fn image_response(data: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "candidates": [{ "content": { "parts": [
            { "text": "Here you go." },
            { "inlineData": { "mimeType": "image/png", "data": data } }
        ] } }]
    }))
}

#[tokio::test]
async fn analyze_returns_model_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(model_path(TEXT_MODEL)))
        .and(header("x-goog-api-key", "test-key"))
        .respond_with(text_response("Swap the carpet for oak flooring."))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let suggestion = client.analyze(&before_photo()).await.expect("analysis");
    assert_eq!(suggestion, "Swap the carpet for oak flooring.");
}

#[tokio::test]
async fn analyze_degrades_to_placeholder_on_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(model_path(TEXT_MODEL)))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let suggestion = client.analyze(&before_photo()).await.expect("degrades");
    assert_eq!(suggestion, "Could not analyze image.");
}

#[tokio::test]
async fn smart_describe_sends_thinking_budget() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(model_path(TEXT_MODEL)))
        .and(body_partial_json(serde_json::json!({
            "generationConfig": { "thinkingConfig": { "thinkingBudget": 1024 } }
        })))
        .respond_with(text_response("Phase 1: demolition (1 week)."))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let scope = client
        .smart_describe("new cabinets and counters")
        .await
        .expect("scope");
    assert_eq!(scope, "Phase 1: demolition (1 week).");
}

#[tokio::test]
async fn generate_routes_1k_to_flash_model() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(model_path(FLASH_IMAGE_MODEL)))
        .respond_with(image_response("Zmxhc2g="))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let image = client
        .generate(&before_photo(), "white shaker cabinets", Resolution::R1k)
        .await
        .expect("generate")
        .expect("image present");
    assert_eq!(image.base64, "Zmxhc2g=");
    assert_eq!(image.format, ImageFormat::Png);
}

#[tokio::test]
async fn generate_routes_4k_to_pro_model_with_image_size() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(model_path(PRO_IMAGE_MODEL)))
        .and(body_partial_json(serde_json::json!({
            "generationConfig": { "imageConfig": { "aspectRatio": "4:3", "imageSize": "4K" } }
        })))
        .respond_with(image_response("cHJv"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let image = client
        .generate(&before_photo(), "white shaker cabinets", Resolution::R4k)
        .await
        .expect("generate")
        .expect("image present");
    assert_eq!(image.base64, "cHJv");
}

#[tokio::test]
async fn generate_returns_none_when_no_image_in_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(model_path(FLASH_IMAGE_MODEL)))
        .respond_with(text_response("I cannot render that."))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let image = client
        .generate(&before_photo(), "anything", Resolution::R1k)
        .await
        .expect("generate");
    assert!(image.is_none());
}

#[tokio::test]
async fn generate_propagates_client_errors_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(model_path(FLASH_IMAGE_MODEL)))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad prompt"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .generate(&before_photo(), "anything", Resolution::R1k)
        .await
        .expect_err("client error propagates");
    assert!(matches!(err, GenError::Api { status: 400, .. }));
}

#[tokio::test]
async fn generate_retries_server_errors() {
    let server = MockServer::start().await;
    // Two attempts allowed; both fail, so the error surfaces after retrying.
    Mock::given(method("POST"))
        .and(path(model_path(FLASH_IMAGE_MODEL)))
        .respond_with(ResponseTemplate::new(503))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .generate(&before_photo(), "anything", Resolution::R1k)
        .await
        .expect_err("retries exhausted");
    assert!(matches!(err, GenError::Api { status: 503, .. }));
}

#[tokio::test]
async fn refine_always_uses_flash_model() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(model_path(FLASH_IMAGE_MODEL)))
        .and(body_partial_json(serde_json::json!({
            "contents": [{ "parts": [
                { "inlineData": { "mimeType": "image/png", "data": "Y3VycmVudA==" } },
                { "text": "Edit this image: make the counters darker. Maintain photorealism." }
            ] }]
        })))
        .respond_with(image_response("cmVmaW5lZA=="))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let current = ImagePayload::new(ImageFormat::Png, "Y3VycmVudA==");
    let refined = client
        .refine(&current, "make the counters darker")
        .await
        .expect("refine")
        .expect("image present");
    assert_eq!(refined.base64, "cmVmaW5lZA==");
}

#[tokio::test]
async fn generation_prompt_carries_photorealism_preamble() {
    let server = MockServer::start().await;
    let received: std::sync::Arc<std::sync::Mutex<Vec<String>>> =
        std::sync::Arc::default();
    let sink = received.clone();

    Mock::given(method("POST"))
        .and(path(model_path(FLASH_IMAGE_MODEL)))
        .respond_with(move |request: &Request| {
            let body: serde_json::Value =
                serde_json::from_slice(&request.body).expect("json body");
            if let Some(text) = body["contents"][0]["parts"][0]["text"].as_str() {
                sink.lock().expect("lock").push(text.to_string());
            }
            image_response("ZG9uZQ==")
        })
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .generate(&before_photo(), "Renovation details: new cabinets.", Resolution::R1k)
        .await
        .expect("generate");

    let prompts = received.lock().expect("lock");
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].starts_with(
        "A photorealistic renovation after photo based on the input image."
    ));
    assert!(prompts[0].contains("Renovation details: new cabinets."));
}
