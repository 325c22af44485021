use serde_json::json;

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use storyblok_image_alt::config::GenerationOptions;
use storyblok_image_alt::providers::{AltTextModel, OpenAiProvider};

fn options() -> GenerationOptions {
    GenerationOptions {
        language: "en".to_string(),
        ..Default::default()
    }
}

fn completion_body(text: &str, total_tokens: u64) -> serde_json::Value {
    json!({
        "choices": [{ "message": { "role": "assistant", "content": text } }],
        "usage": { "prompt_tokens": 100, "completion_tokens": 20, "total_tokens": total_tokens }
    })
}

/// A successful call returns text and the reported token usage
#[tokio::test]
async fn test_describe_image_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("a red bicycle", 120)))
        .expect(1)
        .mount(&server)
        .await;

    let provider = OpenAiProvider::with_api_base("sk-test", server.uri()).unwrap();
    let generation = provider
        .describe_image("https://a.storyblok.com/f/1/a.png", &options())
        .await
        .unwrap();

    assert_eq!(generation.text, "a red bicycle");
    assert_eq!(generation.total_tokens, 120);
}

/// The request carries the model, the token cap, and the image URL
#[tokio::test]
async fn test_describe_image_request_shape() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("text", 10)))
        .mount(&server)
        .await;

    let mut opts = options();
    opts.model = "gpt-4o".to_string();
    opts.max_tokens = 750;
    opts.language = "de".to_string();

    let provider = OpenAiProvider::with_api_base("sk-test", server.uri()).unwrap();
    provider
        .describe_image("https://a.storyblok.com/f/1/a.png", &opts)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();

    assert_eq!(body["model"], "gpt-4o");
    assert_eq!(body["max_completion_tokens"], 750);
    assert_eq!(body["messages"][0]["role"], "system");
    let system_text = body["messages"][0]["content"][0]["text"].as_str().unwrap();
    assert!(system_text.contains("language: de"));
    assert_eq!(
        body["messages"][1]["content"][1]["image_url"]["url"],
        "https://a.storyblok.com/f/1/a.png"
    );
}

/// A response without usage information is rejected
#[tokio::test]
async fn test_describe_image_missing_usage_is_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": "text" } }]
        })))
        .mount(&server)
        .await;

    let provider = OpenAiProvider::with_api_base("sk-test", server.uri()).unwrap();
    let result = provider
        .describe_image("https://a.storyblok.com/f/1/a.png", &options())
        .await;

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("usage"));
}

/// A response without message content is rejected
#[tokio::test]
async fn test_describe_image_missing_content_is_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [],
            "usage": { "total_tokens": 10 }
        })))
        .mount(&server)
        .await;

    let provider = OpenAiProvider::with_api_base("sk-test", server.uri()).unwrap();
    let result = provider
        .describe_image("https://a.storyblok.com/f/1/a.png", &options())
        .await;

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("content"));
}

/// A non-success status is surfaced as a generation failure
#[tokio::test]
async fn test_describe_image_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .mount(&server)
        .await;

    let provider = OpenAiProvider::with_api_base("sk-test", server.uri()).unwrap();
    let result = provider
        .describe_image("https://a.storyblok.com/f/1/a.png", &options())
        .await;

    assert!(result.is_err());
    let message = result.unwrap_err().to_string();
    assert!(message.contains("Alt-text generation failed"));
    assert!(message.contains("429"));
}
