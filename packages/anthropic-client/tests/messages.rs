//! HTTP-level tests for the Messages API client against a local mock server.

use anthropic_client::{AnthropicClient, AnthropicError, Message, MessagesRequest};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn request() -> MessagesRequest {
    MessagesRequest::new("claude-test")
        .max_tokens(256)
        .message(Message::user("Translate this"))
}

#[tokio::test]
async fn test_messages_returns_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "sk-ant-test"))
        .and(header("anthropic-version", "2023-06-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "msg_1",
            "type": "message",
            "role": "assistant",
            "content": [{"type": "text", "text": "# 翻訳記事"}],
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 12, "output_tokens": 4}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client =
        AnthropicClient::new("sk-ant-test").with_base_url(format!("{}/v1", server.uri()));
    let response = client.messages(request()).await.unwrap();

    assert_eq!(response.text, "# 翻訳記事");
    assert_eq!(response.usage.unwrap().input_tokens, 12);
}

#[tokio::test]
async fn test_messages_surfaces_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(529).set_body_json(json!({
            "type": "error",
            "error": {"type": "overloaded_error", "message": "Overloaded"}
        })))
        .mount(&server)
        .await;

    let client = AnthropicClient::new("key").with_base_url(format!("{}/v1", server.uri()));
    let err = client.messages(request()).await.unwrap_err();

    match err {
        AnthropicError::Api {
            status,
            kind,
            message,
        } => {
            assert_eq!(status, 529);
            assert_eq!(kind, "overloaded_error");
            assert_eq!(message, "Overloaded");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_messages_rejects_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = AnthropicClient::new("key").with_base_url(format!("{}/v1", server.uri()));
    let err = client.messages(request()).await.unwrap_err();

    assert!(matches!(err, AnthropicError::Decode(_)));
}

#[tokio::test]
async fn test_messages_non_envelope_error_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let client = AnthropicClient::new("key").with_base_url(format!("{}/v1", server.uri()));
    let err = client.messages(request()).await.unwrap_err();

    assert!(matches!(
        err,
        AnthropicError::Api { status: 502, ref kind, ref message }
            if kind == "unknown" && message == "Bad Gateway"
    ));
}

#[tokio::test]
async fn test_http_client_timeout_applies() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_delay(std::time::Duration::from_secs(5)))
        .mount(&server)
        .await;

    let http = reqwest::Client::builder()
        .timeout(std::time::Duration::from_millis(100))
        .build()
        .unwrap();
    let client = AnthropicClient::new("key")
        .with_base_url(format!("{}/v1", server.uri()))
        .with_http_client(http);
    let err = client.messages(request()).await.unwrap_err();

    assert!(matches!(err, AnthropicError::Transport(ref e) if e.is_timeout()));
}
