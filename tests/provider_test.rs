// Integration tests for the OpenAI-compatible provider
//
// A mockito server stands in for the completion API.

use inter_eval::config::ProviderConfig;
use inter_eval::prompt::{EvaluationRequest, TemplateMode};
use inter_eval::providers::{CompletionProvider, OpenAIProvider, NO_FEEDBACK_FALLBACK};
use inter_eval::transcript::QaPair;
use mockito::{Matcher, Server};
use serde_json::json;

const PATH: &str = "/openai/v1/chat/completions";

fn provider_for(server: &Server) -> OpenAIProvider {
    let config = ProviderConfig {
        name: "groq".to_string(),
        endpoint: format!("{}{}", server.url(), PATH),
        model: "test-model".to_string(),
        api_key: "test-key".to_string(),
    };
    OpenAIProvider::from_config(&config).expect("provider construction failed")
}

fn request(mode: TemplateMode) -> EvaluationRequest {
    let pairs = vec![QaPair {
        question: "What is your greatest strength?".to_string(),
        answer: "Communication.".to_string(),
    }];
    EvaluationRequest::for_mode("test-model", mode, &pairs)
}

#[tokio::test]
async fn test_sends_bearer_and_chat_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .match_header("authorization", "Bearer test-key")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(json!({
            "model": "test-model",
            "max_tokens": 2048
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": "chatcmpl-1",
                "choices": [{"index": 0, "message": {"role": "assistant", "content": "{\"overallScore\":8}"}}]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let provider = provider_for(&server);
    let text = provider
        .complete(&request(TemplateMode::Detailed))
        .await
        .unwrap();

    assert_eq!(text, "{\"overallScore\":8}");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_request_body_is_exact_chat_payload() {
    let mut server = Server::new_async().await;
    let req = request(TemplateMode::Scored);
    let mock = server
        .mock("POST", PATH)
        .match_body(Matcher::Json(json!({
            "model": "test-model",
            "messages": [
                {"role": "system", "content": "You are a professional interviewer and evaluator."},
                {"role": "user", "content": req.prompt}
            ],
            "temperature": 0.3,
            "max_tokens": 1024
        })))
        .with_status(200)
        .with_body(r#"{"choices":[{"message":{"content":"ok"}}]}"#)
        .create_async()
        .await;

    let text = provider_for(&server).complete(&req).await.unwrap();

    assert_eq!(text, "ok");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_content_falls_back() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices":[]}"#)
        .create_async()
        .await;

    let text = provider_for(&server)
        .complete(&request(TemplateMode::Narrative))
        .await
        .unwrap();

    assert_eq!(text, NO_FEEDBACK_FALLBACK);
}

#[tokio::test]
async fn test_non_success_status_is_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", PATH)
        .with_status(401)
        .with_body(r#"{"error":{"message":"Invalid API Key"}}"#)
        .create_async()
        .await;

    let err = provider_for(&server)
        .complete(&request(TemplateMode::Scored))
        .await
        .unwrap_err();

    let message = format!("{:#}", err);
    assert!(message.contains("401"), "unexpected error: {message}");
    assert!(message.contains("Invalid API Key"), "unexpected error: {message}");
}

#[tokio::test]
async fn test_non_json_success_body_is_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", PATH)
        .with_status(200)
        .with_body("<html>gateway</html>")
        .create_async()
        .await;

    let result = provider_for(&server)
        .complete(&request(TemplateMode::Scored))
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_unreachable_endpoint_is_error() {
    let config = ProviderConfig {
        endpoint: "http://127.0.0.1:1/openai/v1/chat/completions".to_string(),
        api_key: "test-key".to_string(),
        ..ProviderConfig::default()
    };
    let provider = OpenAIProvider::from_config(&config).unwrap();

    let result = provider.complete(&request(TemplateMode::Scored)).await;
    assert!(result.is_err());
}
