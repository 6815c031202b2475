use gloo_net::http::Request;
use log::error;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::chat::history::CompletionMessage;
use crate::config;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChatError {
    #[error("The assistant is not available right now.")]
    MissingApiKey,
    #[error("Could not reach the assistant: {0}")]
    Network(String),
    #[error("{0}")]
    Api(String),
    #[error("Unexpected response from the assistant: {0}")]
    Decode(String),
    #[error("The assistant did not reply.")]
    EmptyReply,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [CompletionMessage],
    temperature: f32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: CompletionMessage,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<ErrorDetail>,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

pub fn parse_completion(ok: bool, body: &str) -> Result<String, ChatError> {
    if !ok {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .map(|e| e.message)
            .unwrap_or_else(|| "The assistant returned an error.".to_string());
        return Err(ChatError::Api(message));
    }

    let response: CompletionResponse =
        serde_json::from_str(body).map_err(|e| ChatError::Decode(e.to_string()))?;
    let reply = response
        .choices
        .into_iter()
        .next()
        .map(|c| c.message.content.trim().to_string())
        .unwrap_or_default();
    if reply.is_empty() {
        return Err(ChatError::EmptyReply);
    }
    Ok(reply)
}

/// Sends the conversation to the completion endpoint. One attempt, no retry.
pub async fn complete(messages: Vec<CompletionMessage>) -> Result<String, ChatError> {
    let result = send(&messages).await;
    if let Err(e) = &result {
        error!("chat completion failed: {}", e);
    }
    result
}

async fn send(messages: &[CompletionMessage]) -> Result<String, ChatError> {
    let key = config::chat_api_key().ok_or(ChatError::MissingApiKey)?;
    let body = CompletionRequest {
        model: config::CHAT_MODEL,
        messages,
        temperature: config::CHAT_TEMPERATURE,
    };

    let response = Request::post(config::CHAT_COMPLETIONS_URL)
        .header("Authorization", &format!("Bearer {}", key))
        .json(&body)
        .map_err(|e| ChatError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ChatError::Network(e.to_string()))?;

    let ok = response.ok();
    let text = response
        .text()
        .await
        .map_err(|e| ChatError::Network(e.to_string()))?;
    parse_completion(ok, &text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_is_trimmed() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"  We build AI agents.\n"}}]}"#;
        assert_eq!(parse_completion(true, body), Ok("We build AI agents.".to_string()));
    }

    #[test]
    fn api_error_message_is_surfaced() {
        let body = r#"{"error":{"message":"Rate limit reached","type":"requests"}}"#;
        assert_eq!(
            parse_completion(false, body),
            Err(ChatError::Api("Rate limit reached".to_string()))
        );
    }

    #[test]
    fn unreadable_error_body_gets_a_generic_message() {
        assert!(matches!(parse_completion(false, "<html>"), Err(ChatError::Api(_))));
    }

    #[test]
    fn empty_choices_mean_no_reply() {
        assert_eq!(parse_completion(true, r#"{"choices":[]}"#), Err(ChatError::EmptyReply));
        assert_eq!(parse_completion(true, "{}"), Err(ChatError::EmptyReply));
    }

    #[test]
    fn malformed_success_body_is_a_decode_error() {
        assert!(matches!(parse_completion(true, "not json"), Err(ChatError::Decode(_))));
    }

    #[test]
    fn request_body_matches_the_api_shape() {
        let messages = vec![CompletionMessage {
            role: "user".to_string(),
            content: "hi".to_string(),
        }];
        let body = CompletionRequest {
            model: "gpt-4o",
            messages: &messages,
            temperature: 0.5,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "model": "gpt-4o",
                "messages": [{"role": "user", "content": "hi"}],
                "temperature": 0.5
            })
        );
    }
}
