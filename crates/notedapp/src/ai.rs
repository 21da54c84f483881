//! # AI Assistant
//!
//! The writing-assistant collaborator: given note text, fetch a
//! continuation suggestion, grammar feedback, or a content insight from a
//! generative-language service speaking the Gemini `generateContent` REST
//! shape. Plain text in, plain text out, no streaming.
//!
//! The note store knows nothing about this module; the only path back into
//! the store is the caller appending a returned string through the normal
//! note-update operation.
//!
//! ## Failure policy
//!
//! Every transport, provider, and parse error is caught here, logged, and
//! collapsed to the empty string ("no suggestion available"). Nothing from
//! this module ever reaches the store as an error or corrupts note content.
//!
//! ## Supersession
//!
//! Each request takes a generation token; a response whose token is no
//! longer current is discarded so a slow reply can never overwrite the
//! result of a newer request.

use crate::config::AiConfig;
use crate::error::{NotedError, Result};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Grammar feedback is skipped for inputs shorter than this.
const GRAMMAR_MIN_CHARS: usize = 10;
/// Content insights are skipped for inputs shorter than this.
const INSIGHT_MIN_CHARS: usize = 50;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct Assistant {
    client: reqwest::Client,
    config: AiConfig,
    generation: AtomicU64,
}

impl Assistant {
    pub fn new(config: AiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            generation: AtomicU64::new(0),
        }
    }

    /// Suggest what might come next in the note.
    pub async fn suggest(&self, content: &str) -> String {
        self.generate(suggestion_prompt(content)).await
    }

    /// Review text for grammar and style issues.
    pub async fn grammar(&self, text: &str) -> String {
        if text.chars().count() < GRAMMAR_MIN_CHARS {
            return String::new();
        }
        self.generate(grammar_prompt(text)).await
    }

    /// Provide a brief insight into the note's content.
    pub async fn insight(&self, content: &str) -> String {
        if content.chars().count() < INSIGHT_MIN_CHARS {
            return String::new();
        }
        self.generate(insight_prompt(content)).await
    }

    async fn generate(&self, prompt: String) -> String {
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        match self.request(&prompt).await {
            Ok(text) => {
                if self.generation.load(Ordering::SeqCst) != token {
                    log::debug!("discarding superseded assistant response");
                    return String::new();
                }
                text
            }
            Err(e) => {
                log::warn!("assistant request failed: {}", e);
                String::new()
            }
        }
    }

    async fn request(&self, prompt: &str) -> Result<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| NotedError::Api("no API key configured".to_string()))?;

        let url = endpoint_url(&self.config, api_key);
        let body = request_body(prompt, &self.config);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| NotedError::Api(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(NotedError::Api(format!(
                "provider returned {}",
                response.status()
            )));
        }

        let json: Value = response
            .json()
            .await
            .map_err(|e| NotedError::Api(format!("unparsable response: {}", e)))?;
        Ok(extract_text(&json))
    }
}

fn endpoint_url(config: &AiConfig, api_key: &str) -> String {
    format!(
        "{}/v1beta/models/{}:generateContent?key={}",
        config.base_url.trim_end_matches('/'),
        config.model,
        api_key
    )
}

fn request_body(prompt: &str, config: &AiConfig) -> Value {
    json!({
        "contents": [{
            "role": "user",
            "parts": [{ "text": prompt }]
        }],
        "generationConfig": {
            "temperature": config.temperature,
            "topP": 0.95,
            "topK": 40,
            "maxOutputTokens": config.max_output_tokens,
        }
    })
}

fn extract_text(response: &Value) -> String {
    response
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .unwrap_or("")
        .trim()
        .to_string()
}

fn suggestion_prompt(content: &str) -> String {
    format!(
        "Based on the following note content, suggest what might come next. \
         Keep suggestions concise, relevant, and helpful. Only provide the \
         suggestion, no explanations. Note content: \"{}\"",
        content
    )
}

fn grammar_prompt(text: &str) -> String {
    format!(
        "Review the following text for grammar and style issues. For each \
         issue, provide clear feedback in this format:\n\n\
         \"Issue: [describe the grammar issue simply]\n\
         Correction: [provide the corrected version]\"\n\n\
         Keep feedback concise and focus only on actual grammar problems. \
         Text to check: \"{}\"",
        text
    )
}

fn insight_prompt(content: &str) -> String {
    format!(
        "Analyze this note content and provide a brief insight (key \
         concepts, main ideas, etc). Be very concise: \"{}\"",
        content
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_shape() {
        let config = AiConfig::default();
        let url = endpoint_url(&config, "secret");
        assert_eq!(
            url,
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent?key=secret"
        );
    }

    #[test]
    fn test_endpoint_url_trims_trailing_slash() {
        let config = AiConfig {
            base_url: "http://localhost:8080/".to_string(),
            ..Default::default()
        };
        let url = endpoint_url(&config, "k");
        assert!(url.starts_with("http://localhost:8080/v1beta/"));
    }

    #[test]
    fn test_request_body_shape() {
        let config = AiConfig::default();
        let body = request_body("hello", &config);

        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 2048);
    }

    #[test]
    fn test_extract_text_from_candidate() {
        let response = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "  a suggestion \n" }] }
            }]
        });
        assert_eq!(extract_text(&response), "a suggestion");
    }

    #[test]
    fn test_extract_text_missing_candidates_is_empty() {
        assert_eq!(extract_text(&json!({})), "");
        assert_eq!(extract_text(&json!({ "candidates": [] })), "");
    }

    #[tokio::test]
    async fn test_grammar_skips_short_input() {
        let assistant = Assistant::new(AiConfig::default());
        assert_eq!(assistant.grammar("short").await, "");
    }

    #[tokio::test]
    async fn test_insight_skips_short_input() {
        let assistant = Assistant::new(AiConfig::default());
        assert_eq!(assistant.insight("not fifty characters").await, "");
    }

    #[tokio::test]
    async fn test_missing_api_key_resolves_to_empty() {
        let assistant = Assistant::new(AiConfig::default());
        let long_content = "x".repeat(100);
        assert_eq!(assistant.suggest(&long_content).await, "");
    }
}
