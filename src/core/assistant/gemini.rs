//! Gemini REST client for the assistant's primary path.
//!
//! Thin blocking wrapper over the `generateContent` endpoint. The model the
//! user configured is tried first, then a fixed fallback chain of known-good
//! model names. The reply is expected to be the JSON shape the system prompt
//! demands; anything unparseable degrades to a plain-text reply with no
//! navigation.

use crate::core::intent::NavigationIntent;
use serde::{Deserialize, Serialize};

/// Models tried after the configured one fails.
pub const MODEL_FALLBACKS: &[&str] = &["gemini-pro", "gemini-1.5-pro", "gemini-2.5-flash"];

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// The JSON shape the system prompt asks the model to emit.
#[derive(Deserialize)]
struct RawIntent {
    response: Option<String>,
    navigation: Option<crate::core::intent::Navigation>,
}

/// Blocking client for the Gemini `generateContent` API
pub struct GeminiClient {
    client: reqwest::blocking::Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl GeminiClient {
    /// Create a client with explicit configuration
    #[must_use]
    pub fn new(api_key: String, model: String, endpoint: String) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            api_key,
            model,
            endpoint,
        }
    }

    /// Whether an API key is present
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Models to attempt, configured model first, deduplicated in order
    #[must_use]
    pub fn candidate_models(&self) -> Vec<&str> {
        let mut models: Vec<&str> = Vec::new();
        if !self.model.trim().is_empty() {
            models.push(self.model.as_str());
        }
        for fallback in MODEL_FALLBACKS.iter().copied() {
            if !models.contains(&fallback) {
                models.push(fallback);
            }
        }
        models
    }

    /// Ask the model for a reply to `message` under `system` instructions.
    ///
    /// # Errors
    ///
    /// Returns an error when the client is unconfigured or every model in
    /// the fallback chain fails (network, HTTP status, or empty response).
    pub fn generate(&self, system: &str, message: &str) -> Result<NavigationIntent, String> {
        if !self.is_configured() {
            return Err("Gemini is not configured (missing API key)".to_string());
        }

        let prompt = format!("{system}\n\nUser message: {message}\n\nAssistant response (JSON only):");

        let mut last_err = String::new();
        for model in self.candidate_models() {
            match self.request(model, &prompt) {
                Ok(text) => return Ok(parse_intent(&text)),
                Err(err) => {
                    crate::debug!("Model \"{model}\" failed: {err}");
                    last_err = err;
                }
            }
        }

        Err(format!(
            "All Gemini models failed ({}). Last error: {last_err}",
            self.candidate_models().join(", ")
        ))
    }

    fn request(&self, model: &str, prompt: &str) -> Result<String, String> {
        let url = format!(
            "{}/models/{model}:generateContent?key={}",
            self.endpoint.trim_end_matches('/'),
            self.api_key
        );

        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .map_err(|e| format!("Request failed: {e}"))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().unwrap_or_default();
            return Err(format!("API error {status}: {text}"));
        }

        let parsed: GenerateResponse = response
            .json()
            .map_err(|e| format!("Malformed API response: {e}"))?;

        parsed
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| "Empty response from model".to_string())
    }
}

/// Strip a Markdown code fence around a JSON payload, if present.
///
/// Models often wrap JSON in ```json ... ``` blocks despite being asked for
/// raw JSON.
#[must_use]
pub fn extract_json_block(text: &str) -> &str {
    let Some(open) = text.find("```") else {
        return text;
    };
    let after_fence = &text[open + 3..];
    // Skip an optional language hint up to the end of the fence line.
    let body_start = after_fence.find('\n').map_or(0, |i| i + 1);
    let body = &after_fence[body_start..];
    body.find("```").map_or(text, |close| body[..close].trim())
}

/// Parse a model reply into an intent, degrading to plain text on failure.
#[must_use]
pub fn parse_intent(text: &str) -> NavigationIntent {
    let block = extract_json_block(text);
    match serde_json::from_str::<RawIntent>(block) {
        Ok(raw) => NavigationIntent {
            response: raw.response.unwrap_or_else(|| text.to_string()),
            navigation: raw.navigation,
        },
        Err(_) => NavigationIntent::reply(text.to_string()),
    }
}
