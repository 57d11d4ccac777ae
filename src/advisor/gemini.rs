//! Category advisor backed by the Google Generative Language API
//!
//! One `generateContent` call per suggestion, asking for a JSON object
//! `{"category": "..."}`. No retries.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::json;

use crate::config::settings::AdvisorSettings;

use super::prompt::{build_prompt, normalize_category};
use super::{AdvisorError, CategoryAdvisor, CategorySuggestion};

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Clone)]
pub struct GeminiAdvisor {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiAdvisor {
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, AdvisorError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AdvisorError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: api_key.into(),
        })
    }

    /// Build from settings, reading the API key from the environment
    pub fn from_settings(settings: &AdvisorSettings) -> Result<Self, AdvisorError> {
        if !settings.enabled {
            return Err(AdvisorError::NotConfigured(
                "category suggestions are disabled in config.json".into(),
            ));
        }

        let api_key = settings.api_key().ok_or_else(|| {
            AdvisorError::NotConfigured(format!("{} is not set", settings.api_key_env))
        })?;

        Self::new(
            settings.endpoint.clone(),
            settings.model.clone(),
            api_key,
            Duration::from_secs(settings.timeout_secs.max(1)),
        )
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }

    fn request_body(description: &str) -> serde_json::Value {
        json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": build_prompt(description) }]
            }],
            "generationConfig": {
                "temperature": 0.0,
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "category": {
                            "type": "STRING",
                            "description": "A concise, single-word category for the expense."
                        }
                    },
                    "required": ["category"]
                }
            }
        })
    }
}

impl CategoryAdvisor for GeminiAdvisor {
    fn suggest(&self, description: &str) -> Result<CategorySuggestion, AdvisorError> {
        if description.trim().is_empty() {
            return Err(AdvisorError::EmptyDescription);
        }

        tracing::debug!(model = %self.model, "requesting category suggestion");

        let response = self
            .client
            .post(self.url())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&Self::request_body(description))
            .send()
            .map_err(AdvisorError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AdvisorError::Status {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        let payload: GenerateContentResponse = response
            .json()
            .map_err(|e| AdvisorError::MalformedResponse(format!("invalid JSON body: {}", e)))?;

        let text = payload.first_text().ok_or_else(|| {
            AdvisorError::MalformedResponse("response contained no candidate text".into())
        })?;

        parse_candidate_text(text)
    }
}

/// Read the model's text as `{"category": ...}`, falling back to plain text
fn parse_candidate_text(text: &str) -> Result<CategorySuggestion, AdvisorError> {
    let raw = match serde_json::from_str::<RawSuggestion>(text) {
        Ok(parsed) => parsed.category,
        Err(_) => text.to_string(),
    };

    Ok(CategorySuggestion {
        category: normalize_category(&raw)?,
    })
}

#[derive(Debug, Deserialize)]
struct RawSuggestion {
    category: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateContentResponse {
    fn first_text(&self) -> Option<&str> {
        self.candidates
            .iter()
            .filter_map(|c| c.content.as_ref())
            .flat_map(|c| c.parts.iter())
            .filter_map(|p| p.text.as_deref())
            .find(|t| !t.trim().is_empty())
    }
}
