//! Gemini `generateContent` adapter for [`SummaryProvider`].

use crate::config::GeminiConfig;
use crate::error::ApiError;
use crate::provider::{CodeSummary, SummaryProvider, SummaryRequest};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

const API_KEY_HEADER: &str = "x-goog-api-key";

const INSTRUCTION: &str =
    "Given the following repository file, provide a one-line high level explanation of its contents.";

pub struct GeminiClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
    max_code_chars: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_json_schema: Value,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct GeminiError {
    error: GeminiErrorDetail,
}

#[derive(Deserialize)]
struct GeminiErrorDetail {
    message: String,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config
                .api_key
                .as_deref()
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string),
            max_code_chars: config.max_code_chars,
        })
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

#[async_trait]
impl SummaryProvider for GeminiClient {
    async fn summarize(&self, request: &SummaryRequest) -> Result<CodeSummary, ApiError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            ApiError::ProviderNotConfigured(
                "Gemini API key missing (set GEMINI_API_KEY or gemini.api_key)".to_string(),
            )
        })?;

        let request = request.truncated(self.max_code_chars);
        let body = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part {
                    text: build_prompt(&request),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_json_schema: summary_schema(),
            },
        };

        debug!(model = %self.model, path = %request.path, "Requesting code summary");
        let response = self
            .client
            .post(self.url())
            .header(API_KEY_HEADER, api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;
        if !status.is_success() {
            let message = serde_json::from_str::<GeminiError>(&response_text)
                .map(|e| e.error.message)
                .unwrap_or(response_text);
            return Err(ApiError::UpstreamError {
                status: status.as_u16(),
                message,
            });
        }

        parse_summary(&response_text, &request)
    }
}

fn build_prompt(request: &SummaryRequest) -> String {
    format!(
        "{}\n\nFile name: {}\nPath: {}\nType: {}\n\n{}",
        INSTRUCTION, request.file_name, request.path, request.file_type, request.code
    )
}

fn summary_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "file_name": { "type": "string" },
            "summary": { "type": "string" },
            "path": { "type": "string" }
        },
        "required": ["file_name", "summary", "path"]
    })
}

/// Parse the first candidate's text parts as a [`CodeSummary`].
fn parse_summary(response_text: &str, request: &SummaryRequest) -> Result<CodeSummary, ApiError> {
    let response: GenerateResponse = serde_json::from_str(response_text).map_err(|e| {
        ApiError::ProviderError(format!("Failed to parse Gemini response: {}", e))
    })?;

    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| content.parts.into_iter().map(|p| p.text).collect())
        .ok_or_else(|| ApiError::ProviderError("Gemini returned no candidates".to_string()))?;

    let mut summary: CodeSummary = serde_json::from_str(strip_fence(&text)).map_err(|e| {
        ApiError::ProviderError(format!("Gemini summary is not valid JSON: {}", e))
    })?;
    if summary.file_name.is_empty() {
        summary.file_name = request.file_name.clone();
    }
    if summary.path.is_empty() {
        summary.path = request.path.clone();
    }
    Ok(summary)
}

/// Drop a surrounding markdown code fence, if any.
fn strip_fence(text: &str) -> &str {
    let trimmed = text.trim();
    trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .map(str::trim)
        .unwrap_or(trimmed)
}
