use super::{AnalysisRequest, AnalystError, MarketAnalyst};
use crate::config::AnalystConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

/// Client for the Gemini `generateContent` endpoint.
///
/// Sends a single request per analysis; there is no retry and no client-side
/// timeout.
pub struct GeminiAnalyst {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiAnalyst {
    pub fn new(config: &AnalystConfig, api_key: String) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
        }
    }

    pub fn request_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint, self.model
        )
    }
}

impl std::fmt::Debug for GeminiAnalyst {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiAnalyst")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl MarketAnalyst for GeminiAnalyst {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<String, AnalystError> {
        let body = json!({
            "contents": [{ "parts": [{ "text": request.prompt() }] }]
        });

        debug!(model = %self.model, "requesting market analysis");
        let response = self
            .client
            .post(self.request_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| AnalystError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "market analysis request rejected");
            return Err(AnalystError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| AnalystError::Transport(err.to_string()))?;
        extract_text(payload)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
struct ContentPart {
    text: Option<String>,
}

/// Joins the text parts of the first candidate.
pub(crate) fn extract_text(response: GenerateContentResponse) -> Result<String, AnalystError> {
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(AnalystError::EmptyResponse);
    }
    Ok(text)
}
