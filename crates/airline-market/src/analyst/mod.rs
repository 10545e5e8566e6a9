mod gemini;
pub mod prompt;

pub use gemini::GeminiAnalyst;
pub use prompt::{
    market_trends_request, route_recommendations_request, BudgetBand, TravelFlexibility,
    TravelInterest, TravelPreferences,
};

use crate::config::AnalystConfig;
use async_trait::async_trait;
use serde::Serialize;
use std::fmt::Debug;
use std::sync::Arc;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub instruction: String,
    pub payload: Option<String>,
}

impl AnalysisRequest {
    pub fn prompt(&self) -> String {
        match &self.payload {
            Some(payload) => format!("{}\n\nRoute Data: {}", self.instruction, payload),
            None => self.instruction.clone(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnalystError {
    #[error("configure a market analyst API key (MARKET_ANALYST_API_KEY) to get AI-powered insights")]
    MissingApiKey,
    #[error("analyst request failed: {0}")]
    Transport(String),
    #[error("analyst returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("analyst returned no text")]
    EmptyResponse,
    #[error("unable to serialize record for analysis: {0}")]
    Serialization(String),
}

/// External text-generation collaborator. Implementations receive a fully
/// rendered prompt and return free text; the response has no schema.
#[async_trait]
pub trait MarketAnalyst: Debug + Send + Sync {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<String, AnalystError>;
}

/// Stand-in used when no API key is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredAnalyst;

#[async_trait]
impl MarketAnalyst for UnconfiguredAnalyst {
    async fn analyze(&self, _request: &AnalysisRequest) -> Result<String, AnalystError> {
        Err(AnalystError::MissingApiKey)
    }
}

pub fn from_config(config: &AnalystConfig) -> Arc<dyn MarketAnalyst> {
    match config.api_key.as_deref().map(str::trim) {
        Some(key) if !key.is_empty() => Arc::new(GeminiAnalyst::new(config, key.to_string())),
        _ => Arc::new(UnconfiguredAnalyst),
    }
}

/// Runs the analyst and folds any failure into a displayable message, so a
/// failing collaborator never aborts the surrounding report.
pub async fn narrate(analyst: &dyn MarketAnalyst, request: &AnalysisRequest) -> String {
    match analyst.analyze(request).await {
        Ok(text) => text,
        Err(AnalystError::MissingApiKey) => AnalystError::MissingApiKey.to_string(),
        Err(err) => {
            warn!(error = %err, "market analysis unavailable");
            format!("Error analyzing data: {err}")
        }
    }
}

/// Serializes `record` into the market-trend prompt and narrates it.
pub async fn narrate_record<T>(analyst: &dyn MarketAnalyst, record: &T) -> String
where
    T: Serialize + Sync + ?Sized,
{
    match market_trends_request(record) {
        Ok(request) => narrate(analyst, &request).await,
        Err(err) => format!("Error analyzing data: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct EchoAnalyst;

    #[async_trait]
    impl MarketAnalyst for EchoAnalyst {
        async fn analyze(&self, request: &AnalysisRequest) -> Result<String, AnalystError> {
            Ok(format!("echo: {}", request.instruction))
        }
    }

    #[derive(Debug)]
    struct FailingAnalyst;

    #[async_trait]
    impl MarketAnalyst for FailingAnalyst {
        async fn analyze(&self, _request: &AnalysisRequest) -> Result<String, AnalystError> {
            Err(AnalystError::Status {
                status: 503,
                body: "overloaded".to_string(),
            })
        }
    }

    fn request() -> AnalysisRequest {
        AnalysisRequest {
            instruction: "Summarize".to_string(),
            payload: None,
        }
    }

    #[tokio::test]
    async fn narrate_passes_text_through_unmodified() {
        assert_eq!(narrate(&EchoAnalyst, &request()).await, "echo: Summarize");
    }

    #[tokio::test]
    async fn narrate_converts_failures_into_messages() {
        let text = narrate(&FailingAnalyst, &request()).await;
        assert_eq!(text, "Error analyzing data: analyst returned HTTP 503: overloaded");
    }

    #[tokio::test]
    async fn unconfigured_analyst_reports_a_hint() {
        let text = narrate(&UnconfiguredAnalyst, &request()).await;
        assert!(text.contains("MARKET_ANALYST_API_KEY"));
        assert!(!text.starts_with("Error"));
    }

    #[test]
    fn blank_keys_fall_back_to_unconfigured() {
        let config = AnalystConfig {
            api_key: Some("   ".to_string()),
            model: "gemini-1.5-flash".to_string(),
            endpoint: "https://example.invalid".to_string(),
        };
        let analyst = from_config(&config);
        assert!(format!("{analyst:?}").contains("UnconfiguredAnalyst"));
    }

    #[test]
    fn prompt_appends_payload_when_present() {
        let request = AnalysisRequest {
            instruction: "Analyze".to_string(),
            payload: Some("{}".to_string()),
        };
        assert_eq!(request.prompt(), "Analyze\n\nRoute Data: {}");
    }
}
