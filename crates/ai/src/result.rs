//! Assistant payloads and errors.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use thiserror::Error;

/// Payload returned by a narrative call.
///
/// This is an insight for display, not domain data; the engine stores it
/// verbatim in the run state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    /// Human-readable narrative text.
    pub summary: String,

    /// Confidence in \[0, 1\] (recommended convention; not enforced).
    pub confidence: f64,

    /// Free-form metadata (model name, token counts, structured findings).
    pub metadata: JsonValue,
}

impl Insight {
    pub fn new(summary: impl Into<String>, confidence: f64) -> Self {
        Self {
            summary: summary.into(),
            confidence,
            metadata: JsonValue::Null,
        }
    }

    pub fn with_metadata(mut self, metadata: JsonValue) -> Self {
        self.metadata = metadata;
        self
    }
}

/// One day of the raw demand series returned by a forecast call.
///
/// Wire-level: the date stays an ISO-8601 string ("YYYY-MM-DD") until the
/// engine validates and parses the series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: String,
    pub predicted_consumption: f64,
}

/// The assistant's raw forecast, ordered by date by convention.
pub type ForecastSeries = Vec<ForecastPoint>;

#[derive(Debug, Error)]
pub enum InsightError {
    #[error("assistant is not configured")]
    NotConfigured,

    #[error("assistant rejected the request: {0}")]
    Rejected(String),

    #[error("assistant returned a malformed payload: {0}")]
    MalformedPayload(String),

    #[error("assistant unavailable: {0}")]
    Unavailable(String),
}
