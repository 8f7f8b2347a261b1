//! The assistant boundary trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::result::{ForecastSeries, Insight, InsightError};

/// The narrative report families the assistant can produce.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrativeKind {
    MonthlySummary,
    StockOptimization,
    PredictiveMaintenance,
    AnomalyDetection,
}

impl NarrativeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NarrativeKind::MonthlySummary => "monthly_summary",
            NarrativeKind::StockOptimization => "stock_optimization",
            NarrativeKind::PredictiveMaintenance => "predictive_maintenance",
            NarrativeKind::AnomalyDetection => "anomaly_detection",
        }
    }
}

/// Input for one narrative call: the kind plus a caller-prepared context
/// digest (this crate never sees the snapshot itself).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeRequest {
    pub kind: NarrativeKind,
    /// Selected reporting month ("YYYY-MM"), when one is filtered.
    pub selected_month: Option<String>,
    /// Compact JSON digest of the working set.
    pub context: JsonValue,
}

impl NarrativeRequest {
    pub fn new(kind: NarrativeKind) -> Self {
        Self {
            kind,
            selected_month: None,
            context: JsonValue::Null,
        }
    }

    pub fn with_month(mut self, month: impl Into<String>) -> Self {
        self.selected_month = Some(month.into());
        self
    }

    pub fn with_context(mut self, context: JsonValue) -> Self {
        self.context = context;
        self
    }
}

/// Input for one demand-forecast call, mirroring the target item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastRequest {
    pub item_id: String,
    pub item_name: String,
    pub current_quantity: i64,
    pub reorder_point: i64,
    /// How many days ahead the caller wants projected.
    pub horizon_days: u32,
}

/// An injected asynchronous assistant.
///
/// One call per report run; implementations may be arbitrarily slow or
/// unavailable. Returning an error is a normal outcome the orchestrator
/// surfaces to the caller.
#[async_trait]
pub trait InsightProvider: Send + Sync + 'static {
    /// Whether the assistant has the configuration it needs to serve calls.
    async fn is_configured(&self) -> bool;

    /// Produce one narrative insight.
    async fn narrative(&self, request: NarrativeRequest) -> Result<Insight, InsightError>;

    /// Produce a raw daily demand series for one item.
    async fn demand_forecast(
        &self,
        request: ForecastRequest,
    ) -> Result<ForecastSeries, InsightError>;
}

/// Provider used when no assistant is wired in; every call fails fast.
#[derive(Debug, Default, Copy, Clone)]
pub struct Unconfigured;

#[async_trait]
impl InsightProvider for Unconfigured {
    async fn is_configured(&self) -> bool {
        false
    }

    async fn narrative(&self, _request: NarrativeRequest) -> Result<Insight, InsightError> {
        Err(InsightError::NotConfigured)
    }

    async fn demand_forecast(
        &self,
        _request: ForecastRequest,
    ) -> Result<ForecastSeries, InsightError> {
        Err(InsightError::NotConfigured)
    }
}
