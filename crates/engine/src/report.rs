//! Report catalog, filters, and typed payloads.

use core::fmt;

use serde::{Deserialize, Serialize};

use stocklens_ai::{Insight, NarrativeKind};
use stocklens_core::{ItemId, MonthLabel, ReportError, ReportResult};
use stocklens_reports::{
    AbcEntry, AdjustmentEntry, AgingEntry, CarryingCostReport, SeasonalityPoint, StockProjection,
    StockoutReport, SupplierPerformance, TechnicianActivity, TopConsumedReport, TurnoverEntry,
};

/// Every report the engine can produce.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    TopConsumed,
    TechnicianActivity,
    AbcCurve,
    Turnover,
    SupplierPerformance,
    StockAging,
    CarryingCost,
    StockoutHistory,
    Seasonality,
    InventoryAdjustments,
    DemandForecast,
    MonthlySummary,
    StockOptimization,
    PredictiveMaintenance,
    AnomalyDetection,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::TopConsumed => "top_consumed",
            ReportKind::TechnicianActivity => "technician_activity",
            ReportKind::AbcCurve => "abc_curve",
            ReportKind::Turnover => "turnover",
            ReportKind::SupplierPerformance => "supplier_performance",
            ReportKind::StockAging => "stock_aging",
            ReportKind::CarryingCost => "carrying_cost",
            ReportKind::StockoutHistory => "stockout_history",
            ReportKind::Seasonality => "seasonality",
            ReportKind::InventoryAdjustments => "inventory_adjustments",
            ReportKind::DemandForecast => "demand_forecast",
            ReportKind::MonthlySummary => "monthly_summary",
            ReportKind::StockOptimization => "stock_optimization",
            ReportKind::PredictiveMaintenance => "predictive_maintenance",
            ReportKind::AnomalyDetection => "anomaly_detection",
        }
    }

    /// Whether the report awaits the external assistant.
    pub fn needs_assistant(&self) -> bool {
        matches!(
            self,
            ReportKind::DemandForecast
                | ReportKind::MonthlySummary
                | ReportKind::StockOptimization
                | ReportKind::PredictiveMaintenance
                | ReportKind::AnomalyDetection
        )
    }

    /// Deterministic reports memoize per (snapshot version, filters).
    ///
    /// Stock aging is deterministic but depends on the capture instant, so
    /// caching it would serve stale day counts.
    pub fn is_cacheable(&self) -> bool {
        !self.needs_assistant() && *self != ReportKind::StockAging
    }

    /// The narrative family this report maps to, if it is one.
    pub fn narrative_kind(&self) -> Option<NarrativeKind> {
        match self {
            ReportKind::MonthlySummary => Some(NarrativeKind::MonthlySummary),
            ReportKind::StockOptimization => Some(NarrativeKind::StockOptimization),
            ReportKind::PredictiveMaintenance => Some(NarrativeKind::PredictiveMaintenance),
            ReportKind::AnomalyDetection => Some(NarrativeKind::AnomalyDetection),
            _ => None,
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-owned filter selections, validated before dispatch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportFilters {
    pub selected_month: Option<MonthLabel>,
    /// Annual carrying-cost rate in percent; required only for the
    /// carrying-cost report.
    pub carrying_cost_rate: Option<f64>,
    /// Target item; required only for the demand-forecast report.
    pub forecast_item: Option<ItemId>,
}

impl ReportFilters {
    pub fn with_month(mut self, month: MonthLabel) -> Self {
        self.selected_month = Some(month);
        self
    }

    pub fn with_carrying_cost_rate(mut self, rate: f64) -> Self {
        self.carrying_cost_rate = Some(rate);
        self
    }

    pub fn with_forecast_item(mut self, item: ItemId) -> Self {
        self.forecast_item = Some(item);
        self
    }

    /// Check the filters a report requires. A failure here is rejected
    /// pre-dispatch and never touches the run state.
    pub fn validate_for(&self, report: ReportKind) -> ReportResult<()> {
        if let Some(rate) = self.carrying_cost_rate {
            if !rate.is_finite() || rate < 0.0 {
                return Err(ReportError::validation(format!(
                    "carrying-cost rate must be a finite number >= 0, got {rate}"
                )));
            }
        }

        match report {
            ReportKind::CarryingCost if self.carrying_cost_rate.is_none() => Err(
                ReportError::validation("carrying-cost report requires a carrying-cost rate"),
            ),
            ReportKind::DemandForecast if self.forecast_item.is_none() => Err(
                ReportError::validation("demand-forecast report requires a target item"),
            ),
            _ => Ok(()),
        }
    }
}

/// The typed payload of a finished run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "report", content = "payload", rename_all = "snake_case")]
pub enum ReportData {
    TopConsumed(TopConsumedReport),
    TechnicianActivity(Vec<TechnicianActivity>),
    AbcCurve(Vec<AbcEntry>),
    Turnover(Vec<TurnoverEntry>),
    SupplierPerformance(Vec<SupplierPerformance>),
    StockAging(Vec<AgingEntry>),
    CarryingCost(CarryingCostReport),
    StockoutHistory(StockoutReport),
    Seasonality(Vec<SeasonalityPoint>),
    InventoryAdjustments(Vec<AdjustmentEntry>),
    DemandForecast(StockProjection),
    Narrative(Insight),
}
