//! Report orchestrator: validate, dispatch, publish.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, NaiveDate, Utc};
use tokio::sync::watch;

use stocklens_ai::{ForecastPoint, ForecastRequest, InsightProvider, NarrativeKind, NarrativeRequest};
use stocklens_core::{ReportError, ReportResult};
use stocklens_inventory::Snapshot;
use stocklens_reports::{self as reports, DailyDemand};

use crate::cache::{CacheKey, ReportCache};
use crate::report::{ReportData, ReportFilters, ReportKind};
use crate::state::{ReportRun, RunId, RunStatus};

/// Days of projection requested from the assistant.
const FORECAST_HORIZON_DAYS: u32 = 30;

/// The report orchestrator.
///
/// Owns the observable run state (a watch channel) and a memo of
/// deterministic results. One engine serves one presentation surface;
/// callers share it behind an `Arc` and fire `generate` without awaiting
/// the outcome; results arrive through the state value.
pub struct ReportEngine<P> {
    provider: P,
    state: watch::Sender<ReportRun>,
    sequence: AtomicU64,
    cache: Mutex<ReportCache>,
}

impl<P: InsightProvider> ReportEngine<P> {
    pub fn new(provider: P) -> Self {
        let (state, _) = watch::channel(ReportRun::idle());
        Self {
            provider,
            state,
            sequence: AtomicU64::new(0),
            cache: Mutex::new(ReportCache::default()),
        }
    }

    /// Observe run-state transitions.
    pub fn subscribe(&self) -> watch::Receiver<ReportRun> {
        self.state.subscribe()
    }

    /// The current run state, cloned.
    pub fn current(&self) -> ReportRun {
        self.state.borrow().clone()
    }

    /// Switch the selected report: status back to idle, any in-flight
    /// completion discarded. Filter selections are caller-owned and
    /// untouched.
    pub fn select_report(&self, report: ReportKind) {
        let sequence = self.next_sequence();
        self.state
            .send_replace(ReportRun::idle_at(sequence, Some(report)));
    }

    /// Teardown/cancellation: back to idle, any in-flight completion
    /// discarded.
    pub fn reset(&self) {
        let sequence = self.next_sequence();
        self.state.send_replace(ReportRun::idle_at(sequence, None));
    }

    /// Run a report against one captured snapshot.
    ///
    /// Fire-and-forget semantics: the returned `Result` reports only
    /// pre-dispatch rejections (validation, duplicate submission). Every
    /// dispatched run resolves through the state value, and a run that was
    /// preempted while suspended resolves into nothing.
    pub async fn generate(
        &self,
        report: ReportKind,
        snapshot: Arc<Snapshot>,
        filters: &ReportFilters,
    ) -> ReportResult<()> {
        filters.validate_for(report)?;
        snapshot.validate()?;
        if report == ReportKind::DemandForecast {
            // the target must resolve before any state transition
            let item_id = filters.forecast_item.as_ref().ok_or_else(|| {
                ReportError::validation("demand-forecast report requires a target item")
            })?;
            if snapshot.item(item_id).is_none() {
                return Err(ReportError::validation(format!(
                    "unknown forecast item: {item_id}"
                )));
            }
        }

        {
            let current = self.state.borrow();
            if current.status == RunStatus::Running && current.report == Some(report) {
                return Err(ReportError::conflict(format!(
                    "report {report} is already running"
                )));
            }
        }

        let sequence = self.next_sequence();
        let run_id = RunId::new();
        tracing::info!(report = %report, run = %run_id, sequence, "report run started");
        self.state
            .send_replace(ReportRun::running(report, run_id, sequence));

        let outcome = self.execute(report, &snapshot, filters).await;

        // Last request wins: publish only if this run is still the live one.
        let published = self.state.send_if_modified(|run| {
            if run.sequence != sequence {
                return false;
            }
            match &outcome {
                Ok(data) => run.mark_success(data.clone()),
                Err(err) => run.mark_error(err.to_string()),
            }
            true
        });

        if !published {
            tracing::debug!(report = %report, run = %run_id, sequence, "superseded run discarded");
        } else {
            match &outcome {
                Ok(_) => {
                    tracing::info!(report = %report, run = %run_id, sequence, "report run succeeded");
                }
                Err(err) => {
                    tracing::warn!(report = %report, run = %run_id, sequence, error = %err, "report run failed");
                }
            }
        }

        Ok(())
    }

    fn next_sequence(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::Relaxed) + 1
    }

    async fn execute(
        &self,
        report: ReportKind,
        snapshot: &Snapshot,
        filters: &ReportFilters,
    ) -> ReportResult<ReportData> {
        if !report.needs_assistant() {
            return self.compute_deterministic(report, snapshot, filters);
        }

        if !self.provider.is_configured().await {
            return Err(ReportError::external("assistant is not configured"));
        }

        if report == ReportKind::DemandForecast {
            self.run_forecast(snapshot, filters).await
        } else {
            self.run_narrative(report, snapshot, filters).await
        }
    }

    fn compute_deterministic(
        &self,
        report: ReportKind,
        snapshot: &Snapshot,
        filters: &ReportFilters,
    ) -> ReportResult<ReportData> {
        let key = report
            .is_cacheable()
            .then(|| CacheKey::new(report, snapshot, filters));

        if let Some(key) = &key {
            if let Ok(cache) = self.cache.lock() {
                if let Some(hit) = cache.get(key) {
                    tracing::debug!(report = %report, version = snapshot.version, "memoized result reused");
                    return Ok(hit);
                }
            }
        }

        let data = compute(report, snapshot, filters, Utc::now())?;

        if let Some(key) = key {
            if let Ok(mut cache) = self.cache.lock() {
                cache.put(key, data.clone());
            }
        }

        Ok(data)
    }

    async fn run_narrative(
        &self,
        report: ReportKind,
        snapshot: &Snapshot,
        filters: &ReportFilters,
    ) -> ReportResult<ReportData> {
        let kind = report.narrative_kind().ok_or_else(|| {
            ReportError::computation(format!("report {report} has no narrative mapping"))
        })?;
        let request = narrative_request(kind, snapshot, filters);
        let insight = self
            .provider
            .narrative(request)
            .await
            .map_err(|err| ReportError::external(err.to_string()))?;
        Ok(ReportData::Narrative(insight))
    }

    async fn run_forecast(
        &self,
        snapshot: &Snapshot,
        filters: &ReportFilters,
    ) -> ReportResult<ReportData> {
        let item = filters
            .forecast_item
            .as_ref()
            .and_then(|id| snapshot.item(id))
            .ok_or_else(|| {
                ReportError::computation("forecast target vanished after validation")
            })?;

        let request = ForecastRequest {
            item_id: item.id.to_string(),
            item_name: item.name.clone(),
            current_quantity: item.quantity,
            reorder_point: item.reorder_point,
            horizon_days: FORECAST_HORIZON_DAYS,
        };
        let series = self
            .provider
            .demand_forecast(request)
            .await
            .map_err(|err| ReportError::external(err.to_string()))?;

        let mut demands = parse_forecast_series(&series)?;
        demands.sort_by_key(|demand| demand.date);

        Ok(ReportData::DemandForecast(reports::project_stock_levels(
            item, &demands,
        )))
    }
}

/// Dispatch one deterministic report. `now` is captured once per run so one
/// report is internally consistent.
fn compute(
    report: ReportKind,
    snapshot: &Snapshot,
    filters: &ReportFilters,
    now: DateTime<Utc>,
) -> ReportResult<ReportData> {
    let month = filters.selected_month;
    let data = match report {
        ReportKind::TopConsumed => ReportData::TopConsumed(reports::top_consumed(snapshot, month)),
        ReportKind::TechnicianActivity => {
            ReportData::TechnicianActivity(reports::technician_activity(snapshot, month))
        }
        ReportKind::AbcCurve => ReportData::AbcCurve(reports::abc_curve(snapshot, month)),
        ReportKind::Turnover => ReportData::Turnover(reports::turnover(snapshot, month)),
        ReportKind::SupplierPerformance => {
            ReportData::SupplierPerformance(reports::supplier_performance(snapshot, month))
        }
        ReportKind::StockAging => ReportData::StockAging(reports::stock_aging(snapshot, now)),
        ReportKind::CarryingCost => {
            let rate = filters.carrying_cost_rate.ok_or_else(|| {
                ReportError::computation("carrying-cost rate missing after validation")
            })?;
            ReportData::CarryingCost(reports::carrying_cost(snapshot, rate))
        }
        ReportKind::StockoutHistory => {
            ReportData::StockoutHistory(reports::stockout_history(snapshot, month))
        }
        ReportKind::Seasonality => ReportData::Seasonality(reports::seasonality(snapshot)),
        ReportKind::InventoryAdjustments => {
            ReportData::InventoryAdjustments(reports::inventory_adjustments(snapshot, month))
        }
        ReportKind::DemandForecast
        | ReportKind::MonthlySummary
        | ReportKind::StockOptimization
        | ReportKind::PredictiveMaintenance
        | ReportKind::AnomalyDetection => {
            return Err(ReportError::computation(format!(
                "report {report} requires the assistant"
            )));
        }
    };
    Ok(data)
}

/// Compact working-set digest handed to the assistant; never the snapshot
/// itself.
fn narrative_request(
    kind: NarrativeKind,
    snapshot: &Snapshot,
    filters: &ReportFilters,
) -> NarrativeRequest {
    let issues = reports::filter::outgoing_in_period(&snapshot.movements, filters.selected_month);
    let index = snapshot.item_index();
    let issued_value: u64 = issues
        .iter()
        .filter_map(|movement| {
            index
                .get(&movement.item_id)
                .map(|item| movement.value_at(item.unit_price))
        })
        .sum();

    let mut request = NarrativeRequest::new(kind).with_context(serde_json::json!({
        "items": snapshot.items.len(),
        "movements": snapshot.movements.len(),
        "technicians": snapshot.technicians.len(),
        "suppliers": snapshot.suppliers.len(),
        "issues_in_period": issues.len(),
        "issued_value_in_period": issued_value,
    }));
    if let Some(month) = filters.selected_month {
        request = request.with_month(month.to_string());
    }
    request
}

fn parse_forecast_series(series: &[ForecastPoint]) -> ReportResult<Vec<DailyDemand>> {
    series
        .iter()
        .map(|point| {
            let date = NaiveDate::parse_from_str(&point.date, "%Y-%m-%d").map_err(|_| {
                ReportError::external(format!(
                    "assistant returned a malformed forecast date: {:?}",
                    point.date
                ))
            })?;
            if !point.predicted_consumption.is_finite() {
                return Err(ReportError::external(format!(
                    "assistant returned a non-finite consumption for {date}"
                )));
            }
            Ok(DailyDemand {
                date,
                predicted_consumption: point.predicted_consumption,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_rejects_forecast_series() {
        let good = vec![ForecastPoint {
            date: "2024-04-01".to_string(),
            predicted_consumption: 2.5,
        }];
        let parsed = parse_forecast_series(&good).unwrap();
        assert_eq!(parsed[0].date, NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());

        let bad_date = vec![ForecastPoint {
            date: "April 1st".to_string(),
            predicted_consumption: 2.5,
        }];
        assert!(matches!(
            parse_forecast_series(&bad_date),
            Err(ReportError::ExternalService(_))
        ));

        let bad_value = vec![ForecastPoint {
            date: "2024-04-01".to_string(),
            predicted_consumption: f64::NAN,
        }];
        assert!(matches!(
            parse_forecast_series(&bad_value),
            Err(ReportError::ExternalService(_))
        ));
    }
}
