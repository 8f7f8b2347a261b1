//! The observable run state value.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::report::{ReportData, ReportKind};

/// Correlation id for one orchestrated run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RunId(pub Uuid);

impl RunId {
    /// Uses UUIDv7 (time-ordered) so run ids sort like the log.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where the live run currently stands.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Idle,
    Running,
    Success,
    Error,
}

impl RunStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunStatus::Success | RunStatus::Error)
    }
}

/// The state value observed by the presentation layer.
///
/// Replaced wholesale on every transition; there is exactly one live run
/// per engine instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRun {
    pub status: RunStatus,
    pub report: Option<ReportKind>,
    pub run_id: Option<RunId>,
    /// Monotonically increasing across runs and resets; a completion whose
    /// sequence no longer matches the live state is superseded and dropped.
    pub sequence: u64,
    pub data: Option<ReportData>,
    pub error: Option<String>,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl ReportRun {
    pub fn idle() -> Self {
        Self::idle_at(0, None)
    }

    pub(crate) fn idle_at(sequence: u64, report: Option<ReportKind>) -> Self {
        Self {
            status: RunStatus::Idle,
            report,
            run_id: None,
            sequence,
            data: None,
            error: None,
            started_at: None,
            finished_at: None,
        }
    }

    pub(crate) fn running(report: ReportKind, run_id: RunId, sequence: u64) -> Self {
        Self {
            status: RunStatus::Running,
            report: Some(report),
            run_id: Some(run_id),
            sequence,
            data: None,
            error: None,
            started_at: Some(Utc::now()),
            finished_at: None,
        }
    }

    /// Transition to success; the payload replaces whatever came before.
    pub(crate) fn mark_success(&mut self, data: ReportData) {
        self.status = RunStatus::Success;
        self.data = Some(data);
        self.error = None;
        self.finished_at = Some(Utc::now());
    }

    /// Transition to error; prior data is cleared, the message retained.
    pub(crate) fn mark_error(&mut self, message: impl Into<String>) {
        self.status = RunStatus::Error;
        self.data = None;
        self.error = Some(message.into());
        self.finished_at = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stocklens_reports::SeasonalityPoint;

    #[test]
    fn run_lifecycle() {
        let run_id = RunId::new();
        let mut run = ReportRun::running(ReportKind::Seasonality, run_id, 3);
        assert_eq!(run.status, RunStatus::Running);
        assert!(run.started_at.is_some());
        assert!(!run.status.is_terminal());

        let points: Vec<SeasonalityPoint> = Vec::new();
        run.mark_success(ReportData::Seasonality(points));
        assert_eq!(run.status, RunStatus::Success);
        assert!(run.status.is_terminal());
        assert!(run.data.is_some());
        assert!(run.error.is_none());
        assert!(run.finished_at.is_some());
    }

    #[test]
    fn error_clears_data_and_keeps_the_message() {
        let mut run = ReportRun::running(ReportKind::Seasonality, RunId::new(), 4);
        run.mark_success(ReportData::Seasonality(Vec::new()));
        run.mark_error("assistant unavailable: timeout");

        assert_eq!(run.status, RunStatus::Error);
        assert!(run.data.is_none());
        assert_eq!(
            run.error.as_deref(),
            Some("assistant unavailable: timeout")
        );
    }

    #[test]
    fn idle_state_carries_no_run_artifacts() {
        let run = ReportRun::idle();
        assert_eq!(run.status, RunStatus::Idle);
        assert_eq!(run.sequence, 0);
        assert!(run.run_id.is_none());
        assert!(run.data.is_none());
        assert!(run.error.is_none());
    }
}
