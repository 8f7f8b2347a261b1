//! Memoized deterministic report results.
//!
//! Results are keyed by everything a deterministic report's output can
//! depend on: the report, the snapshot version, and the filters. Entries
//! for a different snapshot version are dropped on write; the engine works
//! against one snapshot at a time, so one working set is enough.

use std::collections::HashMap;

use stocklens_core::MonthLabel;
use stocklens_inventory::Snapshot;

use crate::report::{ReportData, ReportFilters, ReportKind};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct CacheKey {
    report: ReportKind,
    snapshot_version: u64,
    month: Option<MonthLabel>,
    /// Rate keyed by bit pattern; filters are validated finite beforehand.
    rate_bits: Option<u64>,
}

impl CacheKey {
    pub(crate) fn new(report: ReportKind, snapshot: &Snapshot, filters: &ReportFilters) -> Self {
        Self {
            report,
            snapshot_version: snapshot.version,
            month: filters.selected_month,
            rate_bits: filters.carrying_cost_rate.map(f64::to_bits),
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct ReportCache {
    snapshot_version: Option<u64>,
    entries: HashMap<CacheKey, ReportData>,
}

impl ReportCache {
    pub(crate) fn get(&self, key: &CacheKey) -> Option<ReportData> {
        self.entries.get(key).cloned()
    }

    pub(crate) fn put(&mut self, key: CacheKey, data: ReportData) {
        if self.snapshot_version != Some(key.snapshot_version) {
            self.entries.clear();
            self.snapshot_version = Some(key.snapshot_version);
        }
        self.entries.insert(key, data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(version: u64) -> Snapshot {
        Snapshot::default().with_version(version)
    }

    fn seasonality_data() -> ReportData {
        ReportData::Seasonality(Vec::new())
    }

    #[test]
    fn hits_on_identical_key_only() {
        let mut cache = ReportCache::default();
        let filters = ReportFilters::default();
        let key = CacheKey::new(ReportKind::Seasonality, &snapshot(1), &filters);
        cache.put(key.clone(), seasonality_data());

        assert!(cache.get(&key).is_some());

        let other_report = CacheKey::new(ReportKind::TopConsumed, &snapshot(1), &filters);
        assert!(cache.get(&other_report).is_none());

        let month_filtered = CacheKey::new(
            ReportKind::Seasonality,
            &snapshot(1),
            &ReportFilters::default().with_month("2024-01".parse().unwrap()),
        );
        assert!(cache.get(&month_filtered).is_none());
    }

    #[test]
    fn new_snapshot_version_drops_the_old_working_set() {
        let mut cache = ReportCache::default();
        let filters = ReportFilters::default();
        let v1 = CacheKey::new(ReportKind::Seasonality, &snapshot(1), &filters);
        cache.put(v1.clone(), seasonality_data());

        let v2 = CacheKey::new(ReportKind::Seasonality, &snapshot(2), &filters);
        cache.put(v2.clone(), seasonality_data());

        assert!(cache.get(&v1).is_none());
        assert!(cache.get(&v2).is_some());
    }

    #[test]
    fn distinct_rates_key_distinct_entries() {
        let mut cache = ReportCache::default();
        let low = CacheKey::new(
            ReportKind::CarryingCost,
            &snapshot(1),
            &ReportFilters::default().with_carrying_cost_rate(12.0),
        );
        let high = CacheKey::new(
            ReportKind::CarryingCost,
            &snapshot(1),
            &ReportFilters::default().with_carrying_cost_rate(24.0),
        );
        cache.put(low.clone(), seasonality_data());

        assert!(cache.get(&low).is_some());
        assert!(cache.get(&high).is_none());
    }
}
