//! ABC classification: items tiered by cumulative share of consumption value.

use serde::{Deserialize, Serialize};

use stocklens_core::{ItemId, MonthLabel};
use stocklens_inventory::Snapshot;

use crate::consumption::consumption_by_item;

/// Cumulative share (percent) up to which an item is class A.
pub const CLASS_A_THRESHOLD_PCT: f64 = 80.0;
/// Cumulative share (percent) up to which an item is class B.
pub const CLASS_B_THRESHOLD_PCT: f64 = 95.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbcClass {
    A,
    B,
    C,
}

/// One row of the ABC curve, in descending consumption-value order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbcEntry {
    pub item_id: ItemId,
    pub name: String,
    pub total_value: u64,
    /// Running share of the grand total, including this entry, in percent.
    pub cumulative_percentage: f64,
    pub class: AbcClass,
}

/// Classify period consumption into A/B/C tiers.
///
/// The class thresholds are evaluated against the cumulative share *above*
/// each entry (the running percentage before its own value is added), so the
/// top consumer is class A even when it alone is the whole total. Items with
/// zero consumption in the period are excluded.
pub fn abc_curve(snapshot: &Snapshot, month: Option<MonthLabel>) -> Vec<AbcEntry> {
    let mut totals = consumption_by_item(snapshot, month);
    totals.retain(|c| c.total_value > 0);
    totals.sort_by(|a, b| b.total_value.cmp(&a.total_value));

    let grand_total: u64 = totals.iter().map(|c| c.total_value).sum();

    let mut entries = Vec::with_capacity(totals.len());
    let mut running: u64 = 0;
    for consumption in totals {
        let share_above = percentage(running, grand_total);
        running += consumption.total_value;

        let class = if share_above <= CLASS_A_THRESHOLD_PCT {
            AbcClass::A
        } else if share_above <= CLASS_B_THRESHOLD_PCT {
            AbcClass::B
        } else {
            AbcClass::C
        };

        entries.push(AbcEntry {
            item_id: consumption.item.id.clone(),
            name: consumption.item.name.clone(),
            total_value: consumption.total_value,
            cumulative_percentage: percentage(running, grand_total),
            class,
        });
    }

    entries
}

fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}
