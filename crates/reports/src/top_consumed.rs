//! Top-consumed report: ranked issue totals per item.

use serde::{Deserialize, Serialize};

use stocklens_core::{ItemId, MonthLabel};
use stocklens_inventory::Snapshot;

use crate::consumption::consumption_by_item;

/// How many items each ranking keeps.
pub const RANK_LIMIT: usize = 5;

/// One item's issue totals over the period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumedItem {
    pub item_id: ItemId,
    pub name: String,
    pub total_quantity: i64,
    pub total_value: u64,
}

/// The two rankings, each top-5 by its own metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopConsumedReport {
    pub by_value: Vec<ConsumedItem>,
    pub by_quantity: Vec<ConsumedItem>,
}

/// Rank issue consumption over the period, by value and by quantity.
///
/// Descending on each metric; ties keep encounter order (stable sort over
/// first-seen grouping). Items with no issues in the period are excluded,
/// never zero-padded.
pub fn top_consumed(snapshot: &Snapshot, month: Option<MonthLabel>) -> TopConsumedReport {
    let totals: Vec<ConsumedItem> = consumption_by_item(snapshot, month)
        .into_iter()
        .map(|c| ConsumedItem {
            item_id: c.item.id.clone(),
            name: c.item.name.clone(),
            total_quantity: c.total_quantity,
            total_value: c.total_value,
        })
        .collect();

    let mut by_value = totals.clone();
    by_value.sort_by(|a, b| b.total_value.cmp(&a.total_value));
    by_value.truncate(RANK_LIMIT);

    let mut by_quantity = totals;
    by_quantity.sort_by(|a, b| b.total_quantity.cmp(&a.total_quantity));
    by_quantity.truncate(RANK_LIMIT);

    TopConsumedReport {
        by_value,
        by_quantity,
    }
}
