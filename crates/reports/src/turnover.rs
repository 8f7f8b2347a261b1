//! Inventory turnover: consumed value against stock value.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use stocklens_core::{ItemId, MonthLabel};
use stocklens_inventory::Snapshot;

use crate::consumption::consumption_by_item;

/// One item's turnover over the period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnoverEntry {
    pub item_id: ItemId,
    pub name: String,
    /// Cost of goods sold: issued value over the period.
    pub cogs: u64,
    /// Current quantity × unit price. A deliberate proxy for the average
    /// stock value, not a time-weighted mean; keep the simplification.
    pub avg_stock_value: u64,
    /// cogs / avg_stock_value; 0 when the stock value is 0. Never NaN.
    pub turnover: f64,
}

/// Compute turnover for every catalog item.
///
/// Items with no issues in the period appear with cogs 0. Sorted by turnover
/// descending, ties in catalog order.
pub fn turnover(snapshot: &Snapshot, month: Option<MonthLabel>) -> Vec<TurnoverEntry> {
    let cogs_by_item: HashMap<&ItemId, u64> = consumption_by_item(snapshot, month)
        .into_iter()
        .map(|c| (&c.item.id, c.total_value))
        .collect();

    let mut entries: Vec<TurnoverEntry> = snapshot
        .items
        .iter()
        .map(|item| {
            let cogs = cogs_by_item.get(&item.id).copied().unwrap_or(0);
            let avg_stock_value = item.stock_value();
            let turnover = if avg_stock_value == 0 {
                0.0
            } else {
                cogs as f64 / avg_stock_value as f64
            };
            TurnoverEntry {
                item_id: item.id.clone(),
                name: item.name.clone(),
                cogs,
                avg_stock_value,
                turnover,
            }
        })
        .collect();

    entries.sort_by(|a, b| b.turnover.total_cmp(&a.turnover));
    entries
}
