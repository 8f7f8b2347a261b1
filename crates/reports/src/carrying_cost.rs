//! Carrying cost: the monthly price of keeping stock on the shelf.

use serde::{Deserialize, Serialize};

use stocklens_core::ItemId;
use stocklens_inventory::Snapshot;

/// One stocked item's carrying cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarryingCostEntry {
    pub item_id: ItemId,
    pub name: String,
    /// Current quantity × unit price, the same proxy the turnover report
    /// uses.
    pub avg_stock_value: u64,
    /// avg_stock_value × (rate / 100) / 12, in smallest currency units.
    pub monthly_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarryingCostReport {
    /// The annual rate the report was computed with, echoed for display.
    pub annual_rate_pct: f64,
    pub items: Vec<CarryingCostEntry>,
    pub total_monthly_cost: f64,
}

/// Estimate monthly carrying cost per stocked item at an annual rate R%.
///
/// The rate is validated (finite, ≥ 0) before dispatch; zero price or
/// quantity yields a 0 cost, never NaN. Sorted by monthly cost descending,
/// ties in catalog order.
pub fn carrying_cost(snapshot: &Snapshot, annual_rate_pct: f64) -> CarryingCostReport {
    let monthly_rate = annual_rate_pct / 100.0 / 12.0;

    let mut items: Vec<CarryingCostEntry> = snapshot
        .items
        .iter()
        .filter(|item| item.quantity > 0)
        .map(|item| {
            let avg_stock_value = item.stock_value();
            CarryingCostEntry {
                item_id: item.id.clone(),
                name: item.name.clone(),
                avg_stock_value,
                monthly_cost: avg_stock_value as f64 * monthly_rate,
            }
        })
        .collect();

    items.sort_by(|a, b| b.monthly_cost.total_cmp(&a.monthly_cost));

    let total_monthly_cost = items.iter().map(|entry| entry.monthly_cost).sum();

    CarryingCostReport {
        annual_rate_pct,
        items,
        total_monthly_cost,
    }
}
