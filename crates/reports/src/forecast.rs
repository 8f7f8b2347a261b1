//! Stock-level projection from an external demand forecast.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stocklens_core::ItemId;
use stocklens_inventory::Item;

/// One day of predicted consumption, already parsed and ordered by the
/// caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyDemand {
    pub date: NaiveDate,
    /// Units expected to be issued; negative values model expected
    /// receipts.
    pub predicted_consumption: f64,
}

/// Projected stock at the end of one forecast day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub date: NaiveDate,
    pub projected_stock: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockProjection {
    pub item_id: ItemId,
    pub current_quantity: i64,
    /// Threshold marker for the chart, echoed from the item.
    pub reorder_point: i64,
    pub points: Vec<ProjectedPoint>,
    /// First day projected at or below the reorder point, if any.
    pub below_reorder_on: Option<NaiveDate>,
    /// First day projected at zero, if any.
    pub depleted_on: Option<NaiveDate>,
}

/// Walk the demand series forward from the item's current stock.
///
/// The zero floor FEEDS FORWARD: each day subtracts from the previous day's
/// clamped value, so a floored day resets the baseline and later receipts
/// rebuild stock from 0 rather than paying off a phantom negative balance.
pub fn project_stock_levels(item: &Item, series: &[DailyDemand]) -> StockProjection {
    let mut running = item.quantity.max(0) as f64;
    let mut points = Vec::with_capacity(series.len());
    let mut below_reorder_on = None;
    let mut depleted_on = None;

    for day in series {
        running = (running - day.predicted_consumption).max(0.0);
        if below_reorder_on.is_none() && running <= item.reorder_point as f64 {
            below_reorder_on = Some(day.date);
        }
        if depleted_on.is_none() && running == 0.0 {
            depleted_on = Some(day.date);
        }
        points.push(ProjectedPoint {
            date: day.date,
            projected_stock: running,
        });
    }

    StockProjection {
        item_id: item.id.clone(),
        current_quantity: item.quantity,
        reorder_point: item.reorder_point,
        points,
        below_reorder_on,
        depleted_on,
    }
}
