//! Shared per-item consumption grouping.
//!
//! Several reports (top-consumed, ABC, supplier performance) start from the
//! same aggregation: issue totals per catalog item over the selected period,
//! in encounter order. Encounter order matters: ranked reports break ties
//! by it via stable sorts.

use std::collections::HashMap;

use stocklens_core::MonthLabel;
use stocklens_inventory::{Item, Snapshot};

use crate::filter;

pub(crate) struct ItemConsumption<'a> {
    pub(crate) item: &'a Item,
    pub(crate) total_quantity: i64,
    pub(crate) total_value: u64,
}

/// Issue totals per item over the period, ordered by first appearance in the
/// log. Movements referencing an item missing from the catalog are skipped
/// (no price is known).
pub(crate) fn consumption_by_item(
    snapshot: &Snapshot,
    month: Option<MonthLabel>,
) -> Vec<ItemConsumption<'_>> {
    let index = snapshot.item_index();
    let mut order: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<ItemConsumption<'_>> = Vec::new();

    for movement in filter::outgoing_in_period(&snapshot.movements, month) {
        let Some(item) = index.get(&movement.item_id).copied() else {
            continue;
        };
        let slot = *order.entry(item.id.as_str()).or_insert_with(|| {
            totals.push(ItemConsumption {
                item,
                total_quantity: 0,
                total_value: 0,
            });
            totals.len() - 1
        });
        totals[slot].total_quantity += movement.quantity;
        totals[slot].total_value = totals[slot]
            .total_value
            .saturating_add(movement.value_at(item.unit_price));
    }

    totals
}
