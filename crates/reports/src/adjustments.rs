//! Inventory adjustments: the audit listing of a period's movements.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stocklens_core::{ItemId, MonthLabel, MovementId, TechnicianId};
use stocklens_inventory::{MovementDirection, Snapshot};

use crate::filter;

/// One movement, annotated for the audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentEntry {
    pub movement_id: MovementId,
    pub item_id: ItemId,
    /// Catalog name, or the raw item id when the catalog has no entry.
    pub item_name: String,
    pub direction: MovementDirection,
    pub quantity: i64,
    /// quantity × unit price; 0 when the item is unpriceable.
    pub value: u64,
    pub occurred_at: DateTime<Utc>,
    pub technician_id: Option<TechnicianId>,
    pub notes: Option<String>,
}

/// Every movement in the period, any direction, newest first.
///
/// No deduplication and no exclusions: audit completeness wins over
/// tidiness, so unpriceable movements stay in the listing.
pub fn inventory_adjustments(
    snapshot: &Snapshot,
    month: Option<MonthLabel>,
) -> Vec<AdjustmentEntry> {
    let index = snapshot.item_index();

    let in_scope = match month {
        Some(month) => filter::in_period(&snapshot.movements, month),
        None => snapshot.movements.iter().collect(),
    };

    let mut entries: Vec<AdjustmentEntry> = in_scope
        .into_iter()
        .map(|movement| {
            let (item_name, value) = match index.get(&movement.item_id) {
                Some(item) => (item.name.clone(), movement.value_at(item.unit_price)),
                None => (movement.item_id.to_string(), 0),
            };
            AdjustmentEntry {
                movement_id: movement.id.clone(),
                item_id: movement.item_id.clone(),
                item_name,
                direction: movement.direction,
                quantity: movement.quantity,
                value,
                occurred_at: movement.occurred_at,
                technician_id: movement.technician_id.clone(),
                notes: movement.notes.clone(),
            }
        })
        .collect();

    entries.sort_by_key(|entry| std::cmp::Reverse(entry.occurred_at));
    entries
}
