//! Per-technician requisition activity.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use stocklens_core::{MonthLabel, TechnicianId};
use stocklens_inventory::Snapshot;

use crate::filter;

/// One technician's issue activity over the period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicianActivity {
    pub technician_id: TechnicianId,
    pub name: String,
    /// Number of issue movements attributed to the technician.
    pub requisition_count: usize,
    pub total_items: i64,
    pub total_value: u64,
}

/// Group issues in the period by technician.
///
/// Movements without a technician reference are excluded. Movements whose
/// item is missing from the catalog still count (the report is about labor);
/// they contribute 0 value. Sorted by total value descending, ties in
/// encounter order.
pub fn technician_activity(snapshot: &Snapshot, month: Option<MonthLabel>) -> Vec<TechnicianActivity> {
    let index = snapshot.item_index();
    let mut order: HashMap<&TechnicianId, usize> = HashMap::new();
    let mut activity: Vec<TechnicianActivity> = Vec::new();

    for movement in filter::outgoing_in_period(&snapshot.movements, month) {
        let Some(technician_id) = movement.technician_id.as_ref() else {
            continue;
        };
        let slot = *order.entry(technician_id).or_insert_with(|| {
            let name = snapshot
                .technician_name(technician_id)
                .unwrap_or(technician_id.as_str())
                .to_string();
            activity.push(TechnicianActivity {
                technician_id: technician_id.clone(),
                name,
                requisition_count: 0,
                total_items: 0,
                total_value: 0,
            });
            activity.len() - 1
        });

        let value = index
            .get(&movement.item_id)
            .map(|item| movement.value_at(item.unit_price))
            .unwrap_or(0);

        activity[slot].requisition_count += 1;
        activity[slot].total_items += movement.quantity;
        activity[slot].total_value = activity[slot].total_value.saturating_add(value);
    }

    activity.sort_by(|a, b| b.total_value.cmp(&a.total_value));
    activity
}
