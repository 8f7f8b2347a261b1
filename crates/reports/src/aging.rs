//! Stock aging: time since each item last left the shelf.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stocklens_core::ItemId;
use stocklens_inventory::Snapshot;

/// Sentinel for items that have never been issued. Rendered distinctly by
/// the presentation layer, never as a negative day count.
pub const NEVER_EXITED: i64 = -1;

/// One stocked item's aging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgingEntry {
    pub item_id: ItemId,
    pub name: String,
    pub quantity: i64,
    /// Whole days since the most recent issue across full history, or
    /// [`NEVER_EXITED`].
    pub days_since_last_exit: i64,
}

/// Aging for every item currently in stock.
///
/// The last issue is searched across the FULL movement history, not the
/// selected period. `now` is captured once per run by the orchestrator so
/// one report is internally consistent. Sorted stalest first, never-exited
/// items ahead of everything.
pub fn stock_aging(snapshot: &Snapshot, now: DateTime<Utc>) -> Vec<AgingEntry> {
    let mut last_exit: HashMap<&ItemId, DateTime<Utc>> = HashMap::new();
    for movement in snapshot.movements.iter().filter(|m| m.is_outgoing()) {
        last_exit
            .entry(&movement.item_id)
            .and_modify(|at| *at = (*at).max(movement.occurred_at))
            .or_insert(movement.occurred_at);
    }

    let mut entries: Vec<AgingEntry> = snapshot
        .items
        .iter()
        .filter(|item| item.quantity > 0)
        .map(|item| {
            let days_since_last_exit = match last_exit.get(&item.id) {
                // future-dated exits clamp to 0 so they cannot collide with
                // the never-exited sentinel
                Some(at) => (now - *at).num_days().max(0),
                None => NEVER_EXITED,
            };
            AgingEntry {
                item_id: item.id.clone(),
                name: item.name.clone(),
                quantity: item.quantity,
                days_since_last_exit,
            }
        })
        .collect();

    entries.sort_by_key(|entry| {
        std::cmp::Reverse(if entry.days_since_last_exit == NEVER_EXITED {
            i64::MAX
        } else {
            entry.days_since_last_exit
        })
    });
    entries
}
