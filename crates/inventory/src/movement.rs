//! Stock movements: receipts and issues.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stocklens_core::{ItemId, MovementId, TechnicianId};

/// Direction of a stock movement.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementDirection {
    /// Receipt into stock.
    In,
    /// Issue out of stock.
    Out,
}

/// One recorded stock change. Immutable, append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    pub id: MovementId,
    pub item_id: ItemId,
    pub direction: MovementDirection,
    /// Units moved; always positive (checked by `Snapshot::validate`).
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
    /// The requisitioning technician, when the movement is an issue.
    pub technician_id: Option<TechnicianId>,
    pub notes: Option<String>,
}

impl Movement {
    pub fn is_outgoing(&self) -> bool {
        self.direction == MovementDirection::Out
    }

    pub fn is_incoming(&self) -> bool {
        self.direction == MovementDirection::In
    }

    /// Movement value priced at the given unit price.
    pub fn value_at(&self, unit_price: u64) -> u64 {
        (self.quantity.max(0) as u64).saturating_mul(unit_price)
    }
}
