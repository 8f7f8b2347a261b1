//! Catalog entities: items, technicians, suppliers.

use serde::{Deserialize, Serialize};

use stocklens_core::{ItemId, SupplierId, TechnicianId};

/// A stock item as provided by the external catalog.
///
/// `quantity` is the authoritative current stock level. Reports never
/// recompute it from movements; the stockout replay keeps its own running
/// total and surfaces any divergence instead of reconciling it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    /// Unit of measure (e.g., "pcs", "m").
    pub unit: String,
    /// Unit price in smallest currency unit (e.g., cents).
    pub unit_price: u64,
    /// Current stock on hand.
    pub quantity: i64,
    /// Threshold at/below which replenishment is recommended.
    pub reorder_point: i64,
    pub supplier_id: Option<SupplierId>,
}

impl Item {
    /// Value of the stock on hand (quantity × unit price).
    ///
    /// Non-positive stock values as 0 so downstream ratios stay finite.
    pub fn stock_value(&self) -> u64 {
        if self.quantity > 0 {
            (self.quantity as u64).saturating_mul(self.unit_price)
        } else {
            0
        }
    }
}

/// A technician who issues requisitions, looked up by reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technician {
    pub id: TechnicianId,
    pub name: String,
}

/// A supplier, looked up by reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
}
