//! Immutable data snapshot for one report run.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use stocklens_core::{ItemId, ReportError, ReportResult, SupplierId, TechnicianId};

use crate::item::{Item, Supplier, Technician};
use crate::movement::Movement;

/// The complete working set for one report run.
///
/// Immutable for the computation's lifetime: the orchestrator captures one
/// snapshot reference and reuses it across all sub-computations of a run.
/// `version` is assigned by the data-store collaborator and keys result
/// memoization; it carries no meaning beyond "same inputs".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u64,
    pub items: Vec<Item>,
    pub movements: Vec<Movement>,
    pub technicians: Vec<Technician>,
    pub suppliers: Vec<Supplier>,
}

impl Snapshot {
    pub fn new(
        items: Vec<Item>,
        movements: Vec<Movement>,
        technicians: Vec<Technician>,
        suppliers: Vec<Supplier>,
    ) -> Self {
        Self {
            version: 0,
            items,
            movements,
            technicians,
            suppliers,
        }
    }

    pub fn with_version(mut self, version: u64) -> Self {
        self.version = version;
        self
    }

    /// Linear catalog lookup; aggregators doing many lookups build
    /// [`Snapshot::item_index`] once instead.
    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Catalog keyed by item id, for one-pass aggregation over the log.
    pub fn item_index(&self) -> HashMap<&ItemId, &Item> {
        self.items.iter().map(|item| (&item.id, item)).collect()
    }

    pub fn technician_name(&self, id: &TechnicianId) -> Option<&str> {
        self.technicians
            .iter()
            .find(|t| &t.id == id)
            .map(|t| t.name.as_str())
    }

    pub fn supplier_name(&self, id: &SupplierId) -> Option<&str> {
        self.suppliers
            .iter()
            .find(|s| &s.id == id)
            .map(|s| s.name.as_str())
    }

    /// Check the structural invariants the aggregators rely on.
    ///
    /// Runs once pre-dispatch; aggregators themselves assume a valid
    /// snapshot and stay infallible.
    pub fn validate(&self) -> ReportResult<()> {
        for item in &self.items {
            if item.id.as_str().trim().is_empty() {
                return Err(ReportError::validation("item with blank id in catalog"));
            }
        }
        for movement in &self.movements {
            if movement.quantity <= 0 {
                return Err(ReportError::validation(format!(
                    "movement {} has non-positive quantity {}",
                    movement.id, movement.quantity
                )));
            }
        }
        Ok(())
    }
}
