//! Inventory data model.
//!
//! This crate contains the read-only entity collections the analytics engine
//! computes over, exactly as delivered by the external data store. No
//! business rules live here beyond structural invariants; the engine never
//! mutates these values.

pub mod item;
pub mod movement;
pub mod snapshot;

pub use item::{Item, Supplier, Technician};
pub use movement::{Movement, MovementDirection};
pub use snapshot::Snapshot;
