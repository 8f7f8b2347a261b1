//! `stocklens-reports` — deterministic report aggregators.
//!
//! Every function in this crate is pure: it takes a `&Snapshot` (plus the
//! filters it needs) and returns a typed report payload. No IO, no async,
//! no shared state; the orchestrator owns status handling and memoization.

pub mod abc;
pub mod adjustments;
pub mod aging;
pub mod carrying_cost;
pub mod filter;
pub mod forecast;
pub mod seasonality;
pub mod stockouts;
pub mod supplier_performance;
pub mod technician_activity;
pub mod top_consumed;
pub mod turnover;

mod consumption;

pub use abc::{AbcClass, AbcEntry, abc_curve};
pub use adjustments::{AdjustmentEntry, inventory_adjustments};
pub use aging::{AgingEntry, NEVER_EXITED, stock_aging};
pub use carrying_cost::{CarryingCostEntry, CarryingCostReport, carrying_cost};
pub use forecast::{DailyDemand, ProjectedPoint, StockProjection, project_stock_levels};
pub use seasonality::{SeasonalityPoint, seasonality};
pub use stockouts::{StockDrift, StockoutEvent, StockoutReport, stockout_history};
pub use supplier_performance::{SupplierPerformance, UNKNOWN_SUPPLIER, supplier_performance};
pub use technician_activity::{TechnicianActivity, technician_activity};
pub use top_consumed::{ConsumedItem, RANK_LIMIT, TopConsumedReport, top_consumed};
pub use turnover::{TurnoverEntry, turnover};
