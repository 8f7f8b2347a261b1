//! `stocklens-ai`
//!
//! **Responsibility:** the generative-assistant boundary.
//!
//! This crate is intentionally **not** part of the data model:
//! - It must not depend on the inventory snapshot types.
//! - It never mutates engine state.
//! - It exchanges **insight payloads**, prepared and consumed by callers.
//!
//! The assistant itself is an external service the engine cannot count on;
//! every call may fail with a human-readable message, and an unconfigured
//! provider is a normal condition, not a bug.

pub mod provider;
pub mod result;

pub use provider::{ForecastRequest, InsightProvider, NarrativeKind, NarrativeRequest, Unconfigured};
pub use result::{ForecastPoint, ForecastSeries, Insight, InsightError};
