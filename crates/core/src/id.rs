//! Strongly-typed identifiers used across the engine.
//!
//! Snapshot entities arrive from an external store with opaque string ids;
//! newtypes keep item, movement, technician and supplier references from
//! being mixed up.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// Identifier of a stock item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

/// Identifier of a stock movement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovementId(String);

/// Identifier of a technician (requisition actor).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TechnicianId(String);

/// Identifier of a supplier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupplierId(String);

macro_rules! impl_str_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl FromStr for $t {
            type Err = ReportError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if s.trim().is_empty() {
                    return Err(ReportError::validation(concat!(
                        $name,
                        " cannot be blank"
                    )));
                }
                Ok(Self(s.to_string()))
            }
        }
    };
}

impl_str_newtype!(ItemId, "ItemId");
impl_str_newtype!(MovementId, "MovementId");
impl_str_newtype!(TechnicianId, "TechnicianId");
impl_str_newtype!(SupplierId, "SupplierId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_non_blank_ids() {
        let id: ItemId = "i1".parse().unwrap();
        assert_eq!(id.as_str(), "i1");
        assert_eq!(id.to_string(), "i1");
    }

    #[test]
    fn rejects_blank_ids() {
        assert!("".parse::<ItemId>().is_err());
        assert!("   ".parse::<SupplierId>().is_err());
    }
}
