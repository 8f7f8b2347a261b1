//! Seasonality: consumption value bucketed by calendar month.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use stocklens_core::MonthLabel;
use stocklens_inventory::Snapshot;

/// One month's total issue consumption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonalityPoint {
    pub month: MonthLabel,
    pub total_quantity: i64,
    pub total_value: u64,
}

/// Bucket ALL issues by calendar month, ignoring any selected-month filter.
///
/// One point per month with at least one priceable issue, ascending; months
/// without consumption are omitted, never zero-filled.
pub fn seasonality(snapshot: &Snapshot) -> Vec<SeasonalityPoint> {
    let index = snapshot.item_index();
    let mut buckets: BTreeMap<MonthLabel, (i64, u64)> = BTreeMap::new();

    for movement in snapshot.movements.iter().filter(|m| m.is_outgoing()) {
        let Some(item) = index.get(&movement.item_id) else {
            continue;
        };
        let bucket = buckets
            .entry(MonthLabel::of(movement.occurred_at))
            .or_insert((0, 0));
        bucket.0 += movement.quantity;
        bucket.1 = bucket.1.saturating_add(movement.value_at(item.unit_price));
    }

    buckets
        .into_iter()
        .map(|(month, (total_quantity, total_value))| SeasonalityPoint {
            month,
            total_quantity,
            total_value,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use stocklens_core::{ItemId, MovementId};
    use stocklens_inventory::{Item, Movement, MovementDirection};

    fn item(id: &str, unit_price: u64) -> Item {
        Item {
            id: ItemId::new(id),
            name: format!("Item {id}"),
            category: "General".to_string(),
            unit: "pcs".to_string(),
            unit_price,
            quantity: 100,
            reorder_point: 5,
            supplier_id: None,
        }
    }

    fn issue(id: &str, item_id: &str, quantity: i64, y: i32, mo: u32, d: u32) -> Movement {
        Movement {
            id: MovementId::new(id),
            item_id: ItemId::new(item_id),
            direction: MovementDirection::Out,
            quantity,
            occurred_at: Utc.with_ymd_and_hms(y, mo, d, 12, 0, 0).unwrap(),
            technician_id: None,
            notes: None,
        }
    }

    #[test]
    fn two_months_of_issues_yield_exactly_two_points() {
        let snapshot = Snapshot::new(
            vec![item("i1", 10)],
            vec![
                issue("m1", "i1", 2, 2024, 1, 5),
                issue("m2", "i1", 3, 2024, 1, 20),
                issue("m3", "i1", 4, 2024, 3, 2),
            ],
            Vec::new(),
            Vec::new(),
        );

        let points = seasonality(&snapshot);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].month, "2024-01".parse().unwrap());
        assert_eq!(points[0].total_quantity, 5);
        assert_eq!(points[0].total_value, 50);
        assert_eq!(points[1].month, "2024-03".parse().unwrap());
        assert_eq!(points[1].total_value, 40);
        // February had no consumption: no zero-filled point
    }

    #[test]
    fn incoming_movements_do_not_contribute() {
        let snapshot = Snapshot::new(
            vec![item("i1", 10)],
            vec![Movement {
                direction: MovementDirection::In,
                ..issue("m1", "i1", 5, 2024, 1, 5)
            }],
            Vec::new(),
            Vec::new(),
        );

        assert!(seasonality(&snapshot).is_empty());
    }

    #[test]
    fn spans_years_in_chronological_order() {
        let snapshot = Snapshot::new(
            vec![item("i1", 1)],
            vec![
                issue("m1", "i1", 1, 2024, 1, 5),
                issue("m2", "i1", 1, 2023, 12, 5),
            ],
            Vec::new(),
            Vec::new(),
        );

        let points = seasonality(&snapshot);
        assert_eq!(points[0].month, "2023-12".parse().unwrap());
        assert_eq!(points[1].month, "2024-01".parse().unwrap());
    }
}
