//! Movement selection: period windows and directions.
//!
//! Pure, order-preserving filters over the snapshot's movement log. Every
//! aggregator narrows its working set through these so month boundaries are
//! interpreted in exactly one place (`MonthLabel`).

use stocklens_core::MonthLabel;
use stocklens_inventory::{Movement, MovementDirection};

/// Movements dated within the calendar month, first to last instant
/// inclusive.
pub fn in_period(movements: &[Movement], month: MonthLabel) -> Vec<&Movement> {
    movements
        .iter()
        .filter(|m| month.contains(m.occurred_at))
        .collect()
}

/// Movements of the given direction.
pub fn with_direction(movements: &[Movement], direction: MovementDirection) -> Vec<&Movement> {
    movements
        .iter()
        .filter(|m| m.direction == direction)
        .collect()
}

/// Issues within the month when one is selected, otherwise all issues.
///
/// The composition most aggregators start from.
pub fn outgoing_in_period(movements: &[Movement], month: Option<MonthLabel>) -> Vec<&Movement> {
    movements
        .iter()
        .filter(|m| m.is_outgoing())
        .filter(|m| month.is_none_or(|month| month.contains(m.occurred_at)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use stocklens_core::{ItemId, MovementId};

    fn movement(id: &str, direction: MovementDirection, y: i32, mo: u32, d: u32) -> Movement {
        Movement {
            id: MovementId::new(id),
            item_id: ItemId::new("i1"),
            direction,
            quantity: 1,
            occurred_at: Utc.with_ymd_and_hms(y, mo, d, 12, 0, 0).unwrap(),
            technician_id: None,
            notes: None,
        }
    }

    fn fixture() -> Vec<Movement> {
        vec![
            movement("m1", MovementDirection::In, 2024, 1, 2),
            movement("m2", MovementDirection::Out, 2024, 1, 5),
            movement("m3", MovementDirection::Out, 2024, 2, 1),
            movement("m4", MovementDirection::Out, 2024, 1, 31),
        ]
    }

    #[test]
    fn period_filter_keeps_only_the_month_in_order() {
        let movements = fixture();
        let january = "2024-01".parse().unwrap();
        let selected = in_period(&movements, january);
        let ids: Vec<&str> = selected.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["m1", "m2", "m4"]);
    }

    #[test]
    fn direction_filter_matches_direction() {
        let movements = fixture();
        let outgoing = with_direction(&movements, MovementDirection::Out);
        assert_eq!(outgoing.len(), 3);
        assert!(outgoing.iter().all(|m| m.is_outgoing()));
    }

    #[test]
    fn outgoing_in_period_composes_both() {
        let movements = fixture();
        let selected = outgoing_in_period(&movements, Some("2024-01".parse().unwrap()));
        let ids: Vec<&str> = selected.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["m2", "m4"]);

        // no month selected: full history of issues
        assert_eq!(outgoing_in_period(&movements, None).len(), 3);
    }
}
