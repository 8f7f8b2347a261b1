//! Supplier performance: consumption grouped by supplying vendor.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use stocklens_core::{MonthLabel, SupplierId};
use stocklens_inventory::Snapshot;

use crate::consumption::consumption_by_item;

/// Bucket name for items that carry no supplier reference.
pub const UNKNOWN_SUPPLIER: &str = "Unknown supplier";

/// One supplier's share of period consumption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierPerformance {
    /// None for the unknown-supplier bucket.
    pub supplier_id: Option<SupplierId>,
    pub name: String,
    /// Distinct items with consumption in the period.
    pub item_count: usize,
    pub total_quantity: i64,
    pub total_value: u64,
}

/// Group per-item consumption by each item's supplier.
///
/// Items without a supplier aggregate into the "Unknown supplier" bucket; a
/// supplier id missing from the snapshot keeps its own bucket with the raw
/// id as name. Sorted by total value descending, ties in encounter order.
pub fn supplier_performance(
    snapshot: &Snapshot,
    month: Option<MonthLabel>,
) -> Vec<SupplierPerformance> {
    let mut order: HashMap<Option<&SupplierId>, usize> = HashMap::new();
    let mut buckets: Vec<SupplierPerformance> = Vec::new();

    for consumption in consumption_by_item(snapshot, month) {
        let supplier_id = consumption.item.supplier_id.as_ref();
        let slot = *order.entry(supplier_id).or_insert_with(|| {
            let name = match supplier_id {
                Some(id) => snapshot
                    .supplier_name(id)
                    .unwrap_or(id.as_str())
                    .to_string(),
                None => UNKNOWN_SUPPLIER.to_string(),
            };
            buckets.push(SupplierPerformance {
                supplier_id: supplier_id.cloned(),
                name,
                item_count: 0,
                total_quantity: 0,
                total_value: 0,
            });
            buckets.len() - 1
        });

        buckets[slot].item_count += 1;
        buckets[slot].total_quantity += consumption.total_quantity;
        buckets[slot].total_value = buckets[slot]
            .total_value
            .saturating_add(consumption.total_value);
    }

    buckets.sort_by(|a, b| b.total_value.cmp(&a.total_value));
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use stocklens_core::{ItemId, MovementId};
    use stocklens_inventory::{Item, Movement, MovementDirection, Supplier};

    fn item(id: &str, unit_price: u64, supplier: Option<&str>) -> Item {
        Item {
            id: ItemId::new(id),
            name: format!("Item {id}"),
            category: "General".to_string(),
            unit: "pcs".to_string(),
            unit_price,
            quantity: 50,
            reorder_point: 5,
            supplier_id: supplier.map(SupplierId::new),
        }
    }

    fn issue(id: &str, item_id: &str, quantity: i64) -> Movement {
        Movement {
            id: MovementId::new(id),
            item_id: ItemId::new(item_id),
            direction: MovementDirection::Out,
            quantity,
            occurred_at: Utc.with_ymd_and_hms(2024, 1, 12, 11, 0, 0).unwrap(),
            technician_id: None,
            notes: None,
        }
    }

    #[test]
    fn groups_consumption_by_supplier() {
        let snapshot = Snapshot::new(
            vec![
                item("i1", 10, Some("s1")),
                item("i2", 5, Some("s1")),
                item("i3", 20, Some("s2")),
            ],
            vec![
                issue("m1", "i1", 2),
                issue("m2", "i2", 2),
                issue("m3", "i3", 1),
            ],
            Vec::new(),
            vec![
                Supplier {
                    id: SupplierId::new("s1"),
                    name: "Acme".to_string(),
                },
                Supplier {
                    id: SupplierId::new("s2"),
                    name: "Globex".to_string(),
                },
            ],
        );

        let buckets = supplier_performance(&snapshot, None);
        assert_eq!(buckets.len(), 2);
        // Acme: 2×10 + 2×5 = 30 over two items; Globex: 20
        assert_eq!(buckets[0].name, "Acme");
        assert_eq!(buckets[0].item_count, 2);
        assert_eq!(buckets[0].total_value, 30);
        assert_eq!(buckets[1].name, "Globex");
        assert_eq!(buckets[1].item_count, 1);
    }

    #[test]
    fn items_without_supplier_fall_into_unknown_bucket() {
        let snapshot = Snapshot::new(
            vec![item("i1", 10, None), item("i2", 10, None)],
            vec![issue("m1", "i1", 1), issue("m2", "i2", 3)],
            Vec::new(),
            Vec::new(),
        );

        let buckets = supplier_performance(&snapshot, None);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].supplier_id, None);
        assert_eq!(buckets[0].name, UNKNOWN_SUPPLIER);
        assert_eq!(buckets[0].item_count, 2);
        assert_eq!(buckets[0].total_value, 40);
    }

    #[test]
    fn unresolvable_supplier_id_keeps_its_own_bucket() {
        let snapshot = Snapshot::new(
            vec![item("i1", 10, Some("mystery"))],
            vec![issue("m1", "i1", 1)],
            Vec::new(),
            Vec::new(),
        );

        let buckets = supplier_performance(&snapshot, None);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].supplier_id, Some(SupplierId::new("mystery")));
        assert_eq!(buckets[0].name, "mystery");
    }
}
