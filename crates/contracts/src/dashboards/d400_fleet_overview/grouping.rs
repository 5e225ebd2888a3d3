//! Fleet-level grouping used by the overview charts and the dashboard API.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::dto::{NamedCount, ServiceDueRow, TradeGroupRow, VehicleSummary, VehicleTypeRow};
use crate::domain::a001_vehicle::{StatusBucket, VehicleRecord, VehicleStatus};

/// Spend above which a vehicle is flagged for service.
pub const SERVICE_COST_THRESHOLD: f64 = 500.0;
/// Size of the "vehicles to service" list.
pub const SERVICE_LIST_LIMIT: usize = 29;
/// Default look-ahead for MOT and tax windows.
pub const DEFAULT_DUE_WINDOW_DAYS: i64 = 30;

pub fn status_summary(vehicles: &[VehicleRecord], today: NaiveDate, days: i64) -> VehicleSummary {
    let mut summary = VehicleSummary {
        total: vehicles.len() as u32,
        ..Default::default()
    };
    for v in vehicles {
        match v.status.bucket() {
            Some(StatusBucket::Allocated) => summary.allocated += 1,
            Some(StatusBucket::Garage) => summary.garage += 1,
            Some(StatusBucket::DueService) => summary.due_service += 1,
            Some(StatusBucket::SpareReady) => summary.spare_ready += 1,
            Some(StatusBucket::Reserved) => summary.reserved += 1,
            Some(StatusBucket::WrittenOff) => summary.written_off += 1,
            None => {}
        }
        if v.mot_due_within(today, days) {
            summary.mot_due += 1;
        }
        if v.tax_due_within(today, days) {
            summary.tax_due += 1;
        }
    }
    summary
}

/// Vehicles behind a status card; `total` and `current` mean the whole fleet.
/// `sold` has no card of its own but can still be listed.
///
/// Returns `None` for an unknown key.
pub fn vehicles_for_status_key(vehicles: &[VehicleRecord], key: &str) -> Option<Vec<VehicleRecord>> {
    let key = key.trim().to_lowercase();
    if key == "total" || key == "current" {
        return Some(vehicles.to_vec());
    }
    if key == "sold" {
        return Some(
            vehicles
                .iter()
                .filter(|v| v.status == VehicleStatus::Sold)
                .cloned()
                .collect(),
        );
    }
    let bucket = StatusBucket::from_key(&key)?;
    Some(
        vehicles
            .iter()
            .filter(|v| v.status.bucket() == Some(bucket))
            .cloned()
            .collect(),
    )
}

pub fn mot_due_vehicles(vehicles: &[VehicleRecord], today: NaiveDate, days: i64) -> Vec<VehicleRecord> {
    let mut due: Vec<VehicleRecord> = vehicles
        .iter()
        .filter(|v| v.mot_due_within(today, days))
        .cloned()
        .collect();
    due.sort_by_key(|v| v.next_mot_due);
    due
}

pub fn tax_due_vehicles(vehicles: &[VehicleRecord], today: NaiveDate, days: i64) -> Vec<VehicleRecord> {
    let mut due: Vec<VehicleRecord> = vehicles
        .iter()
        .filter(|v| v.tax_due_within(today, days))
        .cloned()
        .collect();
    due.sort_by_key(|v| v.road_tax_due);
    due
}

/// Status columns per trade group, largest group first.
pub fn group_by_trade_group(vehicles: &[VehicleRecord]) -> Vec<TradeGroupRow> {
    let mut groups: BTreeMap<&str, TradeGroupRow> = BTreeMap::new();
    for v in vehicles {
        let row = groups.entry(v.trade_group.as_str()).or_insert_with(|| TradeGroupRow {
            name: v.trade_group.clone(),
            ..Default::default()
        });
        match v.status {
            VehicleStatus::Allocated => row.allocated += 1,
            VehicleStatus::Spare(_) => row.spare += 1,
            VehicleStatus::Reserved => row.reserved += 1,
            VehicleStatus::SpareNotAvailable => row.spare_not_available += 1,
            _ => {}
        }
    }
    let mut rows: Vec<TradeGroupRow> = groups.into_values().collect();
    // stable sort keeps alphabetical order for ties
    rows.sort_by(|a, b| b.total().cmp(&a.total()));
    rows
}

/// Vehicle-type counts per trade group, in trade group order.
pub fn group_by_vehicle_type(vehicles: &[VehicleRecord]) -> Vec<VehicleTypeRow> {
    let mut groups: BTreeMap<&str, VehicleTypeRow> = BTreeMap::new();
    for v in vehicles {
        let row = groups.entry(v.trade_group.as_str()).or_insert_with(|| VehicleTypeRow {
            name: v.trade_group.clone(),
            ..Default::default()
        });
        *row.counts.entry(v.vehicle_type.clone()).or_insert(0) += 1;
    }
    groups.into_values().collect()
}

/// Fleet-wide count per vehicle type, most common first.
pub fn vehicle_type_totals(vehicles: &[VehicleRecord]) -> Vec<NamedCount> {
    count_by(vehicles.iter().map(|v| v.vehicle_type.as_str()))
}

/// Ready spare vehicles per trade group, most first.
pub fn spare_by_trade_group(vehicles: &[VehicleRecord]) -> Vec<NamedCount> {
    count_by(
        vehicles
            .iter()
            .filter(|v| v.status.is_spare())
            .map(|v| v.trade_group.as_str()),
    )
}

fn count_by<'a>(names: impl Iterator<Item = &'a str>) -> Vec<NamedCount> {
    let mut counts: BTreeMap<&str, u32> = BTreeMap::new();
    for name in names {
        *counts.entry(name).or_insert(0) += 1;
    }
    let mut rows: Vec<NamedCount> = counts
        .into_iter()
        .map(|(name, count)| NamedCount {
            name: name.to_string(),
            count,
        })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
}

/// Vehicles whose service or maintenance spend exceeds the threshold, in
/// register order, capped at [`SERVICE_LIST_LIMIT`].
pub fn service_due_vehicles(vehicles: &[VehicleRecord]) -> Vec<ServiceDueRow> {
    vehicles
        .iter()
        .map(|v| (v, v.service_cost_value(), v.maintenance_cost_value()))
        .filter(|(_, service, maintenance)| {
            *service > SERVICE_COST_THRESHOLD || *maintenance > SERVICE_COST_THRESHOLD
        })
        .take(SERVICE_LIST_LIMIT)
        .map(|(v, service_cost, maintenance_cost)| ServiceDueRow {
            van_number: v.van_number.clone(),
            reg_no: v.reg_no.clone(),
            trade_group: v.trade_group.clone(),
            service_cost,
            maintenance_cost,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(van: &str, status: &str, group: &str, kind: &str, service: &str, maintenance: &str) -> VehicleRecord {
        VehicleRecord {
            id: format!("V-{}", van),
            van_number: van.into(),
            reg_no: format!("REG{}", van),
            status: VehicleStatus::parse(status),
            vehicle_type: kind.into(),
            trade_group: group.into(),
            service_cost: service.into(),
            maintenance_cost: maintenance.into(),
            make_model: None,
            transmission: None,
            vehicle_ownership: None,
            next_mot_due: None,
            road_tax_due: None,
            next_service_due: None,
        }
    }

    fn fleet() -> Vec<VehicleRecord> {
        vec![
            vehicle("1", "Allocated", "Office", "Short wheel base", "GBP 0.00", "GBP 0.00"),
            vehicle("2", "Allocated", "Fire Safety", "Cars", "GBP 750.86", "GBP 0.00"),
            vehicle("3", "Spare", "Fire Safety", "Short wheel base", "GBP 500.00", "GBP 500.01"),
            vehicle("4", "Reserved", "Fire Safety", "Short wheel base", "GBP 12.00", "GBP 0.00"),
            vehicle("5", "Under Repair", "Office", "Cars", "GBP 0.00", "GBP 0.00"),
            vehicle("6", "Sold", "Office", "Cars", "GBP 0.00", "GBP 0.00"),
        ]
    }

    #[test]
    fn summary_counts_each_bucket_once() {
        let mut vehicles = fleet();
        vehicles[0].next_mot_due = NaiveDate::from_ymd_opt(2026, 1, 20);
        vehicles[1].road_tax_due = NaiveDate::from_ymd_opt(2026, 5, 1);
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();

        let summary = status_summary(&vehicles, today, DEFAULT_DUE_WINDOW_DAYS);
        assert_eq!(summary.total, 6);
        assert_eq!(summary.allocated, 2);
        assert_eq!(summary.spare_ready, 1);
        assert_eq!(summary.reserved, 1);
        assert_eq!(summary.garage, 1);
        assert_eq!(summary.written_off, 0);
        assert_eq!(summary.mot_due, 1);
        assert_eq!(summary.tax_due, 0);
    }

    #[test]
    fn status_key_lookup() {
        let vehicles = fleet();
        assert_eq!(vehicles_for_status_key(&vehicles, "total").unwrap().len(), 6);
        assert_eq!(vehicles_for_status_key(&vehicles, "current").unwrap().len(), 6);
        assert_eq!(vehicles_for_status_key(&vehicles, "garage").unwrap()[0].van_number, "5");
        assert!(vehicles_for_status_key(&vehicles, "bogus").is_none());
    }

    #[test]
    fn sold_key_lists_sold_vehicles() {
        let sold = vehicles_for_status_key(&fleet(), "Sold").unwrap();
        assert_eq!(sold.len(), 1);
        assert_eq!(sold[0].van_number, "6");
    }

    #[test]
    fn trade_groups_sorted_by_total() {
        let rows = group_by_trade_group(&fleet());
        assert_eq!(rows[0].name, "Fire Safety");
        assert_eq!(rows[0].total(), 3);
        assert_eq!(rows[1].name, "Office");
        assert_eq!(rows[1].allocated, 1);
    }

    #[test]
    fn vehicle_type_mix_per_group() {
        let rows = group_by_vehicle_type(&fleet());
        let office = rows.iter().find(|r| r.name == "Office").unwrap();
        assert_eq!(office.counts.get("Cars"), Some(&2));
        assert_eq!(office.total(), 3);

        let totals = vehicle_type_totals(&fleet());
        assert_eq!(totals[0].count, 3);
    }

    #[test]
    fn service_list_uses_strict_threshold_and_cap() {
        let rows = service_due_vehicles(&fleet());
        let vans: Vec<&str> = rows.iter().map(|r| r.van_number.as_str()).collect();
        assert_eq!(vans, vec!["2", "3"]);

        let many: Vec<VehicleRecord> = (0..40)
            .map(|i| vehicle(&i.to_string(), "Allocated", "Office", "Cars", "GBP 1,000.00", "GBP 0.00"))
            .collect();
        assert_eq!(service_due_vehicles(&many).len(), SERVICE_LIST_LIMIT);
    }

    #[test]
    fn spare_counts_only_ready_spares() {
        let rows = spare_by_trade_group(&fleet());
        assert_eq!(rows, vec![NamedCount { name: "Fire Safety".into(), count: 1 }]);
    }
}
