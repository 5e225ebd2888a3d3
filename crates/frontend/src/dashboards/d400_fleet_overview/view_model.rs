//! Reshapes API responses into chart input.

use std::collections::BTreeSet;

use contracts::dashboards::d400_fleet_overview::{
    NamedCount, TradeGroupRow, VehicleSummary, VehicleTypeRow,
};
use contracts::domain::a001_vehicle::StatusBucket;

use crate::shared::components::charts::{ChartDatum, SeriesRow};

/// Series of the trade-group chart, in column order.
pub const TRADE_GROUP_SERIES: [&str; 4] = ["Allocated", "Spare", "Reserved", "Spare Not Available"];

/// What a KPI card drills down into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrillDown {
    Total,
    Status(StatusBucket),
    MotDue,
    TaxDue,
}

impl DrillDown {
    pub fn title(&self, days: i64) -> String {
        match self {
            DrillDown::Total => "All vehicles".to_string(),
            DrillDown::Status(bucket) => format!("{} vehicles", bucket.label()),
            DrillDown::MotDue => format!("MOT due within {} days", days),
            DrillDown::TaxDue => format!("Road tax due within {} days", days),
        }
    }
}

pub fn bucket_count(summary: &VehicleSummary, bucket: StatusBucket) -> u32 {
    match bucket {
        StatusBucket::Allocated => summary.allocated,
        StatusBucket::Garage => summary.garage,
        StatusBucket::DueService => summary.due_service,
        StatusBucket::SpareReady => summary.spare_ready,
        StatusBucket::Reserved => summary.reserved,
        StatusBucket::WrittenOff => summary.written_off,
    }
}

/// Status buckets with at least one vehicle.
pub fn status_donut_data(summary: &VehicleSummary) -> Vec<ChartDatum> {
    StatusBucket::ALL
        .into_iter()
        .map(|bucket| ChartDatum::new(bucket.label(), bucket_count(summary, bucket) as f64))
        .filter(|d| d.value > 0.0)
        .collect()
}

pub fn trade_group_rows(rows: &[TradeGroupRow]) -> Vec<SeriesRow> {
    rows.iter()
        .map(|row| SeriesRow {
            label: row.name.clone(),
            values: vec![
                row.allocated as f64,
                row.spare as f64,
                row.reserved as f64,
                row.spare_not_available as f64,
            ],
        })
        .collect()
}

/// Every vehicle type seen in any row (sorted), and one row per trade group
/// with a value for each of those types.
pub fn vehicle_type_rows(rows: &[VehicleTypeRow]) -> (Vec<String>, Vec<SeriesRow>) {
    let types: Vec<String> = rows
        .iter()
        .flat_map(|row| row.counts.keys().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let shaped = rows
        .iter()
        .map(|row| SeriesRow {
            label: row.name.clone(),
            values: types
                .iter()
                .map(|t| row.counts.get(t).copied().unwrap_or(0) as f64)
                .collect(),
        })
        .collect();
    (types, shaped)
}

pub fn named_counts(counts: &[NamedCount]) -> Vec<ChartDatum> {
    counts
        .iter()
        .map(|c| ChartDatum::new(c.name.clone(), c.count as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn donut_skips_empty_buckets() {
        let summary = VehicleSummary {
            total: 20,
            allocated: 14,
            spare_ready: 5,
            reserved: 1,
            ..Default::default()
        };
        let data = status_donut_data(&summary);
        let labels: Vec<&str> = data.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, vec!["Allocated", "Spare Ready", "Reserved"]);
        assert_eq!(data[0].value, 14.0);
    }

    #[test]
    fn trade_group_values_follow_series_order() {
        let rows = trade_group_rows(&[TradeGroupRow {
            name: "Drainage & Plumbing".into(),
            allocated: 6,
            spare: 2,
            reserved: 1,
            spare_not_available: 0,
        }]);
        assert_eq!(rows[0].values, vec![6.0, 2.0, 1.0, 0.0]);
        assert_eq!(rows[0].total(), 9.0);
    }

    #[test]
    fn vehicle_types_are_aligned_across_groups() {
        let rows = vec![
            VehicleTypeRow {
                name: "Gas".into(),
                counts: BTreeMap::from([("Van".to_string(), 3)]),
            },
            VehicleTypeRow {
                name: "Roofing".into(),
                counts: BTreeMap::from([("Tipper".to_string(), 1), ("Van".to_string(), 2)]),
            },
        ];
        let (types, shaped) = vehicle_type_rows(&rows);
        assert_eq!(types, vec!["Tipper".to_string(), "Van".to_string()]);
        assert_eq!(shaped[0].values, vec![0.0, 3.0]);
        assert_eq!(shaped[1].values, vec![1.0, 2.0]);
    }

    #[test]
    fn drill_down_titles() {
        assert_eq!(DrillDown::MotDue.title(30), "MOT due within 30 days");
        assert_eq!(
            DrillDown::Status(StatusBucket::Garage).title(30),
            "In Garage vehicles"
        );
    }
}
