//! Cost aggregation and classification for the vehicle analysis pages.
//!
//! All functions are pure and allocation-light; the pages call them on every
//! render and the API uses the same ones to shape its responses.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::dto::{CostBreakdown, CostCategory, MonthlyCost, VehicleCostData, VehicleCostTotal};
use crate::shared::money::round2;

/// Fraction of the fleet average below which a vehicle is low cost.
pub const LOW_COST_RATIO: f64 = 0.8;
/// Fraction of the fleet average above which a vehicle is high cost.
pub const HIGH_COST_RATIO: f64 = 1.2;
/// Second-half/first-half ratio above which a history is rising.
pub const RISING_RATIO: f64 = 1.1;
/// Second-half/first-half ratio below which a history is declining.
pub const DECLINING_RATIO: f64 = 0.9;
/// Number of vehicles in the "top cost" list.
pub const TOP_COST_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostTier {
    Low,
    Average,
    High,
}

impl CostTier {
    pub fn label(&self) -> &'static str {
        match self {
            CostTier::Low => "Below average",
            CostTier::Average => "Average",
            CostTier::High => "High cost",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostTrend {
    Rising,
    Stable,
    Declining,
}

impl CostTrend {
    pub fn label(&self) -> &'static str {
        match self {
            CostTrend::Rising => "Rising",
            CostTrend::Stable => "Stable",
            CostTrend::Declining => "Declining",
        }
    }
}

pub fn total_cost(vehicle: &VehicleCostData) -> f64 {
    vehicle.costs.total()
}

pub fn fleet_total(vehicles: &[VehicleCostData]) -> f64 {
    vehicles.iter().map(total_cost).sum()
}

/// Arithmetic mean; an empty slice averages to zero.
pub fn fleet_average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn fleet_average_cost(vehicles: &[VehicleCostData]) -> f64 {
    let totals: Vec<f64> = vehicles.iter().map(total_cost).collect();
    fleet_average(&totals)
}

/// Signed percentage difference from `average`; zero when there is no average.
pub fn percent_deviation(value: f64, average: f64) -> f64 {
    if average == 0.0 {
        return 0.0;
    }
    (value - average) / average * 100.0
}

/// Exactly 80% and exactly 120% of the average are both `Average`.
pub fn classify_cost_tier(cost: f64, average: f64) -> CostTier {
    if cost < average * LOW_COST_RATIO {
        CostTier::Low
    } else if cost > average * HIGH_COST_RATIO {
        CostTier::High
    } else {
        CostTier::Average
    }
}

/// Compare the mean of the second half of `history` with the first half.
///
/// For twelve months that is the last six against the first six. Fewer than
/// two points cannot show a trend and are `Stable`.
pub fn classify_trend(history: &[f64]) -> CostTrend {
    if history.len() < 2 {
        return CostTrend::Stable;
    }
    let (first, second) = history.split_at(history.len() / 2);
    let first_mean = fleet_average(first);
    let second_mean = fleet_average(second);
    if second_mean > first_mean * RISING_RATIO {
        CostTrend::Rising
    } else if second_mean < first_mean * DECLINING_RATIO {
        CostTrend::Declining
    } else {
        CostTrend::Stable
    }
}

pub fn vehicle_trend(vehicle: &VehicleCostData) -> CostTrend {
    let history: Vec<f64> = vehicle.monthly_history.iter().map(|m| m.total).collect();
    classify_trend(&history)
}

/// Vehicles above the high-cost threshold, in input order.
pub fn high_cost_vehicles(vehicles: &[VehicleCostData]) -> Vec<&VehicleCostData> {
    let average = fleet_average_cost(vehicles);
    vehicles
        .iter()
        .filter(|v| classify_cost_tier(total_cost(v), average) == CostTier::High)
        .collect()
}

pub fn rising_cost_vehicles(vehicles: &[VehicleCostData]) -> Vec<&VehicleCostData> {
    vehicles
        .iter()
        .filter(|v| vehicle_trend(v) == CostTrend::Rising)
        .collect()
}

/// A vehicle worth a closer look, with the reasons it was flagged.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskVehicle<'a> {
    pub vehicle: &'a VehicleCostData,
    pub total_cost: f64,
    pub percent_above_average: f64,
    pub is_high_cost: bool,
    pub is_rising: bool,
}

/// Union of high-cost and rising vehicles, each once, most expensive first.
pub fn risk_vehicles(vehicles: &[VehicleCostData]) -> Vec<RiskVehicle<'_>> {
    let average = fleet_average_cost(vehicles);
    let mut flagged: Vec<RiskVehicle<'_>> = vehicles
        .iter()
        .filter_map(|v| {
            let total = total_cost(v);
            let is_high_cost = classify_cost_tier(total, average) == CostTier::High;
            let is_rising = vehicle_trend(v) == CostTrend::Rising;
            (is_high_cost || is_rising).then(|| RiskVehicle {
                vehicle: v,
                total_cost: total,
                percent_above_average: percent_deviation(total, average),
                is_high_cost,
                is_rising,
            })
        })
        .collect();
    flagged.sort_by(|a, b| b.total_cost.total_cmp(&a.total_cost));
    flagged
}

/// Per-category sums across the fleet.
pub fn fleet_cost_breakdown(vehicles: &[VehicleCostData]) -> CostBreakdown {
    let mut sum = CostBreakdown::default();
    for v in vehicles {
        sum.add(&v.costs);
    }
    sum
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: CostCategory,
    pub value: f64,
    /// 0..=100; zero when the breakdown total is zero
    pub percentage: f64,
}

pub fn category_shares(breakdown: &CostBreakdown) -> Vec<CategoryShare> {
    let total = breakdown.total();
    CostCategory::ALL
        .into_iter()
        .map(|category| {
            let value = breakdown.get(category);
            let percentage = if total > 0.0 { value / total * 100.0 } else { 0.0 };
            CategoryShare {
                category,
                value,
                percentage,
            }
        })
        .collect()
}

pub fn highest_cost_vehicle(vehicles: &[VehicleCostData]) -> Option<&VehicleCostData> {
    vehicles
        .iter()
        .max_by(|a, b| total_cost(a).total_cmp(&total_cost(b)))
}

pub fn lowest_cost_vehicle(vehicles: &[VehicleCostData]) -> Option<&VehicleCostData> {
    vehicles
        .iter()
        .min_by(|a, b| total_cost(a).total_cmp(&total_cost(b)))
}

/// Biggest fuel spender. On a tie the earlier vehicle wins.
pub fn highest_fuel_vehicle(vehicles: &[VehicleCostData]) -> Option<&VehicleCostData> {
    vehicles
        .iter()
        .reduce(|best, v| if v.costs.fuel > best.costs.fuel { v } else { best })
}

/// Vehicles sorted by total cost, highest first.
pub fn sorted_by_cost(vehicles: &[VehicleCostData]) -> Vec<&VehicleCostData> {
    let mut sorted: Vec<&VehicleCostData> = vehicles.iter().collect();
    sorted.sort_by(|a, b| total_cost(b).total_cmp(&total_cost(a)));
    sorted
}

// ============================================================================
// Payment-based totals (service cost API)
// ============================================================================

/// Sum amounts per payment type, rounding each sum to pennies.
pub fn sum_by_type<'a>(payments: impl IntoIterator<Item = (&'a str, f64)>) -> BTreeMap<String, f64> {
    let mut sums: BTreeMap<String, f64> = BTreeMap::new();
    for (kind, amount) in payments {
        *sums.entry(kind.to_string()).or_insert(0.0) += amount;
    }
    for value in sums.values_mut() {
        *value = round2(*value);
    }
    sums
}

/// Twelve calendar months ending with the month of `last_month`, oldest
/// first, each summing the payments dated inside it.
pub fn monthly_history(payments: &[(NaiveDate, f64)], last_month: NaiveDate) -> Vec<MonthlyCost> {
    let end_index = last_month.year() * 12 + last_month.month0() as i32;
    let mut totals = [0.0_f64; 12];
    for (date, amount) in payments {
        let offset = end_index - (date.year() * 12 + date.month0() as i32);
        if (0..12).contains(&offset) {
            totals[11 - offset as usize] += amount;
        }
    }
    totals
        .iter()
        .enumerate()
        .map(|(i, total)| {
            let index = end_index - 11 + i as i32;
            let year = index.div_euclid(12);
            let month = index.rem_euclid(12) as u32 + 1;
            let label = NaiveDate::from_ymd_opt(year, month, 1)
                .map(|d| d.format("%b %Y").to_string())
                .unwrap_or_default();
            MonthlyCost {
                month: label,
                total: round2(*total),
            }
        })
        .collect()
}

/// Sort highest first and return the top list alongside.
pub fn rank_vehicle_totals(mut totals: Vec<VehicleCostTotal>) -> (Vec<VehicleCostTotal>, Vec<VehicleCostTotal>) {
    totals.sort_by(|a, b| b.total_cost.total_cmp(&a.total_cost));
    let top = totals.iter().take(TOP_COST_LIMIT).cloned().collect();
    (totals, top)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d401_cost_analysis::dto::MonthlyCost;

    fn vehicle(id: &str, costs: [f64; 5], history: &[f64]) -> VehicleCostData {
        VehicleCostData {
            id: id.into(),
            name: format!("Vehicle {}", id),
            year: 2021,
            vehicle_type: "Van".into(),
            costs: CostBreakdown {
                insurance: costs[0],
                repairs: costs[1],
                fuel: costs[2],
                tax: costs[3],
                other: costs[4],
            },
            monthly_history: history
                .iter()
                .enumerate()
                .map(|(i, total)| MonthlyCost {
                    month: format!("M{} 2025", i + 1),
                    total: *total,
                })
                .collect(),
        }
    }

    fn flat(value: f64) -> Vec<f64> {
        vec![value; 12]
    }

    fn step(first: f64, second: f64) -> Vec<f64> {
        let mut history = vec![first; 6];
        history.extend(vec![second; 6]);
        history
    }

    #[test]
    fn average_is_mean_and_empty_is_zero() {
        assert_eq!(fleet_average(&[]), 0.0);
        assert_eq!(fleet_average(&[100.0, 200.0, 300.0]), 200.0);
    }

    #[test]
    fn trend_thresholds() {
        assert_eq!(classify_trend(&step(1000.0, 1150.0)), CostTrend::Rising);
        assert_eq!(classify_trend(&step(1000.0, 850.0)), CostTrend::Declining);
        assert_eq!(classify_trend(&step(1000.0, 1050.0)), CostTrend::Stable);
        assert_eq!(classify_trend(&flat(500.0)), CostTrend::Stable);
    }

    #[test]
    fn trend_boundaries_are_stable() {
        assert_eq!(classify_trend(&step(1000.0, 1100.0)), CostTrend::Stable);
        assert_eq!(classify_trend(&step(1000.0, 900.0)), CostTrend::Stable);
    }

    #[test]
    fn short_histories_are_stable() {
        assert_eq!(classify_trend(&[]), CostTrend::Stable);
        assert_eq!(classify_trend(&[42.0]), CostTrend::Stable);
        assert_eq!(classify_trend(&[100.0, 200.0]), CostTrend::Rising);
    }

    #[test]
    fn tier_boundaries_fall_into_average() {
        assert_eq!(classify_cost_tier(800.0, 1000.0), CostTier::Average);
        assert_eq!(classify_cost_tier(1200.0, 1000.0), CostTier::Average);
        assert_eq!(classify_cost_tier(799.99, 1000.0), CostTier::Low);
        assert_eq!(classify_cost_tier(1200.01, 1000.0), CostTier::High);
    }

    #[test]
    fn risk_list_is_deduplicated_union_sorted_by_cost() {
        let fleet = vec![
            vehicle("A", [500.0, 500.0, 0.0, 0.0, 0.0], &flat(80.0)),
            vehicle("B", [1000.0, 1000.0, 0.0, 0.0, 0.0], &step(100.0, 200.0)),
            vehicle("C", [400.0, 400.0, 0.0, 0.0, 0.0], &step(50.0, 80.0)),
            vehicle("D", [500.0, 500.0, 0.0, 0.0, 0.0], &flat(80.0)),
        ];
        // totals 1000, 2000, 800, 1000 -> average 1200, high threshold 1440
        let risks = risk_vehicles(&fleet);
        let ids: Vec<&str> = risks.iter().map(|r| r.vehicle.id.as_str()).collect();
        assert_eq!(ids, vec!["B", "C"]);
        assert!(risks[0].is_high_cost && risks[0].is_rising);
        assert!(!risks[1].is_high_cost && risks[1].is_rising);
        assert!((risks[0].percent_above_average - 66.666).abs() < 0.01);

        assert_eq!(high_cost_vehicles(&fleet).len(), 1);
        assert_eq!(rising_cost_vehicles(&fleet).len(), 2);
    }

    #[test]
    fn breakdown_and_shares() {
        let fleet = vec![
            vehicle("A", [100.0, 200.0, 300.0, 0.0, 400.0], &flat(1.0)),
            vehicle("B", [100.0, 0.0, 100.0, 0.0, 0.0], &flat(1.0)),
        ];
        let breakdown = fleet_cost_breakdown(&fleet);
        assert_eq!(breakdown.fuel, 400.0);
        assert_eq!(fleet_total(&fleet), 1200.0);

        let shares = category_shares(&breakdown);
        assert_eq!(shares.len(), 5);
        assert_eq!(shares[0].category, CostCategory::Insurance);
        assert!((shares[2].percentage - 33.333).abs() < 0.01);

        let empty = category_shares(&CostBreakdown::default());
        assert!(empty.iter().all(|s| s.percentage == 0.0));
    }

    #[test]
    fn highest_and_deviation() {
        assert!(highest_cost_vehicle(&[]).is_none());
        let fleet = vec![
            vehicle("A", [1.0, 0.0, 0.0, 0.0, 0.0], &flat(1.0)),
            vehicle("B", [5.0, 0.0, 0.0, 0.0, 0.0], &flat(1.0)),
        ];
        assert_eq!(highest_cost_vehicle(&fleet).map(|v| v.id.as_str()), Some("B"));
        assert_eq!(lowest_cost_vehicle(&fleet).map(|v| v.id.as_str()), Some("A"));
        assert_eq!(percent_deviation(150.0, 100.0), 50.0);
        assert_eq!(percent_deviation(150.0, 0.0), 0.0);
    }

    #[test]
    fn history_buckets_last_twelve_months() {
        let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
        let payments = vec![
            (d(2025, 1, 15), 100.0),
            (d(2025, 1, 20), 50.0),
            (d(2024, 2, 1), 10.0),
            (d(2024, 1, 31), 999.0),
            (d(2025, 2, 1), 999.0),
        ];
        let history = monthly_history(&payments, d(2025, 1, 31));
        assert_eq!(history.len(), 12);
        assert_eq!(history[0].month, "Feb 2024");
        assert_eq!(history[0].total, 10.0);
        assert_eq!(history[11].month, "Jan 2025");
        assert_eq!(history[11].total, 150.0);
        assert_eq!(history.iter().map(|m| m.total).sum::<f64>(), 160.0);
    }

    #[test]
    fn sums_payments_per_type() {
        let sums = sum_by_type(vec![("Service", 100.25), ("Tyres", 50.126), ("Service", 20.0)]);
        assert_eq!(sums.get("Service"), Some(&120.25));
        assert_eq!(sums.get("Tyres"), Some(&50.13));
        assert_eq!(sums.len(), 2);
    }
}
