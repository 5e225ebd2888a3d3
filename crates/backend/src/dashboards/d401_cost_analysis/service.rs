use std::collections::{BTreeMap, HashMap};

use anyhow::Result;
use chrono::{Datelike, NaiveDate, Utc};
use contracts::dashboards::d401_cost_analysis::{
    monthly_history, rank_vehicle_totals, sum_by_type, AllVehicleCostsResponse, CostBreakdown,
    CostCategory, FleetCostSummary, ServiceCostResponse, ServiceCosts, VehicleCostData,
    VehicleCostTotal, VehicleInfo,
};
use contracts::shared::money::{monthly_average, round2};

use crate::domain::a001_vehicle;
use crate::domain::a001_vehicle::repository::Model as VehicleModel;
use crate::domain::a004_cost_payment::repository::{self as payments, Model as PaymentModel};

/// Payment type left out of the service cost lookup.
const EXCLUDED_SERVICE_TYPE: &str = "Maintenance";

fn vehicle_name(vehicle: &VehicleModel) -> String {
    vehicle
        .make_model
        .clone()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| format!("Van {}", vehicle.van_number))
}

// ============================================================================
// Service cost lookup
// ============================================================================

/// `None` when no vehicle has `van_number`.
pub async fn get_service_costs(van_number: &str) -> Result<Option<ServiceCostResponse>> {
    let Some(vehicle) = a001_vehicle::service::get_by_van_number(van_number).await? else {
        return Ok(None);
    };
    let vehicle_payments = payments::list_for_vehicle(&vehicle.id).await?;
    Ok(Some(build_service_costs(&vehicle, &vehicle_payments)))
}

pub fn build_service_costs(vehicle: &VehicleModel, vehicle_payments: &[PaymentModel]) -> ServiceCostResponse {
    let cost_by_type = sum_by_type(
        vehicle_payments
            .iter()
            .filter(|p| p.payment_type != EXCLUDED_SERVICE_TYPE)
            .map(|p| (p.payment_type.as_str(), p.amount)),
    );
    let total_cost = round2(cost_by_type.values().sum());
    ServiceCostResponse {
        success: true,
        vehicle: VehicleInfo {
            id: vehicle.id.clone(),
            name: vehicle_name(vehicle),
            van_number: vehicle.van_number.clone(),
            registration: vehicle.reg_no.clone(),
            vehicle_type: vehicle.vehicle_type.clone(),
        },
        service_costs: ServiceCosts {
            total_cost,
            monthly_average: monthly_average(total_cost),
            cost_types_count: cost_by_type.len(),
            cost_by_type,
        },
    }
}

// ============================================================================
// Fleet cost overview
// ============================================================================

pub async fn get_all_vehicle_costs() -> Result<AllVehicleCostsResponse> {
    let vehicles = a001_vehicle::repository::list_models().await?;
    let all_payments = payments::list_all().await?;
    Ok(build_all_vehicle_costs(&vehicles, &all_payments))
}

fn group_payments(all_payments: &[PaymentModel]) -> HashMap<&str, Vec<&PaymentModel>> {
    let mut grouped: HashMap<&str, Vec<&PaymentModel>> = HashMap::new();
    for payment in all_payments {
        grouped.entry(payment.vehicle_id.as_str()).or_default().push(payment);
    }
    grouped
}

pub fn build_all_vehicle_costs(vehicles: &[VehicleModel], all_payments: &[PaymentModel]) -> AllVehicleCostsResponse {
    let grouped = group_payments(all_payments);
    let mut fleet_by_type: BTreeMap<String, f64> = BTreeMap::new();

    let totals: Vec<VehicleCostTotal> = vehicles
        .iter()
        .map(|vehicle| {
            let own = grouped.get(vehicle.id.as_str()).map(Vec::as_slice).unwrap_or(&[]);
            let cost_breakdown = sum_by_type(own.iter().map(|p| (p.payment_type.as_str(), p.amount)));
            for (kind, amount) in &cost_breakdown {
                *fleet_by_type.entry(kind.clone()).or_insert(0.0) += amount;
            }
            let total_cost = round2(own.iter().map(|p| p.amount).sum());
            VehicleCostTotal {
                vehicle_id: vehicle.id.clone(),
                name: vehicle_name(vehicle),
                van_number: vehicle.van_number.clone(),
                registration: vehicle.reg_no.clone(),
                vehicle_type: vehicle.vehicle_type.clone(),
                status: vehicle.status.clone(),
                total_cost,
                cost_breakdown,
                monthly_average: monthly_average(total_cost),
            }
        })
        .collect();

    let total_fleet_cost: f64 = totals.iter().map(|t| t.total_cost).sum();
    let vehicles_with_costs = vehicles
        .iter()
        .filter(|v| grouped.contains_key(v.id.as_str()))
        .count();
    let average_vehicle_cost = if vehicles.is_empty() {
        0.0
    } else {
        round2(total_fleet_cost / vehicles.len() as f64)
    };
    for value in fleet_by_type.values_mut() {
        *value = round2(*value);
    }
    let (sorted, top_cost_vehicles) = rank_vehicle_totals(totals);

    AllVehicleCostsResponse {
        success: true,
        summary: FleetCostSummary {
            total_fleet_cost: round2(total_fleet_cost),
            average_vehicle_cost,
            vehicle_count: vehicles.len(),
            vehicles_with_costs,
        },
        cost_breakdown_by_type: fleet_by_type,
        vehicles: sorted,
        top_cost_vehicles,
    }
}

// ============================================================================
// Vehicle analysis
// ============================================================================

pub async fn get_vehicle_analysis() -> Result<Vec<VehicleCostData>> {
    let vehicles = a001_vehicle::repository::list_models().await?;
    let all_payments = payments::list_all().await?;
    Ok(build_vehicle_analysis(&vehicles, &all_payments, Utc::now().date_naive()))
}

/// Months covered by the analysis window.
const ANALYSIS_MONTHS: i32 = 12;

/// True when `date` falls inside the analysis window ending with `today`'s month.
fn in_window(date: NaiveDate, today: NaiveDate) -> bool {
    let months_back = (today.year() * 12 + today.month0() as i32) - (date.year() * 12 + date.month0() as i32);
    (0..ANALYSIS_MONTHS).contains(&months_back)
}

/// Cost profile of every vehicle with at least one payment in the twelve
/// months ending with `today`.
pub fn build_vehicle_analysis(
    vehicles: &[VehicleModel],
    all_payments: &[PaymentModel],
    today: NaiveDate,
) -> Vec<VehicleCostData> {
    let grouped = group_payments(all_payments);
    vehicles
        .iter()
        .filter_map(|vehicle| {
            let recent: Vec<&PaymentModel> = grouped
                .get(vehicle.id.as_str())?
                .iter()
                .copied()
                .filter(|p| in_window(p.payment_date, today))
                .collect();
            if recent.is_empty() {
                return None;
            }
            let mut costs = CostBreakdown::default();
            for p in &recent {
                costs.add_amount(CostCategory::from_payment_type(&p.payment_type), p.amount);
            }
            let dated: Vec<(NaiveDate, f64)> = recent.iter().map(|p| (p.payment_date, p.amount)).collect();
            Some(VehicleCostData {
                id: vehicle.van_number.clone(),
                name: vehicle_name(vehicle),
                year: vehicle.year.unwrap_or_default(),
                vehicle_type: vehicle.vehicle_type.clone(),
                costs: round_breakdown(costs),
                monthly_history: monthly_history(&dated, today),
            })
        })
        .collect()
}

fn round_breakdown(costs: CostBreakdown) -> CostBreakdown {
    CostBreakdown {
        insurance: round2(costs.insurance),
        repairs: round2(costs.repairs),
        fuel: round2(costs.fuel),
        tax: round2(costs.tax),
        other: round2(costs.other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(id: &str, van: &str) -> VehicleModel {
        VehicleModel {
            id: id.into(),
            van_number: van.into(),
            reg_no: format!("REG{}", van),
            status: "Allocated".into(),
            vehicle_type: "Short wheel base".into(),
            trade_group: "Office".into(),
            service_cost: "GBP 0.00".into(),
            maintenance_cost: "GBP 0.00".into(),
            make_model: None,
            year: Some(2021),
            transmission: None,
            vehicle_ownership: None,
            next_mot_due: None,
            road_tax_due: None,
            next_service_due: None,
        }
    }

    fn payment(vehicle_id: &str, kind: &str, amount: f64, date: (i32, u32, u32)) -> PaymentModel {
        PaymentModel {
            id: format!("{}-{}-{}", vehicle_id, kind, amount),
            vehicle_id: vehicle_id.into(),
            payment_type: kind.into(),
            amount,
            payment_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        }
    }

    #[test]
    fn service_costs_skip_maintenance() {
        let v = vehicle("V1", "373");
        let ps = vec![
            payment("V1", "Service", 600.0, (2025, 1, 5)),
            payment("V1", "Maintenance", 999.0, (2025, 2, 5)),
            payment("V1", "Insurance", 600.0, (2025, 3, 5)),
        ];
        let response = build_service_costs(&v, &ps);
        assert_eq!(response.vehicle.name, "Van 373");
        assert_eq!(response.service_costs.total_cost, 1200.0);
        assert_eq!(response.service_costs.monthly_average, 100.0);
        assert_eq!(response.service_costs.cost_types_count, 2);
        assert!(!response.service_costs.cost_by_type.contains_key("Maintenance"));
    }

    #[test]
    fn vehicle_without_payments_has_zero_average() {
        let response = build_service_costs(&vehicle("V1", "1"), &[]);
        assert_eq!(response.service_costs.total_cost, 0.0);
        assert_eq!(response.service_costs.monthly_average, 0.0);
    }

    #[test]
    fn fleet_totals_sorted_and_summarised() {
        let vehicles = vec![vehicle("V1", "1"), vehicle("V2", "2"), vehicle("V3", "3")];
        let ps = vec![
            payment("V1", "Fuel", 100.0, (2025, 1, 1)),
            payment("V2", "Fuel", 300.0, (2025, 1, 1)),
            payment("V2", "Maintenance", 200.0, (2025, 1, 1)),
        ];
        let response = build_all_vehicle_costs(&vehicles, &ps);
        assert_eq!(response.summary.total_fleet_cost, 600.0);
        assert_eq!(response.summary.average_vehicle_cost, 200.0);
        assert_eq!(response.summary.vehicle_count, 3);
        assert_eq!(response.summary.vehicles_with_costs, 2);
        assert_eq!(response.vehicles[0].vehicle_id, "V2");
        assert_eq!(response.vehicles[2].total_cost, 0.0);
        assert_eq!(response.cost_breakdown_by_type.get("Fuel"), Some(&400.0));
        assert_eq!(response.top_cost_vehicles.len(), 3);
    }

    #[test]
    fn analysis_uses_last_twelve_months() {
        let vehicles = vec![vehicle("V1", "1"), vehicle("V2", "2")];
        let ps = vec![
            payment("V1", "Fuel", 100.0, (2025, 6, 1)),
            payment("V1", "Insurance", 50.0, (2024, 1, 1)),
            payment("V2", "Fuel", 100.0, (2023, 1, 1)),
        ];
        let today = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let analysis = build_vehicle_analysis(&vehicles, &ps, today);
        assert_eq!(analysis.len(), 1);
        assert_eq!(analysis[0].id, "1");
        assert_eq!(analysis[0].costs.fuel, 100.0);
        assert_eq!(analysis[0].costs.insurance, 0.0);
        assert_eq!(analysis[0].monthly_history.len(), 12);
        assert_eq!(analysis[0].monthly_history[11].total, 100.0);
    }
}
