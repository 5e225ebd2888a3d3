use anyhow::Result;
use chrono::Utc;
use contracts::dashboards::d400_fleet_overview::{
    group_by_trade_group, group_by_vehicle_type, mot_due_vehicles, service_due_vehicles,
    spare_by_trade_group, status_summary, tax_due_vehicles, vehicle_type_totals,
    vehicles_for_status_key, FleetOverviewResponse, VehicleListResponse, VehicleSummary,
    DEFAULT_DUE_WINDOW_DAYS,
};

use crate::domain::a001_vehicle;

pub async fn get_vehicle_summary() -> Result<VehicleSummary> {
    let vehicles = a001_vehicle::service::list_all().await?;
    let today = Utc::now().date_naive();
    Ok(status_summary(&vehicles, today, DEFAULT_DUE_WINDOW_DAYS))
}

/// `None` when `status_key` is not a known card key.
pub async fn get_vehicles_by_status(status_key: &str) -> Result<Option<VehicleListResponse>> {
    let vehicles = a001_vehicle::service::list_all().await?;
    Ok(vehicles_for_status_key(&vehicles, status_key).map(|vehicles| VehicleListResponse {
        filter: status_key.to_string(),
        count: vehicles.len(),
        vehicles,
    }))
}

pub async fn get_mot_due(days: i64) -> Result<VehicleListResponse> {
    let vehicles = a001_vehicle::service::list_all().await?;
    let due = mot_due_vehicles(&vehicles, Utc::now().date_naive(), days);
    Ok(VehicleListResponse {
        filter: "mot_due".to_string(),
        count: due.len(),
        vehicles: due,
    })
}

pub async fn get_tax_due(days: i64) -> Result<VehicleListResponse> {
    let vehicles = a001_vehicle::service::list_all().await?;
    let due = tax_due_vehicles(&vehicles, Utc::now().date_naive(), days);
    Ok(VehicleListResponse {
        filter: "tax_due".to_string(),
        count: due.len(),
        vehicles: due,
    })
}

pub async fn get_fleet_overview() -> Result<FleetOverviewResponse> {
    let vehicles = a001_vehicle::service::list_all().await?;
    let today = Utc::now().date_naive();
    Ok(FleetOverviewResponse {
        summary: status_summary(&vehicles, today, DEFAULT_DUE_WINDOW_DAYS),
        trade_groups: group_by_trade_group(&vehicles),
        vehicle_types: group_by_vehicle_type(&vehicles),
        vehicle_type_totals: vehicle_type_totals(&vehicles),
        spare_by_trade_group: spare_by_trade_group(&vehicles),
        service_due: service_due_vehicles(&vehicles),
    })
}
