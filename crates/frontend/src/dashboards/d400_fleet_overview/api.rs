use contracts::dashboards::d400_fleet_overview::{
    FleetOverviewResponse, VehicleListResponse, VehicleSummary,
};

use crate::shared::api_utils::get_json;

const API_BASE: &str = "/api/dashboard";

pub async fn get_vehicle_summary() -> Result<VehicleSummary, String> {
    get_json(&format!("{}/vehicle-summary", API_BASE)).await
}

pub async fn get_fleet_overview() -> Result<FleetOverviewResponse, String> {
    get_json(&format!("{}/fleet-overview", API_BASE)).await
}

/// Vehicles behind a status card; `key` is a status bucket key or `total`.
pub async fn get_vehicles_by_status(key: &str) -> Result<VehicleListResponse, String> {
    get_json(&format!(
        "{}/vehicles-by-status/{}",
        API_BASE,
        urlencoding::encode(key)
    ))
    .await
}

pub async fn get_vehicles_mot_due(days: i64) -> Result<VehicleListResponse, String> {
    get_json(&format!("{}/vehicles-mot-due?days={}", API_BASE, days)).await
}

pub async fn get_vehicles_tax_due(days: i64) -> Result<VehicleListResponse, String> {
    get_json(&format!("{}/vehicles-tax-due?days={}", API_BASE, days)).await
}
