use axum::{
    extract::{Path, Query},
    Json,
};
use contracts::dashboards::d400_fleet_overview::{
    FleetOverviewResponse, VehicleListResponse, VehicleSummary, DEFAULT_DUE_WINDOW_DAYS,
};
use serde::Deserialize;

use crate::dashboards::d400_fleet_overview::service;
use crate::shared::error::{ApiError, ApiResult};

#[derive(Debug, Deserialize)]
pub struct DueWindowQuery {
    pub days: Option<i64>,
}

impl DueWindowQuery {
    fn days(&self) -> Result<i64, ApiError> {
        match self.days {
            None => Ok(DEFAULT_DUE_WINDOW_DAYS),
            Some(d) if d >= 0 => Ok(d),
            Some(d) => Err(ApiError::BadRequest(format!("days must not be negative, got {}", d))),
        }
    }
}

/// GET /api/dashboard/vehicle-summary
pub async fn vehicle_summary() -> ApiResult<VehicleSummary> {
    Ok(Json(service::get_vehicle_summary().await?))
}

/// GET /api/dashboard/vehicles-by-status/:status
pub async fn vehicles_by_status(Path(status): Path<String>) -> ApiResult<VehicleListResponse> {
    service::get_vehicles_by_status(&status)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::BadRequest(format!("Unknown status filter: {}", status)))
}

/// GET /api/dashboard/vehicles-mot-due?days=30
pub async fn vehicles_mot_due(Query(query): Query<DueWindowQuery>) -> ApiResult<VehicleListResponse> {
    Ok(Json(service::get_mot_due(query.days()?).await?))
}

/// GET /api/dashboard/vehicles-tax-due?days=30
pub async fn vehicles_tax_due(Query(query): Query<DueWindowQuery>) -> ApiResult<VehicleListResponse> {
    Ok(Json(service::get_tax_due(query.days()?).await?))
}

/// GET /api/dashboard/fleet-overview
pub async fn fleet_overview() -> ApiResult<FleetOverviewResponse> {
    Ok(Json(service::get_fleet_overview().await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn due_window_defaults_to_thirty_days() {
        assert_eq!(DueWindowQuery { days: None }.days().unwrap(), 30);
        assert_eq!(DueWindowQuery { days: Some(7) }.days().unwrap(), 7);
        assert!(DueWindowQuery { days: Some(-1) }.days().is_err());
    }
}
