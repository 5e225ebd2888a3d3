use axum::{extract::Path, Json};
use contracts::dashboards::d401_cost_analysis::{
    AllVehicleCostsResponse, ServiceCostResponse, VehicleAnalysisResponse,
};

use crate::dashboards::d401_cost_analysis::service;
use crate::shared::error::{ApiError, ApiResult};

/// GET /api/cost/service/:van_number
pub async fn service_costs(Path(van_number): Path<String>) -> ApiResult<ServiceCostResponse> {
    tracing::info!("Service cost lookup for van {}", van_number);
    service::get_service_costs(&van_number)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Vehicle with van number {} not found", van_number.trim())))
}

/// GET /api/cost/all-vehicles
pub async fn all_vehicles() -> ApiResult<AllVehicleCostsResponse> {
    Ok(Json(service::get_all_vehicle_costs().await?))
}

/// GET /api/cost/vehicle-analysis
pub async fn vehicle_analysis() -> ApiResult<VehicleAnalysisResponse> {
    let vehicles = service::get_vehicle_analysis().await?;
    Ok(Json(VehicleAnalysisResponse { vehicles }))
}
