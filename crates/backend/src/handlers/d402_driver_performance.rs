use axum::Json;
use contracts::dashboards::d402_driver_performance::DriverMetrics;

use crate::dashboards::d402_driver_performance::service;
use crate::shared::error::ApiResult;

/// GET /api/drivers/performance
pub async fn list_performance() -> ApiResult<Vec<DriverMetrics>> {
    Ok(Json(service::list_performance().await?))
}
