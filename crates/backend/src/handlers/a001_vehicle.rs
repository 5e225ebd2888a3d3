use axum::{extract::Path, Json};
use contracts::domain::a001_vehicle::{AssetListResponse, VehicleDetail};

use crate::domain::a001_vehicle::service;
use crate::shared::error::{ApiError, ApiResult};

fn van_not_found(van_number: &str) -> ApiError {
    ApiError::NotFound(format!("Vehicle with van number {} not found", van_number.trim()))
}

/// GET /api/vehicles/lookup/:van_number
pub async fn lookup(Path(van_number): Path<String>) -> ApiResult<VehicleDetail> {
    tracing::info!("Vehicle lookup for van {}", van_number);
    service::detail_by_van_number(&van_number)
        .await?
        .map(Json)
        .ok_or_else(|| van_not_found(&van_number))
}

/// GET /api/assets/all
pub async fn list_all() -> ApiResult<AssetListResponse> {
    let assets = service::list_all().await?;
    Ok(Json(AssetListResponse {
        total: assets.len(),
        assets,
    }))
}

/// GET /api/assets/by-id/:asset_id
pub async fn by_id(Path(asset_id): Path<String>) -> ApiResult<VehicleDetail> {
    service::detail_by_id(&asset_id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Asset not found: {}", asset_id.trim())))
}

/// GET /api/assets/by-van/:van_number
pub async fn by_van(Path(van_number): Path<String>) -> ApiResult<VehicleDetail> {
    service::detail_by_van_number(&van_number)
        .await?
        .map(Json)
        .ok_or_else(|| van_not_found(&van_number))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn unknown_van_is_a_trimmed_404() {
        let err = van_not_found(" 999 ");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.detail(), "Vehicle with van number 999 not found");
    }
}
