use axum::{extract::Path, Json};
use contracts::domain::a003_allocation::{
    AllocationCreatedResponse, AllocationDeletedResponse, AllocationHistoryResponse,
    AllocationUpdatedResponse, CreateAllocationRequest, DeleteAllocationRequest,
    UpdateAllocationRequest,
};

use crate::domain::a003_allocation::service::{self, AllocationError};
use crate::shared::error::{ApiError, ApiResult};

impl From<AllocationError> for ApiError {
    fn from(err: AllocationError) -> Self {
        match err {
            AllocationError::Validation(msg) => ApiError::BadRequest(msg),
            AllocationError::Storage(e) => ApiError::Internal(e),
            not_found => ApiError::NotFound(not_found.to_string()),
        }
    }
}

/// POST /api/assets/allocation/create
pub async fn create(Json(request): Json<CreateAllocationRequest>) -> ApiResult<AllocationCreatedResponse> {
    tracing::info!(
        "Creating allocation: vehicle={} engineer={} start={}",
        request.vehicle_id,
        request.service_resource_id,
        request.start_date
    );
    let response = service::create(request).await?;
    tracing::info!(
        "Allocation {} created, previous closed: {}",
        response.allocation_id,
        response.previous_allocation_closed
    );
    Ok(Json(response))
}

/// PUT /api/assets/allocation/update
pub async fn update(Json(request): Json<UpdateAllocationRequest>) -> ApiResult<AllocationUpdatedResponse> {
    tracing::info!("Updating allocation {}", request.allocation_id);
    let allocation = service::update(request).await?;
    Ok(Json(AllocationUpdatedResponse {
        success: true,
        message: "Allocation updated successfully".to_string(),
        allocation,
    }))
}

/// POST /api/assets/allocation/delete
pub async fn delete(Json(request): Json<DeleteAllocationRequest>) -> ApiResult<AllocationDeletedResponse> {
    tracing::info!("Deleting allocation {}", request.allocation_id);
    let allocation_id = service::delete(request).await?;
    Ok(Json(AllocationDeletedResponse {
        success: true,
        message: "Allocation deleted successfully".to_string(),
        allocation_id,
    }))
}

/// GET /api/assets/allocations/:vehicle_id
pub async fn history(Path(vehicle_id): Path<String>) -> ApiResult<AllocationHistoryResponse> {
    let allocations = service::history(&vehicle_id).await?;
    Ok(Json(AllocationHistoryResponse {
        vehicle_id,
        allocations,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn allocation_errors_map_to_http_status() {
        let bad: ApiError = AllocationError::Validation("Engineer and start date are required".into()).into();
        assert_eq!(bad.status(), StatusCode::BAD_REQUEST);
        assert_eq!(bad.detail(), "Engineer and start date are required");

        let missing: ApiError = AllocationError::AllocationNotFound("AL-9".into()).into();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        assert_eq!(missing.detail(), "Allocation AL-9 not found");

        let storage: ApiError = AllocationError::Storage(anyhow::anyhow!("locked")).into();
        assert_eq!(storage.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
