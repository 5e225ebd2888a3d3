use axum::Json;
use contracts::domain::a002_engineer::EngineersResponse;

use crate::domain::a002_engineer;
use crate::shared::error::ApiResult;

/// GET /api/assets/engineers
pub async fn list_all() -> ApiResult<EngineersResponse> {
    let engineers = a002_engineer::service::list_with_latest_contact().await?;
    tracing::info!("Returning {} engineers", engineers.len());
    Ok(Json(EngineersResponse { engineers }))
}
