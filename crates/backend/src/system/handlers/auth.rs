use axum::{extract::Json, http::HeaderMap};
use contracts::system::auth::{AuthUser, LoginRequest, LoginResponse, SignoutResponse};

use crate::shared::config;
use crate::shared::error::{ApiError, ApiResult};
use crate::system::auth::{extractor::CurrentUser, jwt, middleware::bearer_token, sessions};
use crate::system::users::service as user_service;

/// POST /api/auth/login
pub async fn login(Json(request): Json<LoginRequest>) -> ApiResult<LoginResponse> {
    if request.email.trim().is_empty() || request.password.is_empty() {
        return Err(ApiError::BadRequest("Email and password are required".into()));
    }

    let user = user_service::verify_credentials(&request.email, &request.password)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Failed login attempt for {}", request.email.trim());
            ApiError::Unauthorized("Invalid email or password".into())
        })?;

    let lifetime = config::current().auth.session_hours;
    let (token, expires_at) =
        jwt::generate_session_token(&user.id, &user.email, user.role, lifetime).await?;
    sessions::store(&user.id, &token, expires_at).await?;

    tracing::info!("User {} signed in as {}", user.email, user.role.as_str());
    Ok(Json(LoginResponse {
        token,
        user: user.to_auth_user(),
    }))
}

/// GET /api/auth/session (protected by middleware)
pub async fn session(CurrentUser(claims): CurrentUser) -> ApiResult<AuthUser> {
    let user = user_service::get_by_id(&claims.sub)
        .await?
        .filter(|u| u.is_active)
        .ok_or_else(|| ApiError::Unauthorized("User no longer exists".into()))?;
    Ok(Json(user.to_auth_user()))
}

/// POST /api/auth/signout
///
/// Always succeeds so the client can clear its local session even when the
/// token is missing or already revoked.
pub async fn signout(headers: HeaderMap) -> ApiResult<SignoutResponse> {
    if let Some(token) = bearer_token(&headers) {
        match sessions::revoke(token).await {
            Ok(true) => tracing::info!("Session revoked"),
            Ok(false) => tracing::info!("Sign-out for unknown or already revoked session"),
            Err(e) => tracing::error!("Failed to revoke session: {:#}", e),
        }
    }
    Ok(Json(SignoutResponse { success: true }))
}
