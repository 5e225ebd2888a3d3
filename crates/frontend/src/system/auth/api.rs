use contracts::system::auth::{AuthUser, LoginRequest, LoginResponse, SignoutResponse};

use crate::shared::api_utils::{fetch_json, post_json, FetchError};

/// Login with email and password
pub async fn login(email: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest { email, password };
    post_json("/api/auth/login", &request).await
}

/// User behind the stored session token.
///
/// Kept as [`FetchError`] so callers can tell a rejected token from an
/// unreachable server.
pub async fn get_session() -> Result<AuthUser, FetchError> {
    fetch_json("/api/auth/session").await
}

/// Revoke the stored session token on the server
pub async fn signout() -> Result<SignoutResponse, String> {
    post_json("/api/auth/signout", &serde_json::json!({})).await
}
