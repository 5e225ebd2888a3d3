use axum::{
    body::Body,
    extract::Request,
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::shared::error::ApiError;

/// Token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Middleware that requires a valid, unrevoked session token
pub async fn require_auth(mut req: Request<Body>, next: Next) -> Result<Response, ApiError> {
    let token = bearer_token(req.headers())
        .ok_or_else(|| ApiError::Unauthorized("Not authenticated".into()))?
        .to_string();

    let claims = super::jwt::validate_token(&token)
        .await
        .map_err(|_| ApiError::Unauthorized("Invalid or expired session".into()))?;

    if !super::sessions::is_active(&token).await? {
        return Err(ApiError::Unauthorized("Session has been signed out".into()));
    }

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

/// Middleware for routes that change allocations
pub async fn require_allocation_manager(req: Request<Body>, next: Next) -> Result<Response, ApiError> {
    let role = req
        .extensions()
        .get::<contracts::system::auth::SessionClaims>()
        .map(|c| c.role)
        .ok_or_else(|| ApiError::Unauthorized("Not authenticated".into()))?;

    if !role.can_manage_allocations() {
        return Err(ApiError::Forbidden(format!(
            "Role {} cannot change allocations",
            role.display_name()
        )));
    }
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn extracts_bearer_token() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc.def"));
        assert_eq!(bearer_token(&headers), Some("abc.def"));

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic xyz"));
        assert_eq!(bearer_token(&headers), None);

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert_eq!(bearer_token(&headers), None);
    }
}
