use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use contracts::system::auth::SessionClaims;

use crate::shared::error::ApiError;

/// Claims of the signed-in user, set by [`super::middleware::require_auth`].
/// Usage in handlers: `async fn handler(CurrentUser(claims): CurrentUser)`
pub struct CurrentUser(pub SessionClaims);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionClaims>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| ApiError::Unauthorized("Not authenticated".into()))
    }
}
