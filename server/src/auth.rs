//! Bearer token extraction.

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;
use tracing::debug;

/// Login of the caller, resolved from a verified `Authorization: Bearer` token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser(pub String);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or_else(|| ApiError::Unauthorized("missing authorization header".into()))?;

        let token = value
            .to_str()
            .ok()
            .and_then(|v| v.strip_prefix("Bearer "))
            .ok_or_else(|| ApiError::Unauthorized("invalid authorization header".into()))?;

        let login = state.credentials.verify_token(token).map_err(|e| {
            debug!(error = %e, "bearer token rejected");
            ApiError::Unauthorized("invalid or expired access token".into())
        })?;

        Ok(AuthUser(login))
    }
}
