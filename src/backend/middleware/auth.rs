/**
 * Authentication Middleware
 *
 * Protects routes that require a signed-in caller. The bearer token from
 * the `Authorization` header is verified against the shared secret and the
 * identity it carries is attached to the request extensions, where the
 * `AuthUser` extractor picks it up.
 *
 * The token is the only source of identity: no store lookup happens here.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::sessions::TokenService;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;
use crate::shared::Identity;

/// Authenticated caller, as asserted by a verified session token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthUser(pub Identity);

impl AuthUser {
    pub fn id(&self) -> uuid::Uuid {
        self.0.id
    }
}

/// Pull the token out of `Authorization: Bearer <token>`
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Verify the bearer token of a request
pub fn authenticate(tokens: &TokenService, headers: &HeaderMap) -> Result<AuthUser, ApiError> {
    let token = bearer_token(headers).ok_or_else(|| {
        tracing::debug!("missing or malformed Authorization header");
        ApiError::unauthorized()
    })?;

    let claims = tokens.verify(token).map_err(|e| {
        tracing::debug!(error = %e, "rejected session token");
        ApiError::from(e)
    })?;

    Ok(AuthUser(claims.identity()))
}

/// Authentication middleware
///
/// Returns 401 when the header is absent, not a bearer header, or carries
/// a token that fails verification.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user = authenticate(&state.tokens, request.headers())?;
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<AuthUser>().cloned().ok_or_else(|| {
            tracing::warn!("AuthUser not found in request extensions");
            ApiError::unauthorized()
        })
    }
}
