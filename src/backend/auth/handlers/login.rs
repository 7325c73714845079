/**
 * Login Handler
 *
 * Implements `POST /auth/login`.
 *
 * # Authentication Process
 *
 * 1. Look up the user by normalized email
 * 2. Verify the password against the bcrypt hash
 * 3. Issue a session token carrying `{id, email, name}`
 *
 * An unknown email and a wrong password produce the same 401 so the
 * response does not reveal which accounts exist.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::passwords::verify_password;
use crate::backend::auth::users::normalize_email;
use crate::backend::error::{ApiError, ApiResult};
use crate::backend::extract::JsonBody;
use crate::backend::server::state::AppState;
use crate::shared::api::{LoginRequest, LoginResponse};

fn invalid_credentials() -> ApiError {
    ApiError::Unauthorized("Invalid credentials".to_string())
}

/// Login handler
///
/// # Errors
///
/// * `400` - "Missing fields"
/// * `401` - "Invalid credentials"
/// * `500` - store, hashing or signing failure
pub async fn login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let email = normalize_email(&request.email);
    if email.is_empty() || request.password.is_empty() {
        return Err(ApiError::validation("Missing fields"));
    }

    let user = state.store.find_user_by_email(&email).await?.ok_or_else(|| {
        tracing::warn!(%email, "login for unknown email");
        invalid_credentials()
    })?;

    if !verify_password(&request.password, &user.password_hash).await? {
        tracing::warn!(user_id = %user.id, "login with wrong password");
        return Err(invalid_credentials());
    }

    let token = state.tokens.issue(&user.identity())?;

    tracing::info!(user_id = %user.id, "user logged in");

    Ok(Json(LoginResponse {
        message: "Login success".to_string(),
        token,
    }))
}
