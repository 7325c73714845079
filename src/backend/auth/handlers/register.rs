/**
 * Register Handler
 *
 * Implements `POST /auth/register`.
 *
 * # Registration Process
 *
 * 1. Require name, email and password
 * 2. Normalize the email (trimmed, lowercase) and check its shape
 * 3. Enforce the minimum password length
 * 4. Reject an email that is already registered
 * 5. Hash the password with bcrypt and store the user
 *
 * Registration does not sign the user in; the client logs in afterwards.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::passwords::hash_password;
use crate::backend::auth::users::normalize_email;
use crate::backend::error::{ApiError, ApiResult};
use crate::backend::extract::JsonBody;
use crate::backend::server::state::AppState;
use crate::backend::store::{NewUser, DUPLICATE_EMAIL};
use crate::shared::api::{RegisterRequest, RegisterResponse};
use crate::shared::validation::is_valid_email;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Register handler
///
/// # Errors
///
/// * `400` - "Missing fields", "Invalid email format",
///   "Password must be at least 8 characters" or "Email already exists"
/// * `500` - store or hashing failure
pub async fn register(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RegisterRequest>,
) -> ApiResult<Json<RegisterResponse>> {
    let name = request.name.trim();
    let email = normalize_email(&request.email);

    if name.is_empty() || email.is_empty() || request.password.is_empty() {
        return Err(ApiError::validation("Missing fields"));
    }
    if !is_valid_email(&email) {
        return Err(ApiError::validation("Invalid email format"));
    }
    if request.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }

    tracing::info!(%email, "registration request");

    if state.store.find_user_by_email(&email).await?.is_some() {
        tracing::warn!(%email, "email already registered");
        return Err(ApiError::validation(DUPLICATE_EMAIL));
    }

    let password_hash = hash_password(&request.password, state.bcrypt_cost()).await?;

    // The unique index still guards a concurrent registration of the same email
    let user = state
        .store
        .create_user(NewUser {
            name: name.to_string(),
            email,
            password_hash,
        })
        .await?;

    tracing::info!(user_id = %user.id, "user registered");

    Ok(Json(RegisterResponse {
        message: "User created".to_string(),
        user: user.to_public(),
    }))
}
