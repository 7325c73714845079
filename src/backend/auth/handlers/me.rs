/**
 * Current User Handlers
 *
 * `GET /auth/me` returns the signed-in user and `PATCH /auth/me` updates the
 * display name and/or password. Both run behind the authentication
 * middleware, so the caller's identity comes from a verified token.
 *
 * The user is re-read from the store: a token can outlive its account, in
 * which case both endpoints answer 404.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::passwords::{hash_password, verify_password};
use crate::backend::auth::users::User;
use crate::backend::error::{ApiError, ApiResult};
use crate::backend::extract::JsonBody;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::backend::store::UserUpdate;
use crate::shared::api::{UpdateProfileRequest, UserEnvelope};

use super::register::MIN_PASSWORD_LEN;

async fn current_user(state: &AppState, auth: &AuthUser) -> ApiResult<User> {
    state
        .store
        .find_user_by_id(auth.id())
        .await?
        .ok_or_else(|| {
            tracing::warn!(user_id = %auth.id(), "token refers to a missing user");
            ApiError::not_found("User not found")
        })
}

/// Get current user handler
pub async fn get_me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UserEnvelope>> {
    let user = current_user(&state, &auth).await?;
    Ok(Json(UserEnvelope {
        user: user.to_public(),
    }))
}

/// Update current user handler
///
/// A blank `name` leaves the name unchanged. The password changes only when
/// `newPassword` is given, and then `currentPassword` must match.
///
/// # Errors
///
/// * `400` - "Current password is required", "Current password is incorrect"
///   or a too-short new password
/// * `404` - "User not found"
pub async fn update_me(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(request): JsonBody<UpdateProfileRequest>,
) -> ApiResult<Json<UserEnvelope>> {
    let user = current_user(&state, &auth).await?;

    let mut update = UserUpdate {
        name: request
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string),
        password_hash: None,
    };

    if let Some(new_password) = request.new_password.filter(|p| !p.is_empty()) {
        let current = request
            .current_password
            .filter(|p| !p.is_empty())
            .ok_or_else(|| ApiError::validation("Current password is required"))?;

        if !verify_password(&current, &user.password_hash).await? {
            tracing::warn!(user_id = %user.id, "password change with wrong current password");
            return Err(ApiError::validation("Current password is incorrect"));
        }
        if new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ApiError::validation(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }

        update.password_hash = Some(hash_password(&new_password, state.bcrypt_cost()).await?);
    }

    let updated = state.store.update_user(user.id, update).await?;
    tracing::info!(user_id = %updated.id, "profile updated");

    Ok(Json(UserEnvelope {
        user: updated.to_public(),
    }))
}
