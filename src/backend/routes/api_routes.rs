/**
 * API Route Handlers
 *
 * This module wires the HTTP API:
 *
 * ## Authentication (public)
 * - `POST /auth/register` - User registration
 * - `POST /auth/login` - User login
 *
 * ## Protected (bearer token)
 * - `GET/PATCH /auth/me` - Current user
 * - `GET/POST /boards`, `GET/PATCH/DELETE /boards/{id}`
 * - `GET/POST /boards/{id}/lists`, `GET/PATCH/DELETE /lists/{id}`
 * - `GET/POST /lists/{id}/tasks`, `GET/PATCH/DELETE /tasks/{id}`
 *
 * Protected routes sit behind `auth_middleware` as a route layer, so a
 * request to an unknown path is a 404 rather than a 401.
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{get_me, login, register, update_me};
use crate::backend::boards::{create_board, delete_board, get_board, list_boards, update_board};
use crate::backend::lists::{create_list, delete_list, get_list, list_lists, update_list};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;
use crate::backend::tasks::{create_task, delete_task, get_task, list_tasks, update_task};

/// Routes that need no token
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

/// Routes that require a verified bearer token
fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/auth/me", get(get_me).patch(update_me))
        // Boards
        .route("/boards", get(list_boards).post(create_board))
        .route(
            "/boards/{id}",
            get(get_board).patch(update_board).delete(delete_board),
        )
        // Lists
        .route("/boards/{id}/lists", get(list_lists).post(create_list))
        .route(
            "/lists/{id}",
            get(get_list).patch(update_list).delete(delete_list),
        )
        // Tasks
        .route("/lists/{id}/tasks", get(list_tasks).post(create_task))
        .route(
            "/tasks/{id}",
            get(get_task).patch(update_task).delete(delete_task),
        )
        .route_layer(from_fn_with_state(state, auth_middleware))
}

/// Configure API routes
///
/// Returns the API as a router of its own so it can be mounted both at the
/// root and under `/api`.
pub fn configure_api_routes(state: AppState) -> Router<AppState> {
    public_routes().merge(protected_routes(state))
}
