/**
 * List Handlers
 *
 * `GET/POST /boards/{id}/lists` and `GET/PATCH/DELETE /lists/{id}`.
 * Lists are owned through their board, so every handler first resolves the
 * owner chain (`authorize_board` / `authorize_list`).
 *
 * New lists are appended after the board's last list; the store assigns
 * the position.
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::guard::{authorize_board, authorize_list};
use crate::backend::error::{ApiError, ApiResult};
use crate::backend::extract::{JsonBody, ResourceId};
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::shared::api::{CreateListRequest, DeletedList, UpdateListRequest};
use crate::shared::validation::{optional_title, require_title};
use crate::shared::{BoardList, ListWithTasks};

/// `GET /boards/{id}/lists` - lists by position, each with its tasks
pub async fn list_lists(
    State(state): State<AppState>,
    auth: AuthUser,
    ResourceId(board_id): ResourceId,
) -> ApiResult<Json<Vec<ListWithTasks>>> {
    authorize_board(state.store.as_ref(), board_id, auth.id()).await?;
    let lists = state.store.lists_with_tasks(board_id).await?;
    Ok(Json(lists))
}

/// `POST /boards/{id}/lists`
pub async fn create_list(
    State(state): State<AppState>,
    auth: AuthUser,
    ResourceId(board_id): ResourceId,
    JsonBody(request): JsonBody<CreateListRequest>,
) -> ApiResult<(StatusCode, Json<BoardList>)> {
    authorize_board(state.store.as_ref(), board_id, auth.id()).await?;
    let title = require_title(&request.title)?;

    let list = state.store.create_list(board_id, title).await?;
    tracing::info!(list_id = %list.id, %board_id, position = list.position, "list created");
    Ok((StatusCode::CREATED, Json(list)))
}

/// `GET /lists/{id}`
pub async fn get_list(
    State(state): State<AppState>,
    auth: AuthUser,
    ResourceId(list_id): ResourceId,
) -> ApiResult<Json<BoardList>> {
    let list = authorize_list(state.store.as_ref(), list_id, auth.id()).await?;
    Ok(Json(list))
}

/// `PATCH /lists/{id}` - rename
pub async fn update_list(
    State(state): State<AppState>,
    auth: AuthUser,
    ResourceId(list_id): ResourceId,
    JsonBody(request): JsonBody<UpdateListRequest>,
) -> ApiResult<Json<BoardList>> {
    authorize_list(state.store.as_ref(), list_id, auth.id()).await?;

    let title = optional_title(request.title.as_deref())
        .ok_or_else(|| ApiError::validation("No valid fields provided"))?;

    let list = state.store.update_list(list_id, title).await?;
    Ok(Json(list))
}

/// `DELETE /lists/{id}` - removes the list and its tasks
pub async fn delete_list(
    State(state): State<AppState>,
    auth: AuthUser,
    ResourceId(list_id): ResourceId,
) -> ApiResult<Json<DeletedList>> {
    authorize_list(state.store.as_ref(), list_id, auth.id()).await?;
    let list = state.store.delete_list(list_id).await?;

    tracing::info!(%list_id, "list deleted");
    Ok(Json(DeletedList {
        message: "List deleted".to_string(),
        list,
    }))
}
