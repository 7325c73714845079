/**
 * Board Handlers
 *
 * CRUD over the caller's boards. Listing and creation are scoped to the
 * caller by construction; everything addressed by id goes through
 * `authorize_board` first (404 for an unknown id, then 403 for a board
 * owned by someone else).
 *
 * Create and update accept JSON or `multipart/form-data`.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::guard::authorize_board;
use crate::backend::error::{ApiError, ApiResult};
use crate::backend::extract::{FormOrJson, ResourceId};
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::backend::store::{BoardUpdate, NewBoard};
use crate::shared::api::{CreateBoardRequest, MessageResponse, UpdateBoardRequest};
use crate::shared::validation::{board_color, optional_title, require_title};
use crate::shared::Board;

/// `GET /boards` - the caller's boards, newest first
pub async fn list_boards(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<Board>>> {
    let boards = state.store.list_boards(auth.id()).await?;
    Ok(Json(boards))
}

/// `POST /boards`
pub async fn create_board(
    State(state): State<AppState>,
    auth: AuthUser,
    FormOrJson(request): FormOrJson<CreateBoardRequest>,
) -> ApiResult<Json<Board>> {
    let title = require_title(&request.title)?;

    let board = state
        .store
        .create_board(NewBoard {
            owner_id: auth.id(),
            title,
            background_color: board_color(request.background_color.as_deref()),
        })
        .await?;

    tracing::info!(board_id = %board.id, owner_id = %board.owner_id, "board created");
    Ok(Json(board))
}

/// `GET /boards/{id}`
pub async fn get_board(
    State(state): State<AppState>,
    auth: AuthUser,
    ResourceId(board_id): ResourceId,
) -> ApiResult<Json<Board>> {
    let board = authorize_board(state.store.as_ref(), board_id, auth.id()).await?;
    Ok(Json(board))
}

/// `PATCH /boards/{id}`
///
/// A blank title is ignored; a blank color resets to the default. A body
/// that changes nothing is rejected with "No valid fields provided".
pub async fn update_board(
    State(state): State<AppState>,
    auth: AuthUser,
    ResourceId(board_id): ResourceId,
    FormOrJson(request): FormOrJson<UpdateBoardRequest>,
) -> ApiResult<Json<Board>> {
    authorize_board(state.store.as_ref(), board_id, auth.id()).await?;

    let update = BoardUpdate {
        title: optional_title(request.title.as_deref()),
        background_color: request.color().map(|color| board_color(Some(color))),
    };
    if update.is_empty() {
        return Err(ApiError::validation("No valid fields provided"));
    }

    let board = state.store.update_board(board_id, update).await?;
    tracing::info!(%board_id, "board updated");
    Ok(Json(board))
}

/// `DELETE /boards/{id}` - removes the board with its lists and tasks
pub async fn delete_board(
    State(state): State<AppState>,
    auth: AuthUser,
    ResourceId(board_id): ResourceId,
) -> ApiResult<Json<MessageResponse>> {
    authorize_board(state.store.as_ref(), board_id, auth.id()).await?;
    state.store.delete_board(board_id).await?;

    tracing::info!(%board_id, "board deleted");
    Ok(Json(MessageResponse {
        message: "Board deleted successfully".to_string(),
    }))
}
