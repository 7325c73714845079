/**
 * Ownership Guard
 *
 * Resolves a resource and checks that the authenticated caller owns it.
 * Lists and tasks have no owner column of their own; their owner is the
 * owner of the board they hang off (task -> list -> board -> user).
 *
 * A missing resource anywhere on the chain is reported as not found before
 * ownership is considered.
 */

use uuid::Uuid;

use crate::backend::error::{ApiError, ApiResult};
use crate::backend::store::BoardStore;
use crate::shared::{Board, BoardList, Task};

/// Load a board and require `user_id` to own it
pub async fn authorize_board(
    store: &dyn BoardStore,
    board_id: Uuid,
    user_id: Uuid,
) -> ApiResult<Board> {
    let board = store
        .find_board(board_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Board not found"))?;

    if board.owner_id != user_id {
        tracing::warn!(%board_id, %user_id, "board access denied");
        return Err(ApiError::forbidden());
    }

    Ok(board)
}

/// Load a list and require `user_id` to own its board
pub async fn authorize_list(
    store: &dyn BoardStore,
    list_id: Uuid,
    user_id: Uuid,
) -> ApiResult<BoardList> {
    let list = store
        .find_list(list_id)
        .await?
        .ok_or_else(|| ApiError::not_found("List not found"))?;

    authorize_board(store, list.board_id, user_id).await?;
    Ok(list)
}

/// Load a task and require `user_id` to own its list's board
pub async fn authorize_task(
    store: &dyn BoardStore,
    task_id: Uuid,
    user_id: Uuid,
) -> ApiResult<Task> {
    let task = store
        .find_task(task_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Task not found"))?;

    authorize_list(store, task.list_id, user_id).await?;
    Ok(task)
}
