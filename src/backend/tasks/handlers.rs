/**
 * Task Handlers
 *
 * `GET/POST /lists/{id}/tasks` and `GET/PATCH/DELETE /tasks/{id}`.
 * A task is owned through its list's board.
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::guard::{authorize_list, authorize_task};
use crate::backend::error::ApiResult;
use crate::backend::extract::{JsonBody, ResourceId};
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::backend::store::TaskUpdate;
use crate::shared::api::{CreateTaskRequest, DeletedTask, UpdateTaskRequest};
use crate::shared::validation::{optional_title, require_title};
use crate::shared::Task;

/// Trimmed description; blank means none
fn description(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}

/// `GET /lists/{id}/tasks` - tasks by position
pub async fn list_tasks(
    State(state): State<AppState>,
    auth: AuthUser,
    ResourceId(list_id): ResourceId,
) -> ApiResult<Json<Vec<Task>>> {
    authorize_list(state.store.as_ref(), list_id, auth.id()).await?;
    let tasks = state.store.list_tasks(list_id).await?;
    Ok(Json(tasks))
}

/// `POST /lists/{id}/tasks` - new tasks start incomplete at the end of the list
pub async fn create_task(
    State(state): State<AppState>,
    auth: AuthUser,
    ResourceId(list_id): ResourceId,
    JsonBody(request): JsonBody<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    authorize_list(state.store.as_ref(), list_id, auth.id()).await?;
    let title = require_title(&request.title)?;

    let task = state
        .store
        .create_task(list_id, title, description(request.description.as_deref()))
        .await?;

    tracing::info!(task_id = %task.id, %list_id, position = task.position, "task created");
    Ok((StatusCode::CREATED, Json(task)))
}

/// `GET /tasks/{id}`
pub async fn get_task(
    State(state): State<AppState>,
    auth: AuthUser,
    ResourceId(task_id): ResourceId,
) -> ApiResult<Json<Task>> {
    let task = authorize_task(state.store.as_ref(), task_id, auth.id()).await?;
    Ok(Json(task))
}

/// `PATCH /tasks/{id}`
///
/// Absent fields are left alone. A blank title is ignored; a blank
/// description clears it.
pub async fn update_task(
    State(state): State<AppState>,
    auth: AuthUser,
    ResourceId(task_id): ResourceId,
    JsonBody(request): JsonBody<UpdateTaskRequest>,
) -> ApiResult<Json<Task>> {
    authorize_task(state.store.as_ref(), task_id, auth.id()).await?;

    let update = TaskUpdate {
        title: optional_title(request.title.as_deref()),
        description: request
            .description
            .as_deref()
            .map(|raw| description(Some(raw))),
        completed: request.completed,
    };

    let task = state.store.update_task(task_id, update).await?;
    tracing::debug!(%task_id, completed = task.completed, "task updated");
    Ok(Json(task))
}

/// `DELETE /tasks/{id}`
pub async fn delete_task(
    State(state): State<AppState>,
    auth: AuthUser,
    ResourceId(task_id): ResourceId,
) -> ApiResult<Json<DeletedTask>> {
    authorize_task(state.store.as_ref(), task_id, auth.id()).await?;
    let task = state.store.delete_task(task_id).await?;

    tracing::info!(%task_id, "task deleted");
    Ok(Json(DeletedTask {
        message: "Task deleted".to_string(),
        task,
    }))
}
