//! List and task API integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{create_unique_test_user, TestApp, TestUser};

async fn board_with_list(app: &TestApp, user: &TestUser) -> (String, String) {
    let (_, board) = app
        .post("/api/boards", &user.token, json!({ "title": "Board" }))
        .await;
    let board_id = board["id"].as_str().unwrap().to_string();
    let (status, list) = app
        .post(
            &format!("/api/boards/{board_id}/lists"),
            &user.token,
            json!({ "title": "To Do" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{list}");
    (board_id, list["id"].as_str().unwrap().to_string())
}

async fn create_task(app: &TestApp, token: &str, list_id: &str, body: Value) -> Value {
    let (status, task) = app
        .post(&format!("/api/lists/{list_id}/tasks"), token, body)
        .await;
    assert_eq!(status, StatusCode::CREATED, "{task}");
    task
}

fn positions(items: &Value) -> Vec<i64> {
    items
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["position"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_list_positions_are_sequential() {
    let app = TestApp::new();
    let user = create_unique_test_user(&app).await;
    let (board_id, _) = board_with_list(&app, &user).await;
    let uri = format!("/api/boards/{board_id}/lists");

    for title in ["Doing", "Done"] {
        app.post(&uri, &user.token, json!({ "title": title })).await;
    }

    let (status, lists) = app.get(&uri, &user.token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(positions(&lists), vec![0, 1, 2]);
    assert_eq!(lists[0]["title"], "To Do");
    assert_eq!(lists[2]["title"], "Done");
    assert_eq!(lists[0]["tasks"], json!([]));
}

#[tokio::test]
async fn test_lists_embed_ordered_tasks() {
    let app = TestApp::new();
    let user = create_unique_test_user(&app).await;
    let (board_id, list_id) = board_with_list(&app, &user).await;

    for title in ["first", "second", "third"] {
        create_task(&app, &user.token, &list_id, json!({ "title": title })).await;
    }

    let (_, lists) = app
        .get(&format!("/api/boards/{board_id}/lists"), &user.token)
        .await;
    let tasks = &lists[0]["tasks"];
    assert_eq!(positions(tasks), vec![0, 1, 2]);
    assert_eq!(tasks[1]["title"], "second");
}

#[tokio::test]
async fn test_create_list_requires_title_and_board() {
    let app = TestApp::new();
    let user = create_unique_test_user(&app).await;
    let (board_id, _) = board_with_list(&app, &user).await;

    let response = app
        .post(
            &format!("/api/boards/{board_id}/lists"),
            &user.token,
            json!({ "title": "" }),
        )
        .await;
    crate::assert_api_error!(response, StatusCode::BAD_REQUEST, "Title is required");

    let response = app
        .post(
            &format!("/api/boards/{}/lists", uuid::Uuid::new_v4()),
            &user.token,
            json!({ "title": "Orphan" }),
        )
        .await;
    crate::assert_api_error!(response, StatusCode::NOT_FOUND, "Board not found");
}

#[tokio::test]
async fn test_update_and_delete_list() {
    let app = TestApp::new();
    let user = create_unique_test_user(&app).await;
    let (board_id, list_id) = board_with_list(&app, &user).await;
    let uri = format!("/api/lists/{list_id}");
    create_task(&app, &user.token, &list_id, json!({ "title": "inside" })).await;

    let (status, list) = app.patch(&uri, &user.token, json!({ "title": "Backlog" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["title"], "Backlog");
    assert_eq!(list["position"], 0);

    let response = app.patch(&uri, &user.token, json!({ "title": " " })).await;
    crate::assert_api_error!(response, StatusCode::BAD_REQUEST, "No valid fields provided");

    let (status, body) = app.delete(&uri, &user.token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "List deleted");
    assert_eq!(body["list"]["id"], list_id.as_str());

    let response = app.get(&uri, &user.token).await;
    crate::assert_api_error!(response, StatusCode::NOT_FOUND, "List not found");

    let (_, lists) = app
        .get(&format!("/api/boards/{board_id}/lists"), &user.token)
        .await;
    assert_eq!(lists, json!([]));
}

#[tokio::test]
async fn test_list_and_task_ownership_is_enforced() {
    let app = TestApp::new();
    let ann = create_unique_test_user(&app).await;
    let bob = create_unique_test_user(&app).await;
    let (_, list_id) = board_with_list(&app, &ann).await;
    let task = create_task(&app, &ann.token, &list_id, json!({ "title": "secret" })).await;
    let task_uri = format!("/api/tasks/{}", task["id"].as_str().unwrap());

    let response = app.get(&format!("/api/lists/{list_id}"), &bob.token).await;
    crate::assert_api_error!(response, StatusCode::FORBIDDEN, "Forbidden");

    let response = app
        .post(
            &format!("/api/lists/{list_id}/tasks"),
            &bob.token,
            json!({ "title": "intruder" }),
        )
        .await;
    crate::assert_api_error!(response, StatusCode::FORBIDDEN, "Forbidden");

    let response = app.patch(&task_uri, &bob.token, json!({ "completed": true })).await;
    crate::assert_api_error!(response, StatusCode::FORBIDDEN, "Forbidden");

    let response = app.delete(&task_uri, &bob.token).await;
    crate::assert_api_error!(response, StatusCode::FORBIDDEN, "Forbidden");

    let (_, unchanged) = app.get(&task_uri, &ann.token).await;
    assert_eq!(unchanged["completed"], false);
}

#[tokio::test]
async fn test_create_task_defaults() {
    let app = TestApp::new();
    let user = create_unique_test_user(&app).await;
    let (_, list_id) = board_with_list(&app, &user).await;

    let task = create_task(
        &app,
        &user.token,
        &list_id,
        json!({ "title": "Write tests", "description": "" }),
    )
    .await;
    assert_eq!(task["title"], "Write tests");
    assert_eq!(task["description"], Value::Null);
    assert_eq!(task["completed"], false);
    assert_eq!(task["position"], 0);
    assert_eq!(task["list_id"], list_id.as_str());

    let response = app
        .post(
            &format!("/api/lists/{list_id}/tasks"),
            &user.token,
            json!({ "description": "no title" }),
        )
        .await;
    crate::assert_api_error!(response, StatusCode::BAD_REQUEST, "Title is required");
}

#[tokio::test]
async fn test_update_task_fields() {
    let app = TestApp::new();
    let user = create_unique_test_user(&app).await;
    let (_, list_id) = board_with_list(&app, &user).await;
    let task = create_task(
        &app,
        &user.token,
        &list_id,
        json!({ "title": "Draft", "description": "first pass" }),
    )
    .await;
    let uri = format!("/api/tasks/{}", task["id"].as_str().unwrap());

    let (status, updated) = app.patch(&uri, &user.token, json!({ "completed": true })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["completed"], true);
    assert_eq!(updated["title"], "Draft");
    assert_eq!(updated["description"], "first pass");

    let (_, updated) = app.patch(&uri, &user.token, json!({ "completed": false })).await;
    assert_eq!(updated["completed"], false);

    let (_, updated) = app
        .patch(&uri, &user.token, json!({ "title": "Final", "description": "" }))
        .await;
    assert_eq!(updated["title"], "Final");
    assert_eq!(updated["description"], Value::Null);

    let (status, _) = app
        .patch(&uri, &user.token, json!({ "completed": "yes" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_task_leaves_position_gap() {
    let app = TestApp::new();
    let user = create_unique_test_user(&app).await;
    let (_, list_id) = board_with_list(&app, &user).await;
    let tasks_uri = format!("/api/lists/{list_id}/tasks");

    let mut ids = Vec::new();
    for title in ["a", "b", "c"] {
        let task = create_task(&app, &user.token, &list_id, json!({ "title": title })).await;
        ids.push(task["id"].as_str().unwrap().to_string());
    }

    let (status, body) = app
        .delete(&format!("/api/tasks/{}", ids[1]), &user.token)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Task deleted");
    assert_eq!(body["task"]["title"], "b");

    let (_, tasks) = app.get(&tasks_uri, &user.token).await;
    assert_eq!(positions(&tasks), vec![0, 2]);

    let task = create_task(&app, &user.token, &list_id, json!({ "title": "d" })).await;
    assert_eq!(task["position"], 3);
}

#[tokio::test]
async fn test_unknown_task() {
    let app = TestApp::new();
    let user = create_unique_test_user(&app).await;

    let response = app
        .get(&format!("/api/tasks/{}", uuid::Uuid::new_v4()), &user.token)
        .await;
    crate::assert_api_error!(response, StatusCode::NOT_FOUND, "Task not found");
}
