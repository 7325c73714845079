//! Board API integration tests

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{auth_header, create_unique_test_user, TestApp};

async fn create_board(app: &TestApp, token: &str, body: Value) -> Value {
    let (status, board) = app.post("/api/boards", token, body).await;
    assert_eq!(status, StatusCode::OK, "create board failed: {board}");
    board
}

#[tokio::test]
async fn test_create_board_defaults_color() {
    let app = TestApp::new();
    let user = create_unique_test_user(&app).await;

    let board = create_board(&app, &user.token, json!({ "title": "  Work  " })).await;
    assert_eq!(board["title"], "Work");
    assert_eq!(board["backgroundColor"], "#ffffff");
    assert_eq!(board["owner_id"], user.id.to_string());

    let board = create_board(
        &app,
        &user.token,
        json!({ "title": "Home", "backgroundColor": "#0079bf" }),
    )
    .await;
    assert_eq!(board["backgroundColor"], "#0079bf");
}

#[tokio::test]
async fn test_create_board_requires_title() {
    let app = TestApp::new();
    let user = create_unique_test_user(&app).await;

    let response = app.post("/api/boards", &user.token, json!({ "title": "   " })).await;
    crate::assert_api_error!(response, StatusCode::BAD_REQUEST, "Title is required");
}

#[tokio::test]
async fn test_create_board_from_multipart_form() {
    let app = TestApp::new();
    let user = create_unique_test_user(&app).await;

    let body = "--XBOUNDARYX\r\n\
        Content-Disposition: form-data; name=\"title\"\r\n\r\n\
        Groceries\r\n\
        --XBOUNDARYX\r\n\
        Content-Disposition: form-data; name=\"backgroundColor\"\r\n\r\n\
        #519839\r\n\
        --XBOUNDARYX--\r\n";
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/boards")
        .header(header::AUTHORIZATION, auth_header(&user.token))
        .header(
            header::CONTENT_TYPE,
            "multipart/form-data; boundary=XBOUNDARYX",
        )
        .body(Body::from(body))
        .unwrap();

    let (status, board) = app.send(request).await;
    assert_eq!(status, StatusCode::OK, "{board}");
    assert_eq!(board["title"], "Groceries");
    assert_eq!(board["backgroundColor"], "#519839");
}

#[tokio::test]
async fn test_list_boards_only_returns_own_boards() {
    let app = TestApp::new();
    let ann = create_unique_test_user(&app).await;
    let bob = create_unique_test_user(&app).await;

    create_board(&app, &ann.token, json!({ "title": "Ann 1" })).await;
    create_board(&app, &ann.token, json!({ "title": "Ann 2" })).await;
    create_board(&app, &bob.token, json!({ "title": "Bob 1" })).await;

    let (status, boards) = app.get("/api/boards", &ann.token).await;
    assert_eq!(status, StatusCode::OK);
    let mut titles: Vec<&str> = boards
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap())
        .collect();
    titles.sort_unstable();
    assert_eq!(titles, vec!["Ann 1", "Ann 2"]);
}

#[tokio::test]
async fn test_board_ownership_is_enforced() {
    let app = TestApp::new();
    let ann = create_unique_test_user(&app).await;
    let bob = create_unique_test_user(&app).await;
    let board = create_board(&app, &ann.token, json!({ "title": "Private" })).await;
    let uri = format!("/api/boards/{}", board["id"].as_str().unwrap());

    let response = app.get(&uri, &bob.token).await;
    crate::assert_api_error!(response, StatusCode::FORBIDDEN, "Forbidden");

    let response = app.patch(&uri, &bob.token, json!({ "title": "Mine" })).await;
    crate::assert_api_error!(response, StatusCode::FORBIDDEN, "Forbidden");

    let response = app.delete(&uri, &bob.token).await;
    crate::assert_api_error!(response, StatusCode::FORBIDDEN, "Forbidden");

    let (status, still_there) = app.get(&uri, &ann.token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(still_there["title"], "Private");
}

#[tokio::test]
async fn test_unknown_and_invalid_board_ids() {
    let app = TestApp::new();
    let user = create_unique_test_user(&app).await;

    let response = app
        .get(&format!("/api/boards/{}", uuid::Uuid::new_v4()), &user.token)
        .await;
    crate::assert_api_error!(response, StatusCode::NOT_FOUND, "Board not found");

    let response = app.get("/api/boards/not-a-uuid", &user.token).await;
    crate::assert_api_error!(response, StatusCode::BAD_REQUEST, "Invalid id");
}

#[tokio::test]
async fn test_update_board() {
    let app = TestApp::new();
    let user = create_unique_test_user(&app).await;
    let board = create_board(
        &app,
        &user.token,
        json!({ "title": "Work", "backgroundColor": "#0079bf" }),
    )
    .await;
    let uri = format!("/api/boards/{}", board["id"].as_str().unwrap());

    let (status, updated) = app.patch(&uri, &user.token, json!({ "title": "Job" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "Job");
    assert_eq!(updated["backgroundColor"], "#0079bf");

    let (_, updated) = app.patch(&uri, &user.token, json!({ "color": "#d29034" })).await;
    assert_eq!(updated["backgroundColor"], "#d29034");

    let (_, updated) = app.patch(&uri, &user.token, json!({ "background": "" })).await;
    assert_eq!(updated["backgroundColor"], "#ffffff");
    assert_eq!(updated["title"], "Job");

    let response = app.patch(&uri, &user.token, json!({ "title": "  " })).await;
    crate::assert_api_error!(response, StatusCode::BAD_REQUEST, "No valid fields provided");
}

#[tokio::test]
async fn test_delete_board() {
    let app = TestApp::new();
    let user = create_unique_test_user(&app).await;
    let board = create_board(&app, &user.token, json!({ "title": "Temp" })).await;
    let uri = format!("/api/boards/{}", board["id"].as_str().unwrap());

    let (status, body) = app.delete(&uri, &user.token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Board deleted successfully");

    let response = app.get(&uri, &user.token).await;
    crate::assert_api_error!(response, StatusCode::NOT_FOUND, "Board not found");
}

#[tokio::test]
async fn test_malformed_json_body() {
    let app = TestApp::new();
    let user = create_unique_test_user(&app).await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/boards")
        .header(header::AUTHORIZATION, auth_header(&user.token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = app.send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    crate::assert_contains!(body["error"].as_str().unwrap(), "JSON");
}

#[tokio::test]
async fn test_update_board_color_key_precedence() {
    let app = TestApp::new();
    let user = create_unique_test_user(&app).await;
    let board = create_board(&app, &user.token, json!({ "title": "Work" })).await;
    let uri = format!("/api/boards/{}", board["id"].as_str().unwrap());

    let (status, updated) = app
        .patch(
            &uri,
            &user.token,
            json!({ "backgroundColor": "#111111", "color": "#222222" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{updated}");
    assert_eq!(updated["backgroundColor"], "#111111");

    let (status, updated) = app
        .patch(
            &uri,
            &user.token,
            json!({ "backgroundColor": null, "color": "#222222" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{updated}");
    assert_eq!(updated["backgroundColor"], "#222222");

    let (_, updated) = app
        .patch(
            &uri,
            &user.token,
            json!({ "background": "#333333", "color": "#444444" }),
        )
        .await;
    assert_eq!(updated["backgroundColor"], "#333333");
}

#[tokio::test]
async fn test_update_board_color_keys_from_multipart_form() {
    let app = TestApp::new();
    let user = create_unique_test_user(&app).await;
    let board = create_board(&app, &user.token, json!({ "title": "Work" })).await;

    let body = "--XBOUNDARYX\r\n\
        Content-Disposition: form-data; name=\"color\"\r\n\r\n\
        #222222\r\n\
        --XBOUNDARYX\r\n\
        Content-Disposition: form-data; name=\"backgroundColor\"\r\n\r\n\
        #111111\r\n\
        --XBOUNDARYX--\r\n";
    let request = Request::builder()
        .method(Method::PATCH)
        .uri(format!("/api/boards/{}", board["id"].as_str().unwrap()))
        .header(header::AUTHORIZATION, auth_header(&user.token))
        .header(
            header::CONTENT_TYPE,
            "multipart/form-data; boundary=XBOUNDARYX",
        )
        .body(Body::from(body))
        .unwrap();

    let (status, updated) = app.send(request).await;
    assert_eq!(status, StatusCode::OK, "{updated}");
    assert_eq!(updated["backgroundColor"], "#111111");
}
