//! Authentication API integration tests
//!
//! Tests for registration, login, the profile endpoints and bearer-token
//! handling on protected routes.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;

use taskboard::backend::auth::TokenService;
use taskboard::shared::Identity;

use crate::common::{create_test_user, create_unique_test_user, login, TestApp, TEST_SECRET};

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::new();

    let (status, body) = app
        .request(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({
                "name": "Ann",
                "email": "Ann@Example.com",
                "password": "password123"
            })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User created");
    assert_eq!(body["user"]["email"], "ann@example.com");
    assert_eq!(body["user"]["name"], "Ann");
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::new();
    create_test_user(&app, "Ann", "ann@example.com", "password123").await;

    let response = app
        .request(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({
                "name": "Other",
                "email": "ANN@example.com",
                "password": "password456"
            })),
        )
        .await;

    crate::assert_api_error!(response, StatusCode::BAD_REQUEST, "Email already exists");
}

#[tokio::test]
async fn test_register_validation() {
    let app = TestApp::new();
    let cases = [
        (json!({ "email": "a@b.co", "password": "password123" }), "Missing fields"),
        (
            json!({ "name": "A", "email": "not-an-email", "password": "password123" }),
            "Invalid email format",
        ),
        (
            json!({ "name": "A", "email": "a@b.co", "password": "short" }),
            "Password must be at least 8 characters",
        ),
    ];

    for (body, message) in cases {
        let response = app
            .request(Method::POST, "/api/auth/register", None, Some(body))
            .await;
        crate::assert_api_error!(response, StatusCode::BAD_REQUEST, message);
    }
}

#[tokio::test]
async fn test_login_success_issues_verifiable_token() {
    let app = TestApp::new();
    let user = create_test_user(&app, "Ann", "ann@example.com", "password123").await;

    let claims = app.state.tokens.verify(&user.token).expect("valid token");
    assert_eq!(claims.id, user.id);
    assert_eq!(claims.email, "ann@example.com");
    assert_eq!(claims.name, "Ann");
    assert_eq!(claims.exp - claims.iat, 7 * 24 * 60 * 60);
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let app = TestApp::new();
    create_test_user(&app, "Ann", "ann@example.com", "password123").await;

    for (email, password) in [
        ("ann@example.com", "wrong_password"),
        ("nobody@example.com", "password123"),
    ] {
        let response = app
            .request(
                Method::POST,
                "/api/auth/login",
                None,
                Some(json!({ "email": email, "password": password })),
            )
            .await;
        crate::assert_api_error!(response, StatusCode::UNAUTHORIZED, "Invalid credentials");
    }
}

#[tokio::test]
async fn test_login_is_case_insensitive_on_email() {
    let app = TestApp::new();
    create_test_user(&app, "Ann", "ann@example.com", "password123").await;

    let token = login(&app, "ANN@EXAMPLE.COM", "password123").await;
    assert!(!token.is_empty());
}

#[tokio::test]
async fn test_protected_route_requires_token() {
    let app = TestApp::new();

    let response = app.request(Method::GET, "/api/boards", None, None).await;
    crate::assert_api_error!(response, StatusCode::UNAUTHORIZED, "Unauthorized");

    let request = Request::builder()
        .uri("/api/boards")
        .header(header::AUTHORIZATION, "Basic abc")
        .body(Body::empty())
        .unwrap();
    let (status, _) = app.send(request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_invalid_and_expired_tokens_rejected() {
    let app = TestApp::new();
    let user = create_unique_test_user(&app).await;
    let identity = Identity {
        id: user.id,
        email: user.email.clone(),
        name: "Test User".to_string(),
    };

    let foreign = TokenService::new("some-other-secret", Duration::days(7))
        .issue(&identity)
        .unwrap();
    let response = app.get("/api/boards", &foreign).await;
    crate::assert_api_error!(response, StatusCode::UNAUTHORIZED, "Invalid token");

    let expired = TokenService::new(TEST_SECRET, Duration::days(7))
        .issue_at(&identity, Utc::now() - Duration::days(8))
        .unwrap();
    let response = app.get("/api/boards", &expired).await;
    crate::assert_api_error!(response, StatusCode::UNAUTHORIZED, "Token expired");

    let response = app.get("/api/boards", "garbage").await;
    crate::assert_api_error!(response, StatusCode::UNAUTHORIZED, "Invalid token");
}

#[tokio::test]
async fn test_get_me() {
    let app = TestApp::new();
    let user = create_test_user(&app, "Ann", "ann@example.com", "password123").await;

    let (status, body) = app.get("/api/auth/me", &user.token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["id"], user.id.to_string());
    assert_eq!(body["user"]["name"], "Ann");
}

#[tokio::test]
async fn test_update_me_name_and_password() {
    let app = TestApp::new();
    let user = create_test_user(&app, "Ann", "ann@example.com", "password123").await;

    let (status, body) = app
        .patch("/api/auth/me", &user.token, json!({ "name": "Annie" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["name"], "Annie");

    let response = app
        .patch("/api/auth/me", &user.token, json!({ "newPassword": "newpassword1" }))
        .await;
    crate::assert_api_error!(response, StatusCode::BAD_REQUEST, "Current password is required");

    let response = app
        .patch(
            "/api/auth/me",
            &user.token,
            json!({ "currentPassword": "wrong_password", "newPassword": "newpassword1" }),
        )
        .await;
    crate::assert_api_error!(response, StatusCode::BAD_REQUEST, "Current password is incorrect");

    let (status, _) = app
        .patch(
            "/api/auth/me",
            &user.token,
            json!({ "currentPassword": "password123", "newPassword": "newpassword1" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let token = login(&app, "ann@example.com", "newpassword1").await;
    assert!(!token.is_empty());
}

#[tokio::test]
async fn test_routes_served_with_and_without_api_prefix() {
    let app = TestApp::new();
    let user = create_unique_test_user(&app).await;

    let (with_prefix, _) = app.get("/api/boards", &user.token).await;
    let (without_prefix, _) = app.get("/boards", &user.token).await;
    assert_eq!(with_prefix, StatusCode::OK);
    assert_eq!(without_prefix, StatusCode::OK);

    let (status, body) = app.request(Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let response = app.get("/api/nowhere", &user.token).await;
    crate::assert_api_error!(response, StatusCode::NOT_FOUND, "Not found");
}
