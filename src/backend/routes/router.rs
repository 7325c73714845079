/**
 * Router Configuration
 *
 * Combines every route into a single Axum router.
 *
 * # Layout
 *
 * 1. `GET /health` - liveness probe
 * 2. API routes at the root (`/auth/...`, `/boards/...`, ...)
 * 3. The same API routes under `/api`
 * 4. Fallback - JSON 404
 *
 * Every request is traced through `tower-http`'s `TraceLayer`; CORS is
 * enabled only when an allowed origin is configured.
 */

use axum::{http::HeaderValue, response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::backend::error::ApiError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn not_found() -> ApiError {
    ApiError::not_found("Not found")
}

fn cors_layer(origin: &str) -> Option<CorsLayer> {
    match HeaderValue::from_str(origin) {
        Ok(origin) => Some(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods(Any)
                .allow_headers(Any),
        ),
        Err(e) => {
            tracing::warn!(%origin, error = %e, "ignoring invalid CORS_ORIGIN");
            None
        }
    }
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let api = configure_api_routes(app_state.clone());

    let router = Router::new()
        .route("/health", get(health))
        .merge(api.clone())
        .nest("/api", api)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http());

    let cors = app_state.config.cors_origin.as_deref().and_then(cors_layer);
    let router = if let Some(cors) = cors {
        tracing::info!("CORS enabled");
        router.layer(cors)
    } else {
        router
    };

    router.with_state(app_state)
}
