//! HTTP surface: routing, JSON binding, and a deterministic mapping from
//! engine failures to status codes. All booking invariants live in the
//! engine; nothing here re-checks them.

mod error;
mod handlers;

pub use error::ApiError;
pub use handlers::{CreateReservationRequest, ListQuery, UpdateReservationRequest};

use std::sync::Arc;
use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::engine::Engine;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Engine>,
}

/// Build the full application router. Shared between the binary and the
/// integration tests so both exercise the same middleware stack.
///
/// Panics on an unparsable CORS origin: misconfiguration should fail at
/// startup, not on the first preflight.
pub fn build_router(state: AppState, cors_origin: &str) -> Router {
    let origin: HeaderValue = cors_origin
        .parse()
        .unwrap_or_else(|e| panic!("invalid CORS origin {cors_origin:?}: {e}"));

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/reservations",
            post(handlers::create).get(handlers::list),
        )
        .route(
            "/reservations/{id}",
            get(handlers::get_by_id)
                .patch(handlers::update)
                .delete(handlers::remove),
        )
        .route("/reservations/{id}/cancel", post(handlers::cancel))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
