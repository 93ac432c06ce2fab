use std::sync::Arc;

use axum::{
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod models;
pub mod provider;
pub mod routes;
pub mod stats;
pub mod teams;

use provider::StatcastProvider;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn StatcastProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn StatcastProvider>) -> Self {
        Self { provider }
    }
}

pub fn app(state: AppState) -> Router {
    // Every statcast response, errors and preflight included, carries the
    // CORS and content-type headers.
    let statcast: Router<AppState> = Router::new()
        .route(
            "/api/statcast",
            get(routes::statcast::get_team_statcast).options(routes::statcast::preflight),
        )
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        ));

    Router::new()
        // Root and health
        .route("/", get(|| async { "MLB Statcast API - v1.0" }))
        .route("/health", get(routes::health::health_check))

        // Team endpoints
        .route("/api/teams", get(routes::teams::get_teams))

        .merge(statcast)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
