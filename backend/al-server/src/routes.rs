use crate::state::AppState;
use crate::{api, health};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/linkedin/connect",
            post(api::connect::connect::connect_linkedin),
        )
        .route(
            "/api/accounts/{email}",
            get(api::accounts::accounts::list_accounts),
        )
        .route("/api/health", get(health::health_check))
        // Add shared state
        .with_state(state)
        // CORS middleware (form client may be served from another origin)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
