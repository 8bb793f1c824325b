//! Route handlers for the web front end.

pub mod auth;
pub mod chat;
pub mod health;
pub mod landing;
pub mod profile;

use axum::middleware;
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::sync;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // HTML pages
        .route("/", get(landing::landing_page))
        .route("/sign-in", get(auth::sign_in_page))
        .route("/sign-up", get(auth::sign_up_page))
        .route("/chat", get(chat::chat_page))
        // htmx fragments
        .route(
            "/chat/:id/messages",
            get(chat::messages_fragment).post(chat::send_message),
        )
        // Health check
        .route("/health", get(health::health))
        // API endpoints
        .route("/api/chat/:id", get(chat::chat_api))
        .route("/api/demos", get(landing::demos_api))
        .route("/api/profile", get(profile::profile_api))
}

/// Build the complete application: routes, profile sync, static files and tracing.
pub fn app(state: AppState, static_dir: &str) -> Router {
    router()
        .layer(middleware::from_fn_with_state(state.clone(), sync::auth_sync))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
