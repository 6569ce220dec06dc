use axum::{
    extract::Request,
    middleware,
    routing::{get, patch, post},
    Router,
};
use log::{info, warn};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::handlers::{
    generate_handlers::generate_invites,
    invite_handlers::{
        delete_invite, duplicate_invite, get_active_invite, get_invites, save_invite,
        set_active_invite, update_invite,
    },
};
use inviteai_shared::store::{InviteStore, MemoryInviteStore};

/// Creates a router backed by a fresh in-memory store. Each call is one
/// session's store; state is gone when the router is dropped.
pub fn create_router() -> Router {
    info!("Creating router with in-memory store");

    let store = Arc::new(MemoryInviteStore::new());

    let prefix = std::env::var("INVITE_API_PREFIX").unwrap_or_default();
    info!("Using API route prefix: '{}'", prefix);

    create_router_with_store(store, &prefix)
}

/// Creates a router with a given store implementation
pub fn create_router_with_store<S>(store: Arc<S>, prefix: &str) -> Router
where
    S: InviteStore + 'static,
{
    info!("Setting up API routes with prefix: '{}'", prefix);

    // The SPA is served from a different origin during development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Logging middleware to trace all requests
    async fn logging_middleware(
        req: Request,
        next: axum::middleware::Next,
    ) -> impl axum::response::IntoResponse {
        info!(
            "Router received request: method={}, uri={}",
            req.method(),
            req.uri()
        );
        next.run(req).await
    }

    let api_routes = Router::new()
        .route("/invites", get(get_invites).post(save_invite))
        .route("/invites/generate", post(generate_invites))
        .route(
            "/invites/active",
            get(get_active_invite).put(set_active_invite),
        )
        .route(
            "/invites/:id",
            patch(update_invite).delete(delete_invite),
        )
        .route("/invites/:id/duplicate", post(duplicate_invite))
        .with_state(store);

    let router = if prefix.is_empty() {
        api_routes
            .layer(cors)
            .layer(middleware::from_fn(logging_middleware))
    } else {
        Router::new()
            .nest(prefix, api_routes)
            .layer(cors)
            .layer(middleware::from_fn(logging_middleware))
    };

    // Add a fallback handler for 404s
    router.fallback(|req: Request| async move {
        warn!("No route matched for: {} {}", req.method(), req.uri());
        (
            axum::http::StatusCode::NOT_FOUND,
            "The requested resource was not found".to_string(),
        )
    })
}
