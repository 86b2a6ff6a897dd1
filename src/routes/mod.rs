pub mod mockup;
use std::sync::Arc;

use crate::ServiceState;
use axum::{extract::DefaultBodyLimit, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, TraceLayer};

/// Mockup routes are served both at the root and under `/api`, the prefix
/// hosting rewrites may preserve.
pub fn create_router(state: Arc<ServiceState>) -> Router {
    let api = mockup::add_routers(Router::new());
    let router = mockup::add_routers(Router::new()).nest("/api", api);
    let router = mockup::add_health_router(router);
    let router = router.layer(DefaultBodyLimit::max(state.config.server.get_body_limit()));
    router
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}
