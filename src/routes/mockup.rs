use std::sync::Arc;

use crate::controllers::mockup;
use crate::ServiceState;
use axum::routing::{get, post};

pub fn add_routers(router: axum::Router<Arc<ServiceState>>) -> axum::Router<Arc<ServiceState>> {
    router
        .route("/generateMockup", post(mockup::generate_mockup))
        .route("/editImage", post(mockup::edit_image))
}

pub fn add_health_router(
    router: axum::Router<Arc<ServiceState>>,
) -> axum::Router<Arc<ServiceState>> {
    router.route("/health", get(mockup::health))
}
