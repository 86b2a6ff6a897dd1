use crate::dto::request::{EditImageRequest, GenerateMockupRequest};
use crate::dto::response::{EditImageResponse, GenerateMockupResponse, HealthResponse};
use crate::service::mockup;
use crate::utils::error::MockupError;
use crate::ServiceState;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

type AppResult<T> = Result<T, MockupError>;

pub async fn generate_mockup(
    State(state): State<Arc<ServiceState>>,
    payload: Result<Json<GenerateMockupRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(req) = payload?;
    info!(
        "📥 Generate mockup request: style {:?}, clothing type {:?}",
        req.style, req.clothing_type
    );
    let request = req.into_generation_request()?;

    let images = mockup::generate_mockup(state.model.as_ref(), &request).await?;

    Ok(Json(GenerateMockupResponse { images }))
}

pub async fn edit_image(
    State(state): State<Arc<ServiceState>>,
    payload: Result<Json<EditImageRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(req) = payload?;
    info!("📥 Edit image request");
    let request = req.into_edit_request()?;

    let image = mockup::edit_image(state.model.as_ref(), &request).await?;

    Ok(Json(EditImageResponse { image }))
}

pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
