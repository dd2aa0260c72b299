//! Axum route handlers for the pack-size catalog.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PackSizesResponse {
    pub pack_sizes: Vec<u32>,
}

#[derive(Debug, Deserialize)]
pub struct AddPackSizeRequest {
    pub pack_size: i64,
}

#[derive(Debug, Serialize)]
pub struct PackSizeChangeResponse {
    pub message: String,
    pub pack_sizes: Vec<u32>,
}

/// GET /api/v1/pack-sizes
pub async fn handle_list_pack_sizes(State(state): State<AppState>) -> Json<PackSizesResponse> {
    Json(PackSizesResponse {
        pack_sizes: state.catalog.snapshot().await,
    })
}

/// POST /api/v1/pack-sizes
pub async fn handle_add_pack_size(
    State(state): State<AppState>,
    Json(req): Json<AddPackSizeRequest>,
) -> Result<(StatusCode, Json<PackSizeChangeResponse>), AppError> {
    info!("Adding pack size {}", req.pack_size);
    let pack_sizes = state.catalog.add(req.pack_size).await?;
    Ok((
        StatusCode::CREATED,
        Json(PackSizeChangeResponse {
            message: "Pack size added successfully".to_string(),
            pack_sizes,
        }),
    ))
}

/// DELETE /api/v1/pack-sizes/:size
pub async fn handle_remove_pack_size(
    State(state): State<AppState>,
    Path(size): Path<u32>,
) -> Result<Json<PackSizeChangeResponse>, AppError> {
    info!("Removing pack size {size}");
    let pack_sizes = state.catalog.remove(size).await?;
    Ok(Json(PackSizeChangeResponse {
        message: "Pack size removed successfully".to_string(),
        pack_sizes,
    }))
}
