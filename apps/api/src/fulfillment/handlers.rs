//! Axum route handler for order calculation.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::fulfillment::models::PackLine;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CalculateRequest {
    pub items_ordered: i64,
}

#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    pub message: String,
    pub items_ordered: i64,
    pub packs: Vec<PackLine>,
    pub line_count: usize,
    pub total_packs: u64,
    pub shipped_total: u64,
    pub overage: u64,
}

/// POST /api/v1/calculate
///
/// Computes the pack plan for an order against the current catalog snapshot.
pub async fn handle_calculate(
    State(state): State<AppState>,
    Json(req): Json<CalculateRequest>,
) -> Result<Json<CalculateResponse>, AppError> {
    info!("Calculating packs for {} items", req.items_ordered);

    let sizes = state.catalog.snapshot().await;
    let plan = state.calculator.compute_plan(&sizes, req.items_ordered)?;

    // compute_plan rejects negative orders, so the quantity is non-negative here
    let ordered = req.items_ordered.unsigned_abs();
    debug!(
        "Plan for {} items: {} lines, {} shipped",
        req.items_ordered,
        plan.line_count(),
        plan.shipped_total()
    );

    Ok(Json(CalculateResponse {
        message: "Calculation successful".to_string(),
        items_ordered: req.items_ordered,
        line_count: plan.line_count(),
        total_packs: plan.total_packs(),
        shipped_total: plan.shipped_total(),
        overage: plan.overage(ordered),
        packs: plan.into_lines(),
    }))
}
