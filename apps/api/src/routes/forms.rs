//! Form-encoded endpoints kept for the existing browser UI.
//!
//! These speak the older wire shape: fields `packSize` / `itemsOrdered`,
//! responses `{"message", "packs"}`, and plain-text error bodies. Duplicate
//! adds and unknown removals are reported in the message with a 200 status.

use axum::{extract::State, http::StatusCode, Form, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::catalog::CatalogError;
use crate::fulfillment::{FulfillmentError, PackLine};
use crate::state::AppState;

type FormResult = Result<Json<FormResponse>, (StatusCode, String)>;

#[derive(Debug, Deserialize)]
pub struct PackSizeForm {
    #[serde(rename = "packSize", default)]
    pub pack_size: String,
}

#[derive(Debug, Deserialize)]
pub struct CalculateForm {
    #[serde(rename = "itemsOrdered", default)]
    pub items_ordered: String,
}

#[derive(Debug, Serialize)]
pub struct FormResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packs: Option<Vec<PackLine>>,
}

impl FormResponse {
    fn with_message(message: &str) -> Json<Self> {
        Json(Self {
            message: message.to_string(),
            packs: None,
        })
    }
}

fn bad_request(message: &str) -> (StatusCode, String) {
    (StatusCode::BAD_REQUEST, message.to_string())
}

fn save_failed(err: &CatalogError) -> (StatusCode, String) {
    warn!("Error saving config: {err}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Error saving config".to_string(),
    )
}

/// POST /add-pack-size
pub async fn handle_add_pack_size_form(
    State(state): State<AppState>,
    Form(form): Form<PackSizeForm>,
) -> FormResult {
    let size: i64 = form
        .pack_size
        .trim()
        .parse()
        .map_err(|_| bad_request("Invalid pack size"))?;

    match state.catalog.add(size).await {
        Ok(_) => Ok(FormResponse::with_message("Pack size added successfully")),
        Err(CatalogError::AlreadyExists(_)) => Ok(FormResponse::with_message("Pack size already exists")),
        Err(CatalogError::InvalidSize(_)) => Err(bad_request("Invalid pack size")),
        Err(e) => Err(save_failed(&e)),
    }
}

/// POST /remove-pack-size
pub async fn handle_remove_pack_size_form(
    State(state): State<AppState>,
    Form(form): Form<PackSizeForm>,
) -> FormResult {
    let size: i64 = form
        .pack_size
        .trim()
        .parse()
        .map_err(|_| bad_request("Invalid pack size"))?;

    // A value outside the catalog's range cannot be present in it.
    let Ok(size) = u32::try_from(size) else {
        return Ok(FormResponse::with_message("Pack size not found"));
    };

    match state.catalog.remove(size).await {
        Ok(_) => Ok(FormResponse::with_message("Pack size removed successfully")),
        Err(CatalogError::NotFound(_)) => Ok(FormResponse::with_message("Pack size not found")),
        Err(e) => Err(save_failed(&e)),
    }
}

/// POST /calculate-packs
pub async fn handle_calculate_packs_form(
    State(state): State<AppState>,
    Form(form): Form<CalculateForm>,
) -> FormResult {
    let raw = form.items_ordered.trim();
    if raw.is_empty() {
        return Err(bad_request("Invalid number of items"));
    }
    let items_ordered: i64 = raw
        .parse()
        .map_err(|_| bad_request("Invalid number of items"))?;

    info!("Calculating packs for {items_ordered} items (form)");
    let sizes = state.catalog.snapshot().await;
    let plan = state
        .calculator
        .compute_plan(&sizes, items_ordered)
        .map_err(|e| match e {
            FulfillmentError::InvalidOrder(_) => bad_request("Invalid number of items"),
            FulfillmentError::Configuration(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
        })?;

    let packs = (!plan.is_empty()).then(|| plan.into_lines());
    Ok(Json(FormResponse {
        message: "Calculation successful".to_string(),
        packs,
    }))
}
