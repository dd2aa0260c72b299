pub mod forms;
pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::catalog::handlers as catalog_handlers;
use crate::fulfillment::handlers as fulfillment_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // JSON API
        .route(
            "/api/v1/pack-sizes",
            get(catalog_handlers::handle_list_pack_sizes).post(catalog_handlers::handle_add_pack_size),
        )
        .route(
            "/api/v1/pack-sizes/:size",
            delete(catalog_handlers::handle_remove_pack_size),
        )
        .route(
            "/api/v1/calculate",
            post(fulfillment_handlers::handle_calculate),
        )
        // Form-encoded endpoints used by the browser UI
        .route("/add-pack-size", post(forms::handle_add_pack_size_form))
        .route("/remove-pack-size", post(forms::handle_remove_pack_size_form))
        .route("/calculate-packs", post(forms::handle_calculate_packs_form))
        .with_state(state)
}
