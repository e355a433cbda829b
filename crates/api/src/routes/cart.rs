//! Cart route handler.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::error::Result;
use crate::models::{CartLineItem, PurchaseRecord};
use crate::services::cart::CartService;
use crate::state::AppState;

/// Cart recording response: a unit-count summary plus the created rows.
#[derive(Debug, Serialize)]
pub struct CartResponse {
    pub status: &'static str,
    pub msg: String,
    pub data: Vec<PurchaseRecord>,
}

/// Record a cart batch, one purchase row per unit of quantity.
///
/// POST /cart
///
/// The body is the batch itself: `[{id_user, id_product, quantity}, ...]`.
///
/// # Errors
///
/// Returns 400 for an empty batch, a non-positive quantity, or a line naming
/// an unknown user or product; 500 for a store failure. Failures persist
/// nothing.
pub async fn record(
    State(state): State<AppState>,
    Json(items): Json<Vec<CartLineItem>>,
) -> Result<Json<CartResponse>> {
    let cart = CartService::new(state.pool());

    let receipt = cart.record(&items).await?;

    tracing::info!(units = receipt.total_units, "cart batch recorded");

    Ok(Json(CartResponse {
        status: "ok",
        msg: format!("{} unidad(es) agregadas al carrito", receipt.total_units),
        data: receipt.records,
    }))
}
