//! Purchase history route handler.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use mercadito_core::UserId;

use crate::db::{PurchaseRepository, UserRepository};
use crate::error::{AppError, Result};
use crate::models::PurchaseHistoryEntry;
use crate::state::AppState;

/// Response carrying a user's purchase history.
#[derive(Debug, Serialize)]
pub struct PurchasesResponse {
    pub purchases: Vec<PurchaseHistoryEntry>,
}

/// Purchase history for one user, newest first.
///
/// GET /purchases/{user_id}
///
/// A user with no purchases gets an empty list; an unknown user id is a 404.
///
/// # Errors
///
/// Returns 404 for an unknown user, 500 for a store failure.
pub async fn history(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<PurchasesResponse>> {
    let users = UserRepository::new(state.pool());
    if users.get_by_id(user_id).await?.is_none() {
        return Err(AppError::NotFound(format!("user {user_id} not found")));
    }

    let purchases = PurchaseRepository::new(state.pool())
        .list_for_user(user_id)
        .await?;

    Ok(Json(PurchasesResponse { purchases }))
}
