//! Category route handlers.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::db::CategoryRepository;
use crate::error::Result;
use crate::models::Category;
use crate::state::AppState;

/// Response carrying all categories.
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<Category>,
}

/// List all categories.
///
/// GET /categories
///
/// # Errors
///
/// Returns 500 for a store failure.
pub async fn list(State(state): State<AppState>) -> Result<Json<CategoriesResponse>> {
    let categories = CategoryRepository::new(state.pool()).list().await?;

    Ok(Json(CategoriesResponse { categories }))
}
