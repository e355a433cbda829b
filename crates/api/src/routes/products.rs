//! Product route handlers.

use axum::{
    Json,
    extract::{Query, State},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use mercadito_core::{CategoryId, Price, Rating};

use crate::db::{ProductRepository, RepositoryError};
use crate::error::{AppError, Result};
use crate::models::{NewProduct, Product, ProductFilters};
use crate::state::AppState;

/// Query parameters for product search. All optional; presence of a
/// parameter is what activates its filter.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub category_id: Option<CategoryId>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub search: Option<String>,
}

impl TryFrom<SearchParams> for ProductFilters {
    type Error = AppError;

    fn try_from(params: SearchParams) -> Result<Self> {
        // Price bounds must be non-negative; min <= max is deliberately not
        // enforced (a crossed range just matches nothing).
        let min_price = params
            .min_price
            .map(Price::new)
            .transpose()
            .map_err(|e| AppError::BadRequest(format!("min_price: {e}")))?;
        let max_price = params
            .max_price
            .map(Price::new)
            .transpose()
            .map_err(|e| AppError::BadRequest(format!("max_price: {e}")))?;

        Ok(Self {
            category_id: params.category_id,
            min_price,
            max_price,
            search: params.search,
        })
    }
}

/// Response carrying a list of products.
#[derive(Debug, Serialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
}

/// Search products with optional filters.
///
/// GET /products/search
///
/// # Errors
///
/// Returns 400 for a negative price bound, 500 for a store failure.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ProductsResponse>> {
    let filters: ProductFilters = params.try_into()?;

    let products = ProductRepository::new(state.pool()).search(&filters).await?;

    Ok(Json(ProductsResponse { products }))
}

/// List all products.
///
/// GET /products
///
/// # Errors
///
/// Returns 500 for a store failure.
pub async fn list(State(state): State<AppState>) -> Result<Json<ProductsResponse>> {
    let products = ProductRepository::new(state.pool()).list().await?;

    Ok(Json(ProductsResponse { products }))
}

/// Product creation request body.
#[derive(Debug, Deserialize)]
pub struct AddProductRequest {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub price: Decimal,
    pub rating: Option<f32>,
    /// Categories to associate the product with.
    #[serde(default)]
    pub category_ids: Vec<CategoryId>,
}

/// Product creation response.
#[derive(Debug, Serialize)]
pub struct AddProductResponse {
    pub status: &'static str,
    pub product: Product,
}

/// Create a product.
///
/// POST /addProduct
///
/// # Errors
///
/// Returns 400 for an empty name, an invalid price or rating, a duplicate
/// product name, or an unknown category id.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<AddProductRequest>,
) -> Result<Json<AddProductResponse>> {
    let new_product = validate_new_product(req)?;

    let product = ProductRepository::new(state.pool())
        .create(&new_product)
        .await
        .map_err(|e| match e {
            RepositoryError::Conflict(msg) => AppError::BadRequest(msg),
            other => AppError::Database(other),
        })?;

    tracing::info!(product_id = %product.id, "product created");

    Ok(Json(AddProductResponse {
        status: "ok",
        product,
    }))
}

/// Validate the raw request into a domain payload.
fn validate_new_product(req: AddProductRequest) -> Result<NewProduct> {
    let name = req.name.trim().to_owned();
    if name.is_empty() {
        return Err(AppError::BadRequest("product name cannot be empty".into()));
    }

    let price =
        Price::new(req.price).map_err(|e| AppError::BadRequest(format!("price: {e}")))?;

    let rating = req
        .rating
        .map(Rating::new)
        .transpose()
        .map_err(|e| AppError::BadRequest(format!("rating: {e}")))?;

    Ok(NewProduct {
        name,
        description: req.description,
        image: req.image,
        price,
        rating,
        category_ids: req.category_ids,
    })
}
