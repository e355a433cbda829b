//! Product domain types.

use serde::Serialize;
use sqlx::FromRow;

use mercadito_core::{CategoryId, Price, ProductId, Rating};

/// A product, enriched with the names of its categories.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Unique product name.
    pub name: String,
    /// Optional long description.
    pub description: Option<String>,
    /// Optional image reference.
    pub image: Option<String>,
    /// Unit price.
    pub price: Price,
    /// Optional star rating (1-5).
    pub rating: Option<Rating>,
    /// Names of the categories this product belongs to.
    pub categories: Vec<String>,
}

/// A validated product creation payload.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub price: Price,
    pub rating: Option<Rating>,
    /// Categories to associate the product with.
    pub category_ids: Vec<CategoryId>,
}

/// Optional criteria narrowing a product search.
///
/// Each present field independently narrows the result; all present criteria
/// combine with logical AND. Absence means "no restriction". Presence is an
/// explicit `Option`, never value truthiness - a `category_id` of 0 is a real
/// filter that simply matches no rows.
#[derive(Debug, Clone, Default)]
pub struct ProductFilters {
    /// Restrict to products linked to this category.
    pub category_id: Option<CategoryId>,
    /// Restrict to products priced at or above this amount.
    pub min_price: Option<Price>,
    /// Restrict to products priced at or below this amount.
    pub max_price: Option<Price>,
    /// Restrict to products whose name contains this term, case-insensitively.
    pub search: Option<String>,
}
