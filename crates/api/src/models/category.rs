//! Category domain type.

use serde::Serialize;
use sqlx::FromRow;

use mercadito_core::CategoryId;

/// A product category.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Category {
    /// Unique category ID.
    pub id: CategoryId,
    /// Unique category name.
    pub name: String,
}
