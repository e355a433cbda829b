//! Purchase domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use mercadito_core::{Price, ProductId, PurchaseId, UserId};

/// One line of a cart checkout request (transient, never persisted as-is).
///
/// Field names match the wire contract.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CartLineItem {
    /// The purchasing user.
    pub id_user: UserId,
    /// The purchased product.
    pub id_product: ProductId,
    /// Number of units; must be at least 1.
    pub quantity: i32,
}

/// One purchased unit.
///
/// Quantity is denormalized: a cart line with quantity N becomes N of these.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PurchaseRecord {
    /// Unique purchase ID.
    pub id: PurchaseId,
    /// The purchasing user.
    pub user_id: UserId,
    /// The purchased product.
    pub product_id: ProductId,
    /// When the unit was recorded.
    pub created_at: DateTime<Utc>,
}

/// A purchase as shown in a user's history, with nested product fields.
#[derive(Debug, Clone, Serialize)]
pub struct PurchaseHistoryEntry {
    /// Unique purchase ID.
    pub id: PurchaseId,
    /// When the unit was recorded.
    pub created_at: DateTime<Utc>,
    /// The purchased product.
    pub product: PurchasedProduct,
}

/// Product fields nested in a purchase history entry.
#[derive(Debug, Clone, Serialize)]
pub struct PurchasedProduct {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: Option<String>,
}
