//! Cart recording service.
//!
//! Validates a whole cart batch up front, then persists one purchase row per
//! unit of quantity through a single transactional bulk insert. Either every
//! unit in the batch is recorded or none are.

use sqlx::PgPool;
use thiserror::Error;

use mercadito_core::{ProductId, UserId};

use crate::db::RepositoryError;
use crate::db::purchases::PurchaseRepository;
use crate::models::{CartLineItem, PurchaseRecord};

/// Errors that can occur while recording a cart batch.
#[derive(Debug, Error)]
pub enum CartError {
    /// The batch contained no items.
    #[error("cart batch is empty")]
    EmptyBatch,

    /// An item's quantity was zero or negative.
    #[error("invalid quantity {quantity} for product {product_id}: must be at least 1")]
    InvalidQuantity {
        /// The offending product.
        product_id: ProductId,
        /// The rejected quantity.
        quantity: i32,
    },

    /// A line referenced a user or product that does not exist.
    #[error("{0}")]
    UnknownReference(String),

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(RepositoryError),
}

/// Result of a recorded cart batch.
#[derive(Debug)]
pub struct CartReceipt {
    /// Total units persisted (sum of quantities).
    pub total_units: u32,
    /// The created purchase rows, flattened across the batch.
    pub records: Vec<PurchaseRecord>,
}

/// Cart recording service.
pub struct CartService<'a> {
    purchases: PurchaseRepository<'a>,
}

impl<'a> CartService<'a> {
    /// Create a new cart service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            purchases: PurchaseRepository::new(pool),
        }
    }

    /// Record one purchase per unit for every line in the batch.
    ///
    /// # Errors
    ///
    /// Returns `CartError::EmptyBatch` for an empty batch and
    /// `CartError::InvalidQuantity` for a non-positive quantity; in both
    /// cases nothing is written. Returns `CartError::UnknownReference` if a
    /// line names a nonexistent user or product, and
    /// `CartError::Repository` for other store failures; the transaction
    /// rolls back, so nothing is written in those cases either.
    pub async fn record(&self, items: &[CartLineItem]) -> Result<CartReceipt, CartError> {
        let total_units = validate_batch(items)?;
        let units = expand_units(items);

        let records = self
            .purchases
            .record_batch(&units)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(msg) => CartError::UnknownReference(msg),
                other => CartError::Repository(other),
            })?;

        Ok(CartReceipt {
            total_units,
            records,
        })
    }
}

/// Validate the whole batch before any write, returning the total unit count.
fn validate_batch(items: &[CartLineItem]) -> Result<u32, CartError> {
    if items.is_empty() {
        return Err(CartError::EmptyBatch);
    }

    let mut total: u32 = 0;
    for item in items {
        if item.quantity < 1 {
            return Err(CartError::InvalidQuantity {
                product_id: item.id_product,
                quantity: item.quantity,
            });
        }
        total += item.quantity.unsigned_abs();
    }

    Ok(total)
}

/// Flatten the batch into one `(user, product)` pair per unit, in input order.
fn expand_units(items: &[CartLineItem]) -> Vec<(UserId, ProductId)> {
    items
        .iter()
        .flat_map(|item| {
            std::iter::repeat_n(
                (item.id_user, item.id_product),
                item.quantity.unsigned_abs() as usize,
            )
        })
        .collect()
}
