//! Purchase repository.
//!
//! Purchases are insert-only. A cart batch is written as one bulk insert
//! inside a transaction, so a failure anywhere leaves no partial batch
//! behind.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, QueryBuilder};

use mercadito_core::{Price, ProductId, PurchaseId, UserId};

use super::RepositoryError;
use crate::models::{PurchaseHistoryEntry, PurchaseRecord, PurchasedProduct};

/// Flat history row before nesting the product fields.
#[derive(FromRow)]
struct HistoryRow {
    id: PurchaseId,
    created_at: DateTime<Utc>,
    product_id: ProductId,
    product_name: String,
    product_price: Price,
    product_image: Option<String>,
}

/// Repository for purchase database operations.
pub struct PurchaseRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PurchaseRepository<'a> {
    /// Create a new purchase repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Record one purchase row per unit, atomically.
    ///
    /// `units` must be non-empty; callers validate the batch first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if a unit references an unknown
    /// user or product. Returns `RepositoryError::Database` for other
    /// database errors. In both cases nothing is persisted.
    pub async fn record_batch(
        &self,
        units: &[(UserId, ProductId)],
    ) -> Result<Vec<PurchaseRecord>, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let mut insert = QueryBuilder::new("INSERT INTO purchases (user_id, product_id) ");
        insert.push_values(units.iter().copied(), |mut b, (user_id, product_id)| {
            b.push_bind(user_id).push_bind(product_id);
        });
        insert.push(" RETURNING id, user_id, product_id, created_at");

        let records = insert
            .build_query_as::<PurchaseRecord>()
            .fetch_all(&mut *tx)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(ref db_err) = e
                    && db_err.is_foreign_key_violation()
                {
                    return RepositoryError::Conflict(
                        "purchase references an unknown user or product".to_owned(),
                    );
                }
                RepositoryError::Database(e)
            })?;

        tx.commit().await?;

        Ok(records)
    }

    /// List a user's purchases, newest first, with nested product fields.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<PurchaseHistoryEntry>, RepositoryError> {
        let rows = sqlx::query_as::<_, HistoryRow>(
            "SELECT pu.id, pu.created_at, \
                    p.id AS product_id, p.name AS product_name, \
                    p.price AS product_price, p.image AS product_image \
             FROM purchases pu \
             JOIN products p ON p.id = pu.product_id \
             WHERE pu.user_id = $1 \
             ORDER BY pu.created_at DESC, pu.id DESC",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| PurchaseHistoryEntry {
                id: r.id,
                created_at: r.created_at,
                product: PurchasedProduct {
                    id: r.product_id,
                    name: r.product_name,
                    price: r.product_price,
                    image: r.product_image,
                },
            })
            .collect())
    }
}
