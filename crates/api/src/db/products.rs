//! Product repository: catalog reads, filtered search, and creation.
//!
//! The search path composes one read query from optional criteria. A category
//! filter is resolved through the join table first and applied as an id-set
//! restriction; price bounds and the case-insensitive name match are appended
//! as independent AND conditions.

use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

use mercadito_core::{CategoryId, Price, ProductId, Rating};

use super::RepositoryError;
use crate::models::{NewProduct, Product, ProductFilters};

/// Base select: all product columns plus the aggregated category names.
const PRODUCT_SELECT: &str = "\
SELECT p.id, p.name, p.description, p.image, p.price, p.rating, \
COALESCE(ARRAY_AGG(c.name ORDER BY c.name) FILTER (WHERE c.name IS NOT NULL), '{}') AS categories \
FROM products p \
LEFT JOIN product_categories pc ON pc.product_id = p.id \
LEFT JOIN categories c ON c.id = pc.category_id";

const PRODUCT_GROUP: &str = " GROUP BY p.id ORDER BY p.id";

/// Product row without the category aggregation (used by `create`).
#[derive(FromRow)]
struct ProductRow {
    id: ProductId,
    name: String,
    description: Option<String>,
    image: Option<String>,
    price: Price,
    rating: Option<Rating>,
}

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all products with their category names.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(&format!("{PRODUCT_SELECT}{PRODUCT_GROUP}"))
            .fetch_all(self.pool)
            .await?;
        Ok(products)
    }

    /// Search products by the given filters.
    ///
    /// All present criteria combine with logical AND; an absent criterion does
    /// not restrict the result.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn search(&self, filters: &ProductFilters) -> Result<Vec<Product>, RepositoryError> {
        // Resolve a present category filter to its linked product ids before
        // composing the main query. The resolved set is applied even when
        // empty: a category with no linked products matches nothing.
        let category_products = match filters.category_id {
            Some(category_id) => Some(self.product_ids_in_category(category_id).await?),
            None => None,
        };

        let mut query = compose_search_query(category_products, filters);
        let products = query
            .build_query_as::<Product>()
            .fetch_all(self.pool)
            .await?;
        Ok(products)
    }

    /// Create a product and link it to the given categories.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the product name already exists
    /// or a category id is unknown.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, new_product: &NewProduct) -> Result<Product, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, ProductRow>(
            "INSERT INTO products (name, description, image, price, rating) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, name, description, image, price, rating",
        )
        .bind(&new_product.name)
        .bind(&new_product.description)
        .bind(&new_product.image)
        .bind(new_product.price)
        .bind(new_product.rating)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("product name already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        if !new_product.category_ids.is_empty() {
            let mut insert_links =
                QueryBuilder::new("INSERT INTO product_categories (product_id, category_id) ");
            insert_links.push_values(new_product.category_ids.iter(), |mut b, category_id| {
                b.push_bind(row.id).push_bind(*category_id);
            });
            insert_links
                .build()
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    if let sqlx::Error::Database(ref db_err) = e
                        && db_err.is_foreign_key_violation()
                    {
                        return RepositoryError::Conflict("unknown category id".to_owned());
                    }
                    RepositoryError::Database(e)
                })?;
        }

        let categories: Vec<String> = sqlx::query_scalar(
            "SELECT c.name FROM categories c \
             JOIN product_categories pc ON pc.category_id = c.id \
             WHERE pc.product_id = $1 ORDER BY c.name",
        )
        .bind(row.id)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Product {
            id: row.id,
            name: row.name,
            description: row.description,
            image: row.image,
            price: row.price,
            rating: row.rating,
            categories,
        })
    }

    /// Resolve the ids of all products linked to a category.
    async fn product_ids_in_category(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<i32>, RepositoryError> {
        let ids = sqlx::query_scalar::<_, i32>(
            "SELECT product_id FROM product_categories WHERE category_id = $1",
        )
        .bind(category_id)
        .fetch_all(self.pool)
        .await?;
        Ok(ids)
    }
}

/// Compose the filtered search query.
///
/// `category_products` is the resolved id set for a present category filter
/// (`None` when no category filter was given).
fn compose_search_query(
    category_products: Option<Vec<i32>>,
    filters: &ProductFilters,
) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(PRODUCT_SELECT);
    let mut has_where = false;

    if let Some(ids) = category_products {
        push_condition(&mut query, &mut has_where);
        query.push("p.id = ANY(");
        query.push_bind(ids);
        query.push(")");
    }

    if let Some(min_price) = filters.min_price {
        push_condition(&mut query, &mut has_where);
        query.push("p.price >= ");
        query.push_bind(min_price.as_decimal());
    }

    if let Some(max_price) = filters.max_price {
        push_condition(&mut query, &mut has_where);
        query.push("p.price <= ");
        query.push_bind(max_price.as_decimal());
    }

    if let Some(term) = &filters.search {
        push_condition(&mut query, &mut has_where);
        query.push("p.name ILIKE ");
        query.push_bind(format!("%{}%", escape_like(term)));
    }

    query.push(PRODUCT_GROUP);
    query
}

/// Push `WHERE` for the first condition, `AND` for every later one.
fn push_condition(query: &mut QueryBuilder<'_, Postgres>, has_where: &mut bool) {
    if *has_where {
        query.push(" AND ");
    } else {
        query.push(" WHERE ");
        *has_where = true;
    }
}

/// Escape LIKE metacharacters so a search term matches literally.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
