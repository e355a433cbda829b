//! Database seed command.
//!
//! Inserts a small sample catalog for local development. Safe to run
//! repeatedly: every insert is `ON CONFLICT DO NOTHING`.

use sqlx::PgPool;
use tracing::info;

use super::database_url;

/// Sample categories.
const CATEGORIES: &[&str] = &["Hogar", "Cocina", "Decoración", "Regalos"];

/// Sample products: name, description, price, rating, category.
const PRODUCTS: &[(&str, &str, &str, f32, &str)] = &[
    (
        "Taza artesanal",
        "Taza de cerámica pintada a mano",
        "14.50",
        4.5,
        "Cocina",
    ),
    (
        "Manta de lana",
        "Manta tejida de lana merino",
        "59.99",
        4.8,
        "Hogar",
    ),
    (
        "Portavelas de vidrio",
        "Portavelas soplado artesanalmente",
        "9.25",
        4.2,
        "Decoración",
    ),
    (
        "Caja regalo sorpresa",
        "Selección de productos de la tienda",
        "35.00",
        3.9,
        "Regalos",
    ),
];

/// Seed the database with the sample catalog.
///
/// # Errors
///
/// Returns an error if the database URL is missing, the connection fails,
/// or an insert fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let database_url = database_url()?;

    info!("Connecting to database...");
    let pool = PgPool::connect(&database_url).await?;

    info!("Seeding categories...");
    for name in CATEGORIES {
        sqlx::query("INSERT INTO categories (name) VALUES ($1) ON CONFLICT (name) DO NOTHING")
            .bind(name)
            .execute(&pool)
            .await?;
    }

    info!("Seeding products...");
    for (name, description, price, rating, category) in PRODUCTS {
        sqlx::query(
            "INSERT INTO products (name, description, price, rating) \
             VALUES ($1, $2, $3::NUMERIC, $4) \
             ON CONFLICT (name) DO NOTHING",
        )
        .bind(name)
        .bind(description)
        .bind(price)
        .bind(rating)
        .execute(&pool)
        .await?;

        sqlx::query(
            "INSERT INTO product_categories (product_id, category_id) \
             SELECT p.id, c.id FROM products p, categories c \
             WHERE p.name = $1 AND c.name = $2 \
             ON CONFLICT DO NOTHING",
        )
        .bind(name)
        .bind(category)
        .execute(&pool)
        .await?;
    }

    info!(
        categories = CATEGORIES.len(),
        products = PRODUCTS.len(),
        "Seed complete!"
    );
    Ok(())
}
