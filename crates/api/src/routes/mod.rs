//! HTTP route handlers for the store API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (database probe)
//!
//! # Auth
//! POST /register               - Create a user
//! POST /login                  - Verify credentials, echo the user
//!
//! # Catalog
//! GET  /products/search        - Filtered product search
//! GET  /products               - List all products
//! POST /addProduct             - Create a product
//! GET  /categories             - List all categories
//!
//! # Purchases
//! POST /cart                   - Record a cart batch (one row per unit)
//! GET  /purchases/{user_id}    - Purchase history for a user
//! ```
//!
//! Request and response wire types live next to their handlers. Every
//! handler returns `Result<_, AppError>`; errors become a JSON
//! `{status: "error", error}` body.

pub mod auth;
pub mod cart;
pub mod categories;
pub mod products;
pub mod purchases;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Auth
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        // Catalog
        .route("/products/search", get(products::search))
        .route("/products", get(products::list))
        .route("/addProduct", post(products::create))
        .route("/categories", get(categories::list))
        // Purchases
        .route("/cart", post(cart::record))
        .route("/purchases/{user_id}", get(purchases::history))
}
