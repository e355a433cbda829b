//! CLI subcommand implementations.

pub mod migrate;
pub mod seed;

/// Resolve the database URL from the environment.
///
/// Tries `MERCADITO_DATABASE_URL` first, then the generic `DATABASE_URL`.
pub(crate) fn database_url() -> Result<String, Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    std::env::var("MERCADITO_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map_err(|_| "MERCADITO_DATABASE_URL not set".into())
}
