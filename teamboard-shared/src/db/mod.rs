/// Database layer for Teamboard
///
/// This module provides PostgreSQL connection pooling and migrations for the
/// backend that implements the remote store contract. Models live in the
/// `models` module at crate root level.
///
/// # Modules
///
/// - `pool`: connection pool management with a startup health check
/// - `migrations`: migration runner over the embedded `migrations/` directory
///
/// # Example
///
/// ```no_run
/// use teamboard_shared::db::pool::{create_pool, DatabaseConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = DatabaseConfig {
///         url: std::env::var("DATABASE_URL")?,
///         ..Default::default()
///     };
///
///     let pool = create_pool(config).await?;
///     Ok(())
/// }
/// ```

pub mod migrations;
pub mod pool;
