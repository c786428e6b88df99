/// Configuration management for the synchronization layer
///
/// Loads configuration from environment variables (with `.env` support for
/// development) and produces the typed config the PostgreSQL backend needs.
///
/// # Environment Variables
///
/// - `DATABASE_URL`: PostgreSQL connection string (required)
/// - `DATABASE_MAX_CONNECTIONS`: pool size (default: 10)
/// - `DATABASE_MIN_CONNECTIONS`: idle connections kept warm (default: 2)
/// - `DATABASE_CONNECT_TIMEOUT_SECONDS`: pool acquire timeout (default: 30)
/// - `RUST_LOG`: log filter (read by the embedding host's subscriber)
///
/// # Example
///
/// ```no_run
/// use teamboard_sync::config::Config;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// println!("Connecting to {}", config.database.url);
/// # Ok(())
/// # }
/// ```

use std::env;
use teamboard_shared::db::pool::DatabaseConfig;

/// Complete configuration for the synchronization layer
#[derive(Debug, Clone)]
pub struct Config {
    /// Database configuration for the PostgreSQL backend
    pub database: DatabaseConfig,
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is missing or a numeric variable
    /// fails to parse.
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        let url = env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u32>()?;

        let min_connections = env::var("DATABASE_MIN_CONNECTIONS")
            .unwrap_or_else(|_| "2".to_string())
            .parse::<u32>()?;

        let connect_timeout_seconds = env::var("DATABASE_CONNECT_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<u64>()?;

        Ok(Self {
            database: DatabaseConfig {
                url,
                max_connections,
                min_connections,
                connect_timeout_seconds,
                ..Default::default()
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_database_url_is_an_error() {
        env::remove_var("DATABASE_URL");
        let result = Config::from_env();
        assert!(result.is_err());
    }
}
