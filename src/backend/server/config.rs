/**
 * Server Configuration
 *
 * This module handles loading of server configuration and the store
 * connection it describes.
 *
 * # Configuration Sources
 *
 * Configuration is read from environment variables (a `.env` file is loaded
 * by the binary first), with defaults suitable for local development:
 *
 * | Variable             | Default                |
 * |----------------------|------------------------|
 * | `PORT`               | `5000`                 |
 * | `DATABASE_URL`       | `sqlite://todoflow.db` |
 * | `BROADCAST_CAPACITY` | `1000`                 |
 *
 * # Error Handling
 *
 * Unparseable values are logged and replaced by their default. A store that
 * cannot be opened or migrated is fatal: the server has nothing to serve
 * without it.
 */

use std::net::SocketAddr;
use std::str::FromStr;

use sqlx::SqlitePool;

use crate::backend::error::BackendError;
use crate::backend::todos::db;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://todoflow.db";
pub const DEFAULT_BROADCAST_CAPACITY: usize = 1000;

/// Server settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub database_url: String,
    /// Capacity of the event channel; always at least 1
    pub broadcast_capacity: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            broadcast_capacity: DEFAULT_BROADCAST_CAPACITY,
        }
    }
}

impl ServerConfig {
    /// Read the configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through `lookup`, one call per variable
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = parse_or_default("PORT", lookup("PORT"), DEFAULT_PORT);

        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let mut broadcast_capacity = parse_or_default(
            "BROADCAST_CAPACITY",
            lookup("BROADCAST_CAPACITY"),
            DEFAULT_BROADCAST_CAPACITY,
        );
        if broadcast_capacity == 0 {
            tracing::warn!("BROADCAST_CAPACITY must be positive, using {}", DEFAULT_BROADCAST_CAPACITY);
            broadcast_capacity = DEFAULT_BROADCAST_CAPACITY;
        }

        Self {
            port,
            database_url,
            broadcast_capacity,
        }
    }

    /// Address the server binds to (all interfaces)
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn parse_or_default<T: FromStr + Copy + std::fmt::Display>(
    name: &str,
    raw: Option<String>,
    default: T,
) -> T {
    match raw {
        None => default,
        Some(value) => match value.trim().parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                tracing::warn!("Invalid {}={:?}, using {}", name, value, default);
                default
            }
        },
    }
}

/// Open the store and bring its schema up to date
///
/// # Errors
///
/// Fails if the database cannot be opened or a migration fails.
pub async fn load_database(database_url: &str) -> Result<SqlitePool, BackendError> {
    tracing::info!("[Store] Connecting to {}", database_url);

    let pool = db::connect(database_url)
        .await
        .map_err(|e| BackendError::store("Failed to connect to database", e))?;

    tracing::info!("[Store] Running database migrations...");
    db::run_migrations(&pool).await?;
    tracing::info!("[Store] Database ready");

    Ok(pool)
}
