//! MySQL connection pool management.

use std::fmt;
use std::time::Duration;

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

use se_shared::config::DatabaseConfig;

/// Wrapper around the SQLx MySQL pool, constructed from typed configuration
pub struct DatabasePool {
    pool: MySqlPool,
    max_connections: u32,
}

impl DatabasePool {
    /// Create a new connection pool from configuration
    ///
    /// # Arguments
    /// * `config` - Database configuration (URL, pool sizing, timeouts)
    ///
    /// # Returns
    /// * `Ok(DatabasePool)` - pool connected and ready
    /// * `Err(sqlx::Error)` - invalid URL or the server is unreachable
    pub async fn new(config: DatabaseConfig) -> Result<Self, sqlx::Error> {
        tracing::info!(
            max_connections = config.max_connections,
            "Creating database connection pool"
        );

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .idle_timeout(Duration::from_secs(config.idle_timeout))
            .max_lifetime(Duration::from_secs(config.max_lifetime))
            .connect(&config.url)
            .await?;

        Ok(Self {
            pool,
            max_connections: config.max_connections,
        })
    }

    /// Access the underlying SQLx pool for repository construction
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Verify the database is reachable
    pub async fn health_check(&self) -> Result<bool, sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(true)
    }

    /// Current pool usage statistics
    pub fn statistics(&self) -> PoolStatistics {
        PoolStatistics {
            connections: self.pool.size(),
            idle_connections: self.pool.num_idle(),
            max_connections: self.max_connections,
        }
    }
}

/// Snapshot of pool usage
#[derive(Debug, Clone, Copy)]
pub struct PoolStatistics {
    pub connections: u32,
    pub idle_connections: usize,
    pub max_connections: u32,
}

impl fmt::Display for PoolStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} connections ({} idle)",
            self.connections, self.max_connections, self.idle_connections
        )
    }
}
