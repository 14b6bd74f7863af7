//! Database configuration module

use serde::{Deserialize, Serialize};

use super::env_or;

/// Database configuration for MySQL connections
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Connection acquire timeout in seconds
    pub connect_timeout: u64,

    /// Idle connection timeout in seconds
    pub idle_timeout: u64,

    /// Maximum lifetime of a connection in seconds
    pub max_lifetime: u64,

    /// Slow query threshold in milliseconds
    #[serde(default = "default_slow_query_threshold")]
    pub slow_query_threshold: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::from("mysql://root@localhost:3306/lawvriksh_db"),
            max_connections: 10,
            connect_timeout: 30,
            idle_timeout: 600,
            max_lifetime: 1800,
            slow_query_threshold: default_slow_query_threshold(),
        }
    }
}

impl DatabaseConfig {
    /// Create from environment variables
    ///
    /// `DATABASE_URL` wins; otherwise the URL is assembled from
    /// `DB_HOST`, `DB_USER`, `DB_PASSWORD` and `DB_NAME`.
    pub fn from_env() -> Self {
        let url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
            Self::url_from_parts(
                &std::env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
                &std::env::var("DB_USER").unwrap_or_else(|_| "root".to_string()),
                std::env::var("DB_PASSWORD").ok().as_deref(),
                &std::env::var("DB_NAME").unwrap_or_else(|_| "lawvriksh_db".to_string()),
            )
        });

        Self {
            url,
            max_connections: env_or("DATABASE_MAX_CONNECTIONS", 10),
            connect_timeout: env_or("DATABASE_CONNECT_TIMEOUT", 30),
            ..Default::default()
        }
    }

    /// Build a MySQL URL from its discrete parts
    pub fn url_from_parts(host: &str, user: &str, password: Option<&str>, database: &str) -> String {
        match password {
            Some(password) if !password.is_empty() => {
                format!("mysql://{}:{}@{}/{}", user, password, host, database)
            }
            _ => format!("mysql://{}@{}/{}", user, host, database),
        }
    }

    /// Create a new database configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

fn default_slow_query_threshold() -> u64 {
    1000 // 1 second
}
