//! Connection pool configuration and schema bootstrap.

use std::time::Duration;

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::{info, warn};

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub connection_timeout: Duration,
    pub idle_timeout: Option<Duration>,
    pub max_lifetime: Option<Duration>,
}

impl DatabaseConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            ..Self::default()
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            database_url: "postgresql://localhost:5432/products".to_string(),
            max_connections: 10,
            connection_timeout: Duration::from_secs(30),
            idle_timeout: Some(Duration::from_secs(600)), // 10 minutes
            max_lifetime: Some(Duration::from_secs(1800)), // 30 minutes
        }
    }
}

/// Open a connection pool with the given configuration.
pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<PgPool> {
    info!(
        "Connecting to database: {}",
        mask_database_url(&config.database_url)
    );

    let mut pool_options = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.connection_timeout);

    if let Some(idle_timeout) = config.idle_timeout {
        pool_options = pool_options.idle_timeout(idle_timeout);
    }

    if let Some(max_lifetime) = config.max_lifetime {
        pool_options = pool_options.max_lifetime(max_lifetime);
    }

    let pool = pool_options
        .connect(&config.database_url)
        .await
        .map_err(|e| {
            warn!("Failed to connect to database: {}", e);
            e
        })
        .context("Failed to connect to products database")?;

    info!("Database connection pool created successfully");
    Ok(pool)
}

const CREATE_PRODUCTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id          BIGSERIAL PRIMARY KEY,
    name        VARCHAR(100) NOT NULL
                CHECK (char_length(name) BETWEEN 3 AND 100 AND btrim(name) <> ''),
    description VARCHAR(500),
    price       NUMERIC NOT NULL CHECK (price >= 0.01),
    stock       INTEGER NOT NULL CHECK (stock >= 0),
    category    VARCHAR(32) NOT NULL
                CHECK (category IN ('ELECTRONICS', 'CLOTHING', 'FOOD', 'HOME', 'BOOKS', 'SPORTS', 'TOYS'))
)
"#;

const CREATE_CATEGORY_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS products_category_idx ON products (category)";

/// Create the `products` table and its category index when missing.
///
/// The `CHECK` constraints mirror the field rules, so storage refuses rows
/// that validation would have rejected.
pub async fn ensure_schema(pool: &PgPool) -> anyhow::Result<()> {
    info!("Ensuring products schema");
    sqlx::query(CREATE_PRODUCTS_TABLE)
        .execute(pool)
        .await
        .context("Failed to create products table")?;
    sqlx::query(CREATE_CATEGORY_INDEX)
        .execute(pool)
        .await
        .context("Failed to create products category index")?;
    Ok(())
}

/// Mask sensitive information in database URL for logging
pub fn mask_database_url(url: &str) -> String {
    if let Ok(parsed) = url::Url::parse(url) {
        let mut masked = parsed.clone();
        if parsed.password().is_some() {
            let _ = masked.set_password(Some("***"));
        }
        masked.to_string()
    } else {
        let chars: Vec<char> = url.chars().collect();
        if chars.len() > 20 {
            let head: String = chars[..10].iter().collect();
            let tail: String = chars[chars.len() - 10..].iter().collect();
            format!("{head}***{tail}")
        } else {
            "***".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use products_core::Category;

    #[test]
    fn masks_password() {
        let masked = mask_database_url("postgresql://app:s3cret@db:5432/products");
        assert!(!masked.contains("s3cret"));
        assert!(masked.contains("***"));
        assert!(masked.contains("db:5432/products"));
    }

    #[test]
    fn leaves_passwordless_url_alone() {
        let masked = mask_database_url("postgresql://localhost:5432/products");
        assert_eq!(masked, "postgresql://localhost:5432/products");
    }

    #[test]
    fn masks_unparseable_input() {
        assert_eq!(mask_database_url("not a url"), "***");
        assert_eq!(
            mask_database_url("definitely not a parseable url"),
            "definitely***seable url"
        );
    }

    #[test]
    fn schema_check_lists_every_category() {
        for category in Category::ALL {
            assert!(CREATE_PRODUCTS_TABLE.contains(&format!("'{}'", category.as_str())));
        }
    }

    #[test]
    fn default_pool_settings() {
        let config = DatabaseConfig::new("postgresql://example/db");
        assert_eq!(config.database_url, "postgresql://example/db");
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.connection_timeout, Duration::from_secs(30));
    }
}
