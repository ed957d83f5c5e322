use sqlx::{PgPool, postgres::PgPoolOptions};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError,
    #[error("database.schema_error")]
    SchemaError,
}

/// Configuration for the database connection
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default values
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

/// Creates a PostgreSQL connection pool
pub async fn create_postgres_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.connection_string)
        .await
        .map_err(|_| DatabaseError::ConnectionError)?;

    Ok(pool)
}

/// Creates the two service tables when they do not exist yet.
/// The service bootstraps its own schema on startup; there is no
/// migration tooling.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), DatabaseError> {
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS shopcart (
            id SERIAL PRIMARY KEY,
            customer_id INTEGER NOT NULL
        )"#,
    )
    .execute(pool)
    .await
    .map_err(|_| DatabaseError::SchemaError)?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS cart_item (
            id SERIAL PRIMARY KEY,
            shopcart_id INTEGER NOT NULL REFERENCES shopcart (id),
            item_name VARCHAR(64) NOT NULL,
            sku VARCHAR(16) NOT NULL,
            quantity INTEGER NOT NULL,
            price DOUBLE PRECISION NOT NULL
        )"#,
    )
    .execute(pool)
    .await
    .map_err(|_| DatabaseError::SchemaError)?;

    Ok(())
}
