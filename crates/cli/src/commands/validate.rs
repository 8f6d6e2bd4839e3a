//! # CLI Validate Command
//!
//! Configuration and connectivity checks for the HNTB CLI.

use error::{AppError, Result, ResultExt};
use migration::{db::DatabaseConfig, Migrator, MigratorTrait as _};
use tracing::{info, warn};

/// Outcome of a successful validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    /// Connection string with the password masked
    pub target:  String,
    /// Migrations not yet applied
    pub pending: usize,
}

/// Validates the configuration by connecting and reading migration state.
///
/// # Errors
///
/// Returns a `Validation` error for an unusable configuration and a
/// `Database` error when the server cannot be reached.
pub async fn validate(config: &DatabaseConfig) -> Result<Validation> {
    let target = config.redacted_connection_string();
    info!(target: "validate", database = %target, "Validating configuration...");

    if config.pool_size == 0 {
        return Err(AppError::validation("HNTB_DATABASE_POOL_SIZE must be at least 1"));
    }

    let db = config.connect().await?;
    db.ping().await.context("Pinging database")?;

    let pending = Migrator::get_pending_migrations(&db)
        .await
        .context("Reading pending migrations")?
        .len();
    if pending > 0 {
        warn!(target: "validate", pending, "Database has pending migrations");
    }

    info!(target: "validate", database = %target, pending, "Configuration is valid");
    Ok(Validation {
        target,
        pending,
    })
}
