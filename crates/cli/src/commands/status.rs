//! # CLI Status Command

use error::{Result, ResultExt};
use migration::{MigrationStatus, Migrator, MigratorTrait as _};
use sea_orm::DatabaseConnection;

/// One row of `hntb status`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationRow {
    pub name:    String,
    pub applied: bool,
}

impl std::fmt::Display for MigrationRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = if self.applied { "applied" } else { "pending" };
        write!(f, "{:<8} {}", state, self.name)
    }
}

/// Lists every known migration with whether it has been applied.
///
/// # Errors
///
/// Returns a `Database` error if the migration table cannot be read.
pub async fn status(db: &DatabaseConnection) -> Result<Vec<MigrationRow>> {
    let migrations = Migrator::get_migration_with_status(db)
        .await
        .context("Reading migration status")?;

    let rows: Vec<_> = migrations
        .iter()
        .map(|m| {
            MigrationRow {
                name:    m.name().to_string(),
                applied: matches!(m.status(), MigrationStatus::Applied),
            }
        })
        .collect();

    tracing::info!(
        target: "migrate",
        applied = rows.iter().filter(|r| r.applied).count(),
        pending = rows.iter().filter(|r| !r.applied).count(),
        "Migration status"
    );
    Ok(rows)
}
