//! # CLI Migration Command
//!
//! Applies, previews or rolls back schema migrations.

use error::{Result, ResultExt};
use migration::{Migrator, MigratorTrait as _};
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::commands::MigrateArgs;

/// Runs database migrations
///
/// Returns the names of the migrations that were applied or rolled back, in
/// execution order. With `--dry-run` nothing is executed and the names are the
/// ones that would run.
///
/// # Errors
///
/// Returns a `Migration` error when a migration fails; the runner stops at the
/// failing migration and leaves earlier ones applied.
pub async fn migrate(db: &DatabaseConnection, args: &MigrateArgs) -> Result<Vec<String>> {
    info!(
        target: "migrate",
        dry_run = %args.dry_run,
        rollback = %args.rollback,
        steps = ?args.steps,
        "Running database migrations..."
    );

    let planned = plan(db, args).await?;

    if args.dry_run {
        for name in &planned {
            info!(target: "migrate", migration = %name, rollback = %args.rollback, "Would run");
        }
        return Ok(planned);
    }

    if args.rollback {
        let steps = args.steps.unwrap_or(1);
        Migrator::down(db, Some(steps))
            .await
            .context("Rolling back migrations")?;
        info!(target: "migrate", reverted = planned.len(), "Rollback completed successfully");
    }
    else {
        Migrator::up(db, args.steps)
            .await
            .context("Applying migrations")?;
        info!(target: "migrate", applied = planned.len(), "Migrations completed successfully");
    }

    Ok(planned)
}

async fn plan(db: &DatabaseConnection, args: &MigrateArgs) -> Result<Vec<String>> {
    if args.rollback {
        let steps = args.steps.unwrap_or(1) as usize;
        let applied = Migrator::get_applied_migrations(db)
            .await
            .context("Reading applied migrations")?;
        return Ok(applied
            .iter()
            .rev()
            .take(steps)
            .map(|m| m.name().to_string())
            .collect());
    }

    let pending = Migrator::get_pending_migrations(db)
        .await
        .context("Reading pending migrations")?;
    let steps = args.steps.map_or(pending.len(), |s| s as usize);
    Ok(pending
        .iter()
        .take(steps)
        .map(|m| m.name().to_string())
        .collect())
}
