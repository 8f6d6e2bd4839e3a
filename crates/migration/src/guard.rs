//! # Idempotency Guards
//!
//! Shared building blocks for migrations that must tolerate being applied to a
//! database that already carries (part of) their change.
//!
//! Every helper logs failures under the `migration` target and hands the
//! original [`DbErr`] back to the caller, so the runner aborts the sequence.

use logging::{log_schema_change, log_schema_failure};
use sea_orm::DbBackend;
use sea_orm_migration::prelude::*;

/// Outcome of a guarded schema change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaChange {
    /// The statement was executed.
    Applied,
    /// The database already matched the desired state; nothing was executed.
    AlreadyInPlace,
    /// The target table does not exist; nothing was executed.
    TableMissing,
}

/// A nullable string column appended to an existing table.
///
/// On MySQL the column is placed directly after `after`; other backends
/// append it at the end of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdditiveColumn {
    pub table:  &'static str,
    pub after:  &'static str,
    pub column: &'static str,
    pub length: u32,
}

impl AdditiveColumn {
    /// Builds the column definition for `ALTER TABLE ... ADD COLUMN`.
    fn definition(&self, backend: DbBackend) -> ColumnDef {
        let mut def = ColumnDef::new(Alias::new(self.column));
        def.string_len(self.length).null();
        if backend == DbBackend::MySql {
            def.extra(format!("AFTER `{}`", self.after));
        }
        def
    }
}

/// Creates a table and its indexes unless the table already exists.
///
/// When any statement fails, the table is dropped again if (and only if) this
/// call created it, then the original error is returned.
///
/// # Errors
///
/// Returns the first [`DbErr`] raised by the existence check, the
/// `CREATE TABLE`, or one of the `CREATE INDEX` statements.
pub async fn create_table_guarded(
    manager: &SchemaManager<'_>,
    table: &str,
    statement: TableCreateStatement,
    indexes: Vec<IndexCreateStatement>,
) -> Result<SchemaChange, DbErr> {
    let exists = manager.has_table(table).await.map_err(|err| {
        log_schema_failure!("create_table", table, err);
        err
    })?;
    if exists {
        tracing::info!(target: "migration", table = %table, "Table already exists, skipping creation");
        return Ok(SchemaChange::AlreadyInPlace);
    }

    let result = async {
        manager.create_table(statement).await?;
        for index in indexes {
            manager.create_index(index).await?;
        }
        Ok::<(), DbErr>(())
    }
    .await;

    match result {
        Ok(()) => {
            log_schema_change!("create_table", table);
            Ok(SchemaChange::Applied)
        },
        Err(err) => {
            log_schema_failure!("create_table", table, err);
            let cleanup = manager
                .drop_table(Table::drop().table(Alias::new(table)).if_exists().to_owned())
                .await;
            if let Err(cleanup_err) = cleanup {
                tracing::warn!(
                    target: "migration",
                    table = %table,
                    error = %cleanup_err,
                    "Cleanup of partially created table failed"
                );
            }
            Err(err)
        },
    }
}

/// Drops a table if it exists.
///
/// # Errors
///
/// Returns the [`DbErr`] raised by `DROP TABLE`, after logging it.
pub async fn drop_table_logged(manager: &SchemaManager<'_>, table: &str) -> Result<(), DbErr> {
    manager
        .drop_table(Table::drop().table(Alias::new(table)).if_exists().to_owned())
        .await
        .map_err(|err| {
            log_schema_failure!("drop_table", table, err);
            err
        })?;
    log_schema_change!("drop_table", table);
    Ok(())
}

/// Adds `target` unless the column is already present.
///
/// # Errors
///
/// Returns the [`DbErr`] raised by the existence checks or the `ALTER TABLE`.
pub async fn add_column_if_absent(manager: &SchemaManager<'_>, target: &AdditiveColumn) -> Result<SchemaChange, DbErr> {
    let log_failure = |err: DbErr| {
        log_schema_failure!("add_column", target.table, target.column, err);
        err
    };

    if !manager.has_table(target.table).await.map_err(log_failure)? {
        tracing::warn!(
            target: "migration",
            table = %target.table,
            column = %target.column,
            "Table not found, column not added"
        );
        return Ok(SchemaChange::TableMissing);
    }
    if manager
        .has_column(target.table, target.column)
        .await
        .map_err(log_failure)?
    {
        tracing::info!(
            target: "migration",
            table = %target.table,
            column = %target.column,
            "Column already exists, skipping"
        );
        return Ok(SchemaChange::AlreadyInPlace);
    }

    manager
        .alter_table(
            Table::alter()
                .table(Alias::new(target.table))
                .add_column(target.definition(manager.get_database_backend()))
                .to_owned(),
        )
        .await
        .map_err(log_failure)?;

    log_schema_change!("add_column", target.table, target.column);
    Ok(SchemaChange::Applied)
}

/// Drops `target` if the column is present.
///
/// # Errors
///
/// Returns the [`DbErr`] raised by the existence checks or the `ALTER TABLE`.
pub async fn drop_column_if_present(
    manager: &SchemaManager<'_>,
    target: &AdditiveColumn,
) -> Result<SchemaChange, DbErr> {
    let log_failure = |err: DbErr| {
        log_schema_failure!("drop_column", target.table, target.column, err);
        err
    };

    if !manager.has_table(target.table).await.map_err(log_failure)? {
        return Ok(SchemaChange::TableMissing);
    }
    if !manager
        .has_column(target.table, target.column)
        .await
        .map_err(log_failure)?
    {
        return Ok(SchemaChange::AlreadyInPlace);
    }

    manager
        .alter_table(
            Table::alter()
                .table(Alias::new(target.table))
                .drop_column(Alias::new(target.column))
                .to_owned(),
        )
        .await
        .map_err(log_failure)?;

    log_schema_change!("drop_column", target.table, target.column);
    Ok(SchemaChange::Applied)
}
