//! # Common Test Utilities
//!
//! In-memory SQLite databases and schema queries shared by the migration tests.

use std::sync::Once;

use migration::{Alias, ColumnDef, Table};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, Statement};

static INIT: Once = Once::new();

/// Initialize test logging (run once per test binary)
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// Opens a fresh in-memory SQLite database.
///
/// The pool is pinned to one connection; every new connection to
/// `sqlite::memory:` would see a different, empty database.
pub async fn memory_db() -> DatabaseConnection {
    init_test_env();
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    Database::connect(options)
        .await
        .expect("Failed to open in-memory database")
}

/// Creates the ingestion-owned trip tables the county migration enriches.
pub async fn create_trip_tables(db: &DatabaseConnection) {
    for table in ["hntb_trips", "hntb_trip_requests"] {
        let statement = Table::create()
            .table(Alias::new(table))
            .col(
                ColumnDef::new(Alias::new("trip_id"))
                    .integer()
                    .not_null()
                    .primary_key(),
            )
            .col(ColumnDef::new(Alias::new("origin_lat")).double().not_null())
            .col(ColumnDef::new(Alias::new("origin_lng")).double().not_null())
            .to_owned();
        db.execute(db.get_database_backend().build(&statement))
            .await
            .expect("Failed to create trip table");
    }
}

/// Number of columns called `column` on `table`.
pub async fn column_count(db: &DatabaseConnection, table: &str, column: &str) -> i64 {
    let row = db
        .query_one(Statement::from_sql_and_values(
            DbBackend::Sqlite,
            "SELECT COUNT(*) AS n FROM pragma_table_info(?) WHERE name = ?",
            [table.into(), column.into()],
        ))
        .await
        .expect("pragma_table_info failed")
        .expect("COUNT(*) returns a row");
    row.try_get::<i64>("", "n").expect("n is an integer")
}

/// `CREATE` statements of every `hntb_` table and index, ordered by name.
pub async fn schema_snapshot(db: &DatabaseConnection) -> Vec<(String, String)> {
    let rows = db
        .query_all(Statement::from_string(
            DbBackend::Sqlite,
            "SELECT name, sql FROM sqlite_master \
             WHERE name LIKE 'hntb_%' OR name LIKE 'idx_hntb_%' ORDER BY name",
        ))
        .await
        .expect("sqlite_master query failed");
    rows.iter()
        .map(|row| {
            (
                row.try_get::<String>("", "name").expect("name"),
                row.try_get::<Option<String>>("", "sql")
                    .expect("sql")
                    .unwrap_or_default(),
            )
        })
        .collect()
}
