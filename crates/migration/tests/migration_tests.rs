//! # Migration Tests
//!
//! Apply / revert behaviour of every migration against in-memory SQLite.

mod common;

use common::{column_count, create_trip_tables, memory_db, schema_snapshot};
use migration::{
    guard::{self, AdditiveColumn, SchemaChange},
    m20240212_000001_create_tow_and_go_table as tow_and_go,
    m20240212_000002_create_target_users_table as target_users,
    m20240319_000001_create_school_zone_table as school_zone,
    m20240502_000001_add_county_columns as county,
    Alias,
    ColumnDef,
    Index,
    MigrationTrait,
    Migrator,
    MigratorTrait,
    SchemaManager,
    Table,
};
use sea_orm::ConnectionTrait;

const EVENT_TABLES: [&str; 3] = [
    tow_and_go::TABLE_NAME,
    target_users::TABLE_NAME,
    school_zone::TABLE_NAME,
];

#[tokio::test]
async fn test_migrator_up_creates_all_tables() {
    let db = memory_db().await;
    Migrator::up(&db, None).await.unwrap();

    let manager = SchemaManager::new(&db);
    for table in EVENT_TABLES {
        assert!(manager.has_table(table).await.unwrap(), "{} missing", table);
    }
    assert!(manager
        .has_column(tow_and_go::TABLE_NAME, "event_county")
        .await
        .unwrap());
    assert!(manager
        .has_column(school_zone::TABLE_NAME, "event_county")
        .await
        .unwrap());
    assert!(!manager
        .has_column(target_users::TABLE_NAME, "event_county")
        .await
        .unwrap());
}

#[tokio::test]
async fn test_pending_migrations_drain_after_up() {
    let db = memory_db().await;
    assert_eq!(Migrator::get_pending_migrations(&db).await.unwrap().len(), 4);

    Migrator::up(&db, None).await.unwrap();
    assert!(Migrator::get_pending_migrations(&db).await.unwrap().is_empty());
    assert_eq!(Migrator::get_applied_migrations(&db).await.unwrap().len(), 4);

    // Runner-level second application is a no-op
    Migrator::up(&db, None).await.unwrap();
    assert_eq!(Migrator::get_applied_migrations(&db).await.unwrap().len(), 4);
}

#[tokio::test]
async fn test_table_creation_applied_twice_is_harmless() {
    let db = memory_db().await;
    let manager = SchemaManager::new(&db);

    tow_and_go::Migration.up(&manager).await.unwrap();
    let first = schema_snapshot(&db).await;

    tow_and_go::Migration.up(&manager).await.unwrap();
    let second = schema_snapshot(&db).await;

    assert_eq!(first, second);
    assert!(first
        .iter()
        .any(|(name, _)| name == "idx_hntb_tow_and_go_id_unique"));
}

#[tokio::test]
async fn test_fresh_databases_get_identical_schema() {
    let left = memory_db().await;
    let right = memory_db().await;

    Migrator::up(&left, None).await.unwrap();
    Migrator::up(&right, None).await.unwrap();

    let snapshot = schema_snapshot(&left).await;
    assert!(!snapshot.is_empty());
    assert_eq!(snapshot, schema_snapshot(&right).await);
}

#[tokio::test]
async fn test_county_columns_added_exactly_once() {
    let db = memory_db().await;
    create_trip_tables(&db).await;
    Migrator::up(&db, None).await.unwrap();

    // Apply the county migration again outside the runner
    let manager = SchemaManager::new(&db);
    county::Migration.up(&manager).await.unwrap();

    for target in &county::COUNTY_COLUMNS {
        assert_eq!(
            column_count(&db, target.table, target.column).await,
            1,
            "{}.{}",
            target.table,
            target.column
        );
    }
}

#[tokio::test]
async fn test_county_migration_skips_missing_trip_tables() {
    let db = memory_db().await;
    Migrator::up(&db, None).await.unwrap();

    let manager = SchemaManager::new(&db);
    assert!(!manager.has_table("hntb_trips").await.unwrap());

    let trips = &county::COUNTY_COLUMNS[2];
    assert_eq!(
        guard::add_column_if_absent(&manager, trips).await.unwrap(),
        SchemaChange::TableMissing
    );
    assert_eq!(
        guard::drop_column_if_present(&manager, trips).await.unwrap(),
        SchemaChange::TableMissing
    );
}

#[tokio::test]
async fn test_revert_county_columns_restores_tables() {
    let db = memory_db().await;
    create_trip_tables(&db).await;
    Migrator::up(&db, None).await.unwrap();

    Migrator::down(&db, Some(1)).await.unwrap();

    let manager = SchemaManager::new(&db);
    for target in &county::COUNTY_COLUMNS {
        assert!(manager.has_table(target.table).await.unwrap());
        assert_eq!(column_count(&db, target.table, target.column).await, 0);
    }
    // Pre-existing columns are untouched
    assert_eq!(column_count(&db, "hntb_trips", "origin_lng").await, 1);

    // Reverting again finds nothing to drop
    assert_eq!(
        guard::drop_column_if_present(&manager, &county::COUNTY_COLUMNS[0])
            .await
            .unwrap(),
        SchemaChange::AlreadyInPlace
    );
}

#[tokio::test]
async fn test_full_revert_leaves_no_tables() {
    let db = memory_db().await;
    create_trip_tables(&db).await;
    Migrator::up(&db, None).await.unwrap();

    Migrator::down(&db, None).await.unwrap();

    let manager = SchemaManager::new(&db);
    for table in EVENT_TABLES {
        assert!(!manager.has_table(table).await.unwrap(), "{} still present", table);
    }
    // The ingestion-owned tables survive, minus their county columns
    assert!(manager.has_table("hntb_trips").await.unwrap());
    assert_eq!(column_count(&db, "hntb_trips", "origin_county").await, 0);
    assert_eq!(Migrator::get_pending_migrations(&db).await.unwrap().len(), 4);
}

#[tokio::test]
async fn test_blocked_county_revert_keeps_migration_applied() {
    let db = memory_db().await;
    Migrator::up(&db, None).await.unwrap();

    // SQLite refuses to drop an indexed column
    db.execute_unprepared("CREATE INDEX idx_hntb_school_zone_county ON hntb_school_zone(event_county)")
        .await
        .unwrap();

    assert!(Migrator::down(&db, Some(1)).await.is_err());

    assert_eq!(Migrator::get_applied_migrations(&db).await.unwrap().len(), 4);
    assert!(Migrator::get_pending_migrations(&db).await.unwrap().is_empty());
    assert_eq!(column_count(&db, school_zone::TABLE_NAME, "event_county").await, 1);
    assert_eq!(column_count(&db, tow_and_go::TABLE_NAME, "event_county").await, 1);
}

#[tokio::test]
async fn test_failed_index_drops_partially_created_table() {
    let db = memory_db().await;
    let manager = SchemaManager::new(&db);

    let table = Table::create()
        .table(Alias::new("hntb_scratch"))
        .col(
            ColumnDef::new(Alias::new("scratch_id"))
                .integer()
                .not_null()
                .primary_key(),
        )
        .to_owned();
    let broken_index = Index::create()
        .name("idx_hntb_scratch_missing")
        .table(Alias::new("hntb_scratch"))
        .col(Alias::new("no_such_column"))
        .to_owned();

    let result = guard::create_table_guarded(&manager, "hntb_scratch", table, vec![broken_index]).await;

    assert!(result.is_err());
    assert!(!manager.has_table("hntb_scratch").await.unwrap());
}

#[tokio::test]
async fn test_existing_table_is_never_dropped_by_guard() {
    let db = memory_db().await;
    let manager = SchemaManager::new(&db);
    school_zone::Migration.up(&manager).await.unwrap();

    let broken_index = Index::create()
        .name("idx_hntb_school_zone_missing")
        .table(Alias::new(school_zone::TABLE_NAME))
        .col(Alias::new("no_such_column"))
        .to_owned();
    let again = Table::create()
        .table(Alias::new(school_zone::TABLE_NAME))
        .if_not_exists()
        .col(ColumnDef::new(Alias::new("action_id")).string_len(32).not_null())
        .to_owned();

    let change = guard::create_table_guarded(&manager, school_zone::TABLE_NAME, again, vec![broken_index])
        .await
        .unwrap();

    assert_eq!(change, SchemaChange::AlreadyInPlace);
    assert!(manager.has_table(school_zone::TABLE_NAME).await.unwrap());
}

#[tokio::test]
async fn test_add_column_guard_reports_outcomes() {
    let db = memory_db().await;
    create_trip_tables(&db).await;
    let manager = SchemaManager::new(&db);

    let target = AdditiveColumn {
        table:  "hntb_trip_requests",
        after:  "origin_lng",
        column: "destination_county",
        length: 64,
    };

    assert_eq!(
        guard::add_column_if_absent(&manager, &target).await.unwrap(),
        SchemaChange::Applied
    );
    assert_eq!(
        guard::add_column_if_absent(&manager, &target).await.unwrap(),
        SchemaChange::AlreadyInPlace
    );
    assert_eq!(
        guard::drop_column_if_present(&manager, &target).await.unwrap(),
        SchemaChange::Applied
    );
    assert_eq!(column_count(&db, "hntb_trip_requests", "destination_county").await, 0);
}
