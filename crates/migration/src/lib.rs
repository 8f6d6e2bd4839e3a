//! # HNTB Schema Migrations
//!
//! Schema migrations for the transportation research database: event tables,
//! the participant registry and county enrichment columns.

pub use sea_orm_migration::{prelude::*, MigrationStatus};

pub mod db;
pub mod guard;
pub mod migrator;

pub mod m20240212_000001_create_tow_and_go_table;
pub mod m20240212_000002_create_target_users_table;
pub mod m20240319_000001_create_school_zone_table;
pub mod m20240502_000001_add_county_columns;

pub use migrator::Migrator;
