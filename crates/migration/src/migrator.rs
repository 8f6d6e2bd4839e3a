//! # Database Migrator
//!
//! This module implements the Sea-ORM migrator trait for the research database.
//! The migrator lists every migration in timestamp order and records applied
//! migrations in the `seaql_migrations` table.

use sea_orm_migration::prelude::*;

use crate::{
    m20240212_000001_create_tow_and_go_table,
    m20240212_000002_create_target_users_table,
    m20240319_000001_create_school_zone_table,
    m20240502_000001_add_county_columns,
};

/// The main migrator that coordinates all migration operations
///
/// # Example
///
/// ```rust,ignore
/// use migration::{Migrator, MigratorTrait};
///
/// Migrator::up(&db, None).await?;
/// ```
#[derive(Debug)]
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    /// Migrations are executed in the order they appear in this list.
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240212_000001_create_tow_and_go_table::Migration),
            Box::new(m20240212_000002_create_target_users_table::Migration),
            Box::new(m20240319_000001_create_school_zone_table::Migration),
            // Depends on the two event tables above
            Box::new(m20240502_000001_add_county_columns::Migration),
        ]
    }
}
