use sea_orm_migration::prelude::*;

use crate::{
    guard::{add_column_if_absent, drop_column_if_present, AdditiveColumn},
    m20240212_000001_create_tow_and_go_table as tow_and_go,
    m20240319_000001_create_school_zone_table as school_zone,
};

/// County labels derived from each row's coordinates.
///
/// `hntb_trips` and `hntb_trip_requests` belong to the ingestion service;
/// targets whose table does not exist are skipped.
pub const COUNTY_COLUMNS: [AdditiveColumn; 4] = [
    AdditiveColumn {
        table:  tow_and_go::TABLE_NAME,
        after:  "event_lng",
        column: "event_county",
        length: 64,
    },
    AdditiveColumn {
        table:  school_zone::TABLE_NAME,
        after:  "event_lng",
        column: "event_county",
        length: 64,
    },
    AdditiveColumn {
        table:  "hntb_trips",
        after:  "origin_lng",
        column: "origin_county",
        length: 64,
    },
    AdditiveColumn {
        table:  "hntb_trip_requests",
        after:  "origin_lng",
        column: "origin_county",
        length: 64,
    },
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for target in &COUNTY_COLUMNS {
            add_column_if_absent(manager, target).await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for target in COUNTY_COLUMNS.iter().rev() {
            drop_column_if_present(manager, target).await?;
        }
        Ok(())
    }
}
