use sea_orm_migration::prelude::*;

use crate::guard::{create_table_guarded, drop_table_logged};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One row per safety-relevant action logged inside a school zone
        let table = Table::create()
            .table(HntbSchoolZone::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(HntbSchoolZone::ActionId)
                    .string_len(32)
                    .not_null()
                    .primary_key(),
            )
            .col(
                ColumnDef::new(HntbSchoolZone::UserId)
                    .string_len(256)
                    .not_null(),
            )
            .col(
                ColumnDef::new(HntbSchoolZone::EventName)
                    .string_len(32)
                    .not_null(),
            )
            .col(ColumnDef::new(HntbSchoolZone::EventLat).double().not_null())
            .col(ColumnDef::new(HntbSchoolZone::EventLng).double().not_null())
            .col(
                ColumnDef::new(HntbSchoolZone::LoggedTime)
                    .timestamp()
                    .not_null(),
            )
            .col(
                ColumnDef::new(HntbSchoolZone::CreatedAt)
                    .timestamp()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .col(
                ColumnDef::new(HntbSchoolZone::UpdatedAt)
                    .timestamp()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .to_owned();

        let id_index = Index::create()
            .name("idx_hntb_school_zone_id_unique")
            .table(HntbSchoolZone::Table)
            .col(HntbSchoolZone::ActionId)
            .unique()
            .to_owned();

        create_table_guarded(manager, TABLE_NAME, table, vec![id_index]).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> { drop_table_logged(manager, TABLE_NAME).await }
}

pub const TABLE_NAME: &str = "hntb_school_zone";

#[derive(DeriveIden)]
pub enum HntbSchoolZone {
    Table,
    ActionId,
    UserId,
    EventName,
    EventLat,
    EventLng,
    LoggedTime,
    CreatedAt,
    UpdatedAt,
}
