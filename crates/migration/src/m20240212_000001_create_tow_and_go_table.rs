use sea_orm_migration::prelude::*;

use crate::guard::{create_table_guarded, drop_table_logged};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One row per emergency roadside assistance request
        let table = Table::create()
            .table(HntbTowAndGo::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(HntbTowAndGo::TowAndGoId)
                    .unsigned()
                    .not_null()
                    .primary_key(),
            )
            .col(
                ColumnDef::new(HntbTowAndGo::UserId)
                    .string_len(256)
                    .not_null(),
            )
            // 1 = success, 0 = failure
            .col(
                ColumnDef::new(HntbTowAndGo::Status)
                    .tiny_integer()
                    .not_null(),
            )
            .col(ColumnDef::new(HntbTowAndGo::EventLat).double().not_null())
            .col(ColumnDef::new(HntbTowAndGo::EventLng).double().not_null())
            .col(
                ColumnDef::new(HntbTowAndGo::RequestTime)
                    .timestamp()
                    .not_null(),
            )
            .col(ColumnDef::new(HntbTowAndGo::ResponseTime).timestamp().null())
            .col(
                ColumnDef::new(HntbTowAndGo::CreatedAt)
                    .timestamp()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .col(
                ColumnDef::new(HntbTowAndGo::UpdatedAt)
                    .timestamp()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .to_owned();

        let id_index = Index::create()
            .name("idx_hntb_tow_and_go_id_unique")
            .table(HntbTowAndGo::Table)
            .col(HntbTowAndGo::TowAndGoId)
            .unique()
            .to_owned();

        create_table_guarded(manager, TABLE_NAME, table, vec![id_index]).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> { drop_table_logged(manager, TABLE_NAME).await }
}

pub const TABLE_NAME: &str = "hntb_tow_and_go";

#[derive(DeriveIden)]
pub enum HntbTowAndGo {
    Table,
    TowAndGoId,
    UserId,
    Status,
    EventLat,
    EventLng,
    RequestTime,
    ResponseTime,
    CreatedAt,
    UpdatedAt,
}
