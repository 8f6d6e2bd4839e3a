use sea_orm_migration::prelude::*;

use crate::guard::{create_table_guarded, drop_table_logged};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Participant inclusion registry; only the hashed identifier is stored
        let table = Table::create()
            .table(HntbTargetUsers::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(HntbTargetUsers::TargetUserId)
                    .unsigned()
                    .not_null()
                    .primary_key(),
            )
            .col(
                ColumnDef::new(HntbTargetUsers::HashId)
                    .string_len(256)
                    .not_null(),
            )
            .col(
                ColumnDef::new(HntbTargetUsers::CreatedAt)
                    .timestamp()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .col(
                ColumnDef::new(HntbTargetUsers::UpdatedAt)
                    .timestamp()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .to_owned();

        let id_index = Index::create()
            .name("idx_hntb_target_users_id_unique")
            .table(HntbTargetUsers::Table)
            .col(HntbTargetUsers::TargetUserId)
            .unique()
            .to_owned();

        create_table_guarded(manager, TABLE_NAME, table, vec![id_index]).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> { drop_table_logged(manager, TABLE_NAME).await }
}

pub const TABLE_NAME: &str = "hntb_target_users";

#[derive(DeriveIden)]
pub enum HntbTargetUsers {
    Table,
    TargetUserId,
    HashId,
    CreatedAt,
    UpdatedAt,
}
