use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LootItem::Table)
                    .if_not_exists()
                    .col(string(LootItem::GuildId))
                    .col(string(LootItem::Slug))
                    .col(string(LootItem::DisplayName))
                    .col(string(LootItem::Status).default("open"))
                    .col(string_null(LootItem::WinnerId))
                    .col(timestamp_null(LootItem::RolledAt))
                    .col(boolean(LootItem::RolledByModerator).default(false))
                    .col(timestamp(LootItem::CreatedAt))
                    .primary_key(
                        Index::create()
                            .name("pk_loot_item")
                            .col(LootItem::GuildId)
                            .col(LootItem::Slug),
                    )
                    .to_owned(),
            )
            .await?;

        // Open-item lookups for batch rolls
        manager
            .create_index(
                Index::create()
                    .name("idx_loot_item_guild_status")
                    .table(LootItem::Table)
                    .col(LootItem::GuildId)
                    .col(LootItem::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_loot_item_guild_status")
                    .table(LootItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LootItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LootItem {
    Table,
    GuildId,
    Slug,
    DisplayName,
    Status,
    WinnerId,
    RolledAt,
    RolledByModerator,
    CreatedAt,
}
