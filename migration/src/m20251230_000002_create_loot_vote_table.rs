use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LootVote::Table)
                    .if_not_exists()
                    .col(pk_auto(LootVote::Id))
                    .col(string(LootVote::GuildId))
                    .col(string(LootVote::UserId))
                    .col(string(LootVote::ItemSlug))
                    .col(string(LootVote::Reason))
                    .col(timestamp(LootVote::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_loot_vote_guild_item")
                    .table(LootVote::Table)
                    .col(LootVote::GuildId)
                    .col(LootVote::ItemSlug)
                    .col(LootVote::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_loot_vote_guild_user")
                    .table(LootVote::Table)
                    .col(LootVote::GuildId)
                    .col(LootVote::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_loot_vote_guild_user")
                    .table(LootVote::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_loot_vote_guild_item")
                    .table(LootVote::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LootVote::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LootVote {
    Table,
    Id,
    GuildId,
    UserId,
    ItemSlug,
    Reason,
    CreatedAt,
}
