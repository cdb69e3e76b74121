use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LootWin::Table)
                    .if_not_exists()
                    .col(string(LootWin::GuildId))
                    .col(string(LootWin::UserId))
                    .col(integer(LootWin::Wins).default(0))
                    .col(timestamp(LootWin::UpdatedAt))
                    .primary_key(
                        Index::create()
                            .name("pk_loot_win")
                            .col(LootWin::GuildId)
                            .col(LootWin::UserId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LootWin::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LootWin {
    Table,
    GuildId,
    UserId,
    Wins,
    UpdatedAt,
}
