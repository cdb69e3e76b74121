pub use sea_orm_migration::prelude::*;

mod m20251230_000001_create_loot_item_table;
mod m20251230_000002_create_loot_vote_table;
mod m20251230_000003_create_loot_win_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251230_000001_create_loot_item_table::Migration),
            Box::new(m20251230_000002_create_loot_vote_table::Migration),
            Box::new(m20251230_000003_create_loot_win_table::Migration),
        ]
    }
}
