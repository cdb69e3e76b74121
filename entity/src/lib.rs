//! SeaORM entity models for the loot ledger tables.

pub mod prelude;

pub mod loot_item;
pub mod loot_vote;
pub mod loot_win;
