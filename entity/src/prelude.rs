pub use super::loot_item::Entity as LootItem;
pub use super::loot_vote::Entity as LootVote;
pub use super::loot_win::Entity as LootWin;
