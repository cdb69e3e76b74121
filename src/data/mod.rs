//! Database repository layer for the loot ledger.
//!
//! This module contains repository structs that handle database operations for each ledger
//! table. Repositories use SeaORM entity models internally and return entity or domain
//! models to the service layer.
//!
//! Repositories are generic over `ConnectionTrait` so services can run them either against
//! the pool or inside a `DatabaseTransaction`. Every invariant that two concurrent requests
//! could break (duplicate votes, win arithmetic, orphan cleanup, recording a roll) is
//! expressed as a single conditional SQL statement rather than a read followed by a write.

pub mod item;
pub mod vote;
pub mod win;

pub use item::LootItemRepository;
pub use vote::LootVoteRepository;
pub use win::LootWinRepository;

#[cfg(test)]
mod test;
