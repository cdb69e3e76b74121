//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating loot ledger rows with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let item = factory::create_item(&db, "1", "sword").await?;
//!     let vote = factory::create_vote(&db, "1", "100", "sword").await?;
//!     let win = factory::create_win(&db, "1", "100", 3).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let item = factory::loot_item::LootItemFactory::new(&db, "1", "sword")
//!     .rolled("100")
//!     .build()
//!     .await?;
//!
//! let stale = factory::loot_vote::LootVoteFactory::new(&db, "1", "100", "sword")
//!     .reason("offspec")
//!     .created_at(Utc::now() - Duration::hours(72))
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod loot_item;
pub mod loot_vote;
pub mod loot_win;

pub use loot_item::create_item;
pub use loot_vote::create_vote;
pub use loot_win::create_win;
