//! Loot vote and allocation bot for Discord guilds.
//!
//! Members vote on dropped items with a priority reason; moderators draw winners, ranking
//! by priority, then by fewest past wins, then by a random roll. Everything is scoped per
//! guild and stored in SQLite through SeaORM.

pub mod bot;
pub mod catalog;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;
