//! Discord bot integration for loot voting and allocation.
//!
//! This module wires the loot ledger to Discord through a single `/loot` slash command with
//! one subcommand per operation. The bot is initialized during startup and runs until the
//! process receives a shutdown signal.
//!
//! # Gateway Intents
//!
//! The bot only requires the `GUILDS` intent. Interactions arrive regardless of intents and
//! carry the invoking member's roles and permissions, which is all the moderation gate
//! needs. The guild cache filled through `GUILDS` supplies the owner check.

pub mod command;
pub mod handler;
pub mod response;
pub mod start;
