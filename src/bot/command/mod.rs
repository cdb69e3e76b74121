//! Slash command definitions and typed requests.
//!
//! Interaction payloads are flattened into [`request::CommandArgs`] once at the handler
//! boundary and then parsed into a [`request::LootCommand`], so nothing past this module
//! reads raw option bags.

pub mod definition;
pub mod request;
pub mod token;
