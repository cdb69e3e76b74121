//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the bot
//! interaction handlers and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Enforcing ledger rules such as vote uniqueness and roll status
//! - **Orchestration**: Coordinating several repositories inside one transaction
//! - **Domain Models**: Converting entity models into domain models
//! - **Transaction Management**: Draws, re-rolls, withdrawals and clears commit atomically

pub mod allocation;
pub mod moderation;
pub mod registry;
pub mod vote;
pub mod win;

#[cfg(test)]
mod test;
