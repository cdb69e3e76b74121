//! Domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! ledger entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary, which is where stored Discord ids are parsed back
//! into `u64` and stored enum strings into their typed form.

pub mod draw;
pub mod item;
pub mod moderation;
pub mod reason;
pub mod vote;
pub mod win;
pub mod window;
