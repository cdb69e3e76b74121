//! Error types and user-facing error mapping.
//!
//! This module provides the application's error hierarchy. The `AppError` enum serves as the
//! top-level error type that wraps domain-specific errors. Interaction handlers turn an
//! `AppError` into the message shown to the invoking user through `AppError::user_message`,
//! which logs storage and internal failures while keeping the reply generic.

pub mod config;
pub mod internal;
pub mod loot;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError, loot::LootError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most variants use
/// `#[from]` for automatic error conversion so repository and service code can propagate with
/// `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Loot domain rule rejected the operation.
    ///
    /// Delegates to `LootError::user_message()` for the reply text.
    #[error(transparent)]
    LootErr(#[from] LootError),

    /// Database operation error from SeaORM.
    ///
    /// This is the storage failure of the loot ledger. Open transactions are rolled back when
    /// dropped, so no partial mutation is visible after this error.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Item catalog failed to load.
    #[error(transparent)]
    CatalogErr(#[from] serde_json::Error),

    /// Internal issue indicating unexpected behavior.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Invalid request error.
    ///
    /// Raised when an interaction payload cannot be turned into a typed command.
    ///
    /// # Fields
    /// - Message describing what was invalid about the request
    #[error("{0}")]
    BadRequest(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Converts the error into the message shown to the invoking Discord user.
    ///
    /// Domain errors and bad requests are shown as-is. Storage, Discord, catalog and internal
    /// errors are logged with full details and replaced by a generic message to avoid leaking
    /// implementation details.
    ///
    /// # Returns
    /// - `String` - Reply text for the interaction
    pub fn user_message(&self) -> String {
        match self {
            Self::LootErr(err) => err.user_message(),
            Self::BadRequest(msg) => msg.clone(),
            err => {
                tracing::error!("{}", err);
                "Something went wrong, please try again later.".to_string()
            }
        }
    }

    /// Returns the wrapped loot domain error, if any.
    pub fn as_loot(&self) -> Option<&LootError> {
        match self {
            Self::LootErr(err) => Some(err),
            _ => None,
        }
    }
}
