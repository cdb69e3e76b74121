//! Opaque tokens carried in component custom ids.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

const TOKEN_PREFIX: &str = "loot:";

/// Flow a component belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenAction {
    #[serde(rename = "w")]
    Withdraw,
}

/// Identifies which user opened a component and for what.
///
/// Discord echoes the custom id back with every component interaction; the token lets the
/// handler route the interaction and refuse it when someone other than the opener clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrelationToken {
    #[serde(rename = "a")]
    pub action: TokenAction,
    #[serde(rename = "g")]
    pub guild_id: u64,
    #[serde(rename = "u")]
    pub user_id: u64,
}

impl CorrelationToken {
    pub fn withdraw(guild_id: u64, user_id: u64) -> Self {
        Self {
            action: TokenAction::Withdraw,
            guild_id,
            user_id,
        }
    }

    /// Encodes the token as a custom id.
    pub fn encode(&self) -> Result<String, AppError> {
        let json = serde_json::to_vec(self)?;

        Ok(format!("{}{}", TOKEN_PREFIX, URL_SAFE_NO_PAD.encode(json)))
    }

    /// Decodes a custom id produced by [`CorrelationToken::encode`].
    ///
    /// # Returns
    /// - `Ok(CorrelationToken)` - The decoded token
    /// - `Err(AppError::BadRequest)` - Custom id was not produced by this bot
    pub fn decode(custom_id: &str) -> Result<Self, AppError> {
        let invalid = || AppError::BadRequest("This menu is no longer valid.".to_string());

        let encoded = custom_id.strip_prefix(TOKEN_PREFIX).ok_or_else(invalid)?;
        let json = URL_SAFE_NO_PAD.decode(encoded).map_err(|_| invalid())?;

        serde_json::from_slice(&json).map_err(|_| invalid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_custom_id() {
        let token = CorrelationToken::withdraw(123456789012345678, u64::MAX);

        let custom_id = token.encode().unwrap();

        assert!(custom_id.starts_with("loot:"));
        assert!(custom_id.len() <= 100);
        assert_eq!(CorrelationToken::decode(&custom_id).unwrap(), token);
    }

    #[test]
    fn rejects_foreign_custom_id() {
        assert!(matches!(
            CorrelationToken::decode("other:abc"),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn rejects_corrupted_payload() {
        assert!(matches!(
            CorrelationToken::decode("loot:!!!"),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            CorrelationToken::decode(&format!("loot:{}", URL_SAFE_NO_PAD.encode("{}"))),
            Err(AppError::BadRequest(_))
        ));
    }
}
