//! Typed `/loot` requests.

use std::collections::HashMap;

use crate::error::AppError;

/// Default number of rows shown by the leaderboard.
pub const DEFAULT_LEADERBOARD_LIMIT: u64 = 10;
/// Largest leaderboard Discord can show in one message.
pub const MAX_LEADERBOARD_LIMIT: u64 = 25;

/// A single option value of a subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    String(String),
    Integer(i64),
    User(u64),
}

/// Subcommand name and option values of a `/loot` invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandArgs {
    pub subcommand: String,
    pub values: HashMap<String, ArgValue>,
}

impl CommandArgs {
    pub fn new(subcommand: impl Into<String>) -> Self {
        Self {
            subcommand: subcommand.into(),
            values: HashMap::new(),
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: ArgValue) -> Self {
        self.values.insert(name.into(), value);
        self
    }

    fn string(&self, name: &str) -> Option<String> {
        match self.values.get(name) {
            Some(ArgValue::String(value)) => Some(value.clone()),
            _ => None,
        }
    }

    fn required_string(&self, name: &str) -> Result<String, AppError> {
        self.string(name)
            .ok_or_else(|| AppError::BadRequest(format!("Missing option '{}'.", name)))
    }

    fn integer(&self, name: &str) -> Option<i64> {
        match self.values.get(name) {
            Some(ArgValue::Integer(value)) => Some(*value),
            _ => None,
        }
    }

    fn user(&self, name: &str) -> Option<u64> {
        match self.values.get(name) {
            Some(ArgValue::User(id)) => Some(*id),
            _ => None,
        }
    }
}

/// A parsed `/loot` subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LootCommand {
    Vote { item: String, reason: String },
    /// Without an item the user is shown a picker of their active votes.
    Withdraw { item: Option<String> },
    Votes { item: String },
    Roll { item: String },
    RollAll,
    Reroll { item: String },
    Wins { user_id: Option<u64> },
    SetWins { user_id: u64, wins: i64 },
    Leaderboard { limit: u64 },
    Clear,
    ResetWins,
}

impl LootCommand {
    /// Parses the typed command from flattened interaction options.
    ///
    /// # Returns
    /// - `Ok(LootCommand)` - Recognised subcommand with all required options
    /// - `Err(AppError::BadRequest)` - Unknown subcommand or missing option
    pub fn parse(args: &CommandArgs) -> Result<Self, AppError> {
        let command = match args.subcommand.as_str() {
            "vote" => Self::Vote {
                item: args.required_string("item")?,
                reason: args.required_string("reason")?,
            },
            "withdraw" => Self::Withdraw {
                item: args.string("item"),
            },
            "votes" => Self::Votes {
                item: args.required_string("item")?,
            },
            "roll" => Self::Roll {
                item: args.required_string("item")?,
            },
            "rollall" => Self::RollAll,
            "reroll" => Self::Reroll {
                item: args.required_string("item")?,
            },
            "wins" => Self::Wins {
                user_id: args.user("user"),
            },
            "setwins" => Self::SetWins {
                user_id: args
                    .user("user")
                    .ok_or_else(|| AppError::BadRequest("Missing option 'user'.".to_string()))?,
                wins: args
                    .integer("wins")
                    .ok_or_else(|| AppError::BadRequest("Missing option 'wins'.".to_string()))?,
            },
            "leaderboard" => Self::Leaderboard {
                limit: args
                    .integer("limit")
                    .map(|limit| limit.clamp(1, MAX_LEADERBOARD_LIMIT as i64) as u64)
                    .unwrap_or(DEFAULT_LEADERBOARD_LIMIT),
            },
            "clear" => Self::Clear,
            "resetwins" => Self::ResetWins,
            other => {
                return Err(AppError::BadRequest(format!(
                    "Unknown command '{}'.",
                    other
                )))
            }
        };

        Ok(command)
    }

    /// Whether the command changes allocation state and needs a moderator.
    pub fn is_moderated(&self) -> bool {
        matches!(
            self,
            Self::Roll { .. }
                | Self::RollAll
                | Self::Reroll { .. }
                | Self::SetWins { .. }
                | Self::Clear
                | Self::ResetWins
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_vote() {
        let args = CommandArgs::new("vote")
            .with("item", ArgValue::String("Sword".to_string()))
            .with("reason", ArgValue::String("mainspec".to_string()));

        assert_eq!(
            LootCommand::parse(&args).unwrap(),
            LootCommand::Vote {
                item: "Sword".to_string(),
                reason: "mainspec".to_string()
            }
        );
    }

    #[test]
    fn vote_requires_reason() {
        let args = CommandArgs::new("vote").with("item", ArgValue::String("Sword".to_string()));

        assert!(matches!(
            LootCommand::parse(&args),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn withdraw_item_is_optional() {
        assert_eq!(
            LootCommand::parse(&CommandArgs::new("withdraw")).unwrap(),
            LootCommand::Withdraw { item: None }
        );
    }

    #[test]
    fn parses_setwins() {
        let args = CommandArgs::new("setwins")
            .with("user", ArgValue::User(100))
            .with("wins", ArgValue::Integer(-3));

        assert_eq!(
            LootCommand::parse(&args).unwrap(),
            LootCommand::SetWins {
                user_id: 100,
                wins: -3
            }
        );
    }

    #[test]
    fn clamps_leaderboard_limit() {
        let args = CommandArgs::new("leaderboard").with("limit", ArgValue::Integer(500));

        assert_eq!(
            LootCommand::parse(&args).unwrap(),
            LootCommand::Leaderboard {
                limit: MAX_LEADERBOARD_LIMIT
            }
        );
        assert_eq!(
            LootCommand::parse(&CommandArgs::new("leaderboard")).unwrap(),
            LootCommand::Leaderboard {
                limit: DEFAULT_LEADERBOARD_LIMIT
            }
        );
    }

    #[test]
    fn rejects_unknown_subcommand() {
        assert!(matches!(
            LootCommand::parse(&CommandArgs::new("steal")),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn only_allocation_changes_are_moderated() {
        assert!(LootCommand::RollAll.is_moderated());
        assert!(LootCommand::Clear.is_moderated());
        assert!(LootCommand::SetWins {
            user_id: 1,
            wins: 1
        }
        .is_moderated());
        assert!(!LootCommand::Withdraw { item: None }.is_moderated());
        assert!(!LootCommand::Wins { user_id: None }.is_moderated());
    }
}
