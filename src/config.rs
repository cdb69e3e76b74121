use chrono::Duration;

use crate::{
    error::{config::ConfigError, AppError},
    model::{
        draw::DEFAULT_DRAW_MAX,
        moderation::ModerationPolicy,
        window::{VoteWindow, DEFAULT_VOTE_WINDOW_HOURS},
    },
};

/// Longest accepted vote or re-roll window, one hundred years.
pub const MAX_WINDOW_HOURS: i64 = 24 * 365 * 100;

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    /// Roles allowed to moderate loot besides administrators, managers and the owner.
    pub moderator_role_ids: Vec<u64>,
    pub vote_window_hours: i64,
    /// Re-rolls are refused for items rolled longer ago than this. `None` disables the check.
    pub reroll_window_hours: Option<i64>,
    pub draw_max: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            moderator_role_ids: match std::env::var("LOOT_MODERATOR_ROLE_IDS") {
                Ok(value) => parse_id_list("LOOT_MODERATOR_ROLE_IDS", &value)?,
                Err(_) => Vec::new(),
            },
            vote_window_hours: window_hours("VOTE_WINDOW_HOURS", optional("VOTE_WINDOW_HOURS")?)?
                .unwrap_or(DEFAULT_VOTE_WINDOW_HOURS),
            reroll_window_hours: window_hours(
                "REROLL_WINDOW_HOURS",
                optional("REROLL_WINDOW_HOURS")?,
            )?,
            draw_max: optional("DRAW_MAX")?.unwrap_or(DEFAULT_DRAW_MAX),
        })
    }

    /// Builds the runtime loot policy from the configuration.
    pub fn loot_policy(&self) -> LootPolicy {
        LootPolicy {
            vote_window: VoteWindow::hours(self.vote_window_hours),
            reroll_window: self.reroll_window_hours.map(Duration::hours),
            draw_max: self.draw_max.max(1),
            moderation: ModerationPolicy {
                allowed_role_ids: self.moderator_role_ids.clone(),
            },
        }
    }
}

/// Runtime rules shared by the vote ledger, allocation engine and moderation gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LootPolicy {
    pub vote_window: VoteWindow,
    pub reroll_window: Option<Duration>,
    /// Upper bound of the per-candidate roll.
    pub draw_max: u32,
    pub moderation: ModerationPolicy,
}

impl Default for LootPolicy {
    fn default() -> Self {
        Self {
            vote_window: VoteWindow::default(),
            reroll_window: None,
            draw_max: DEFAULT_DRAW_MAX,
            moderation: ModerationPolicy::default(),
        }
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional<T: std::str::FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }),
        Err(_) => Ok(None),
    }
}

/// Rejects windows that are not positive or longer than [`MAX_WINDOW_HOURS`].
fn window_hours(name: &str, hours: Option<i64>) -> Result<Option<i64>, ConfigError> {
    match hours {
        Some(h) if !(1..=MAX_WINDOW_HOURS).contains(&h) => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: h.to_string(),
        }),
        other => Ok(other),
    }
}

fn parse_id_list(name: &str, value: &str) -> Result<Vec<u64>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| {
            id.parse().map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value: value.to_string(),
            })
        })
        .collect()
}
