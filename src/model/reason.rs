//! Priority reasons attached to votes.

use std::fmt;
use std::str::FromStr;

use crate::error::loot::LootError;

/// Why a user wants an item.
///
/// The reason is the primary ranking key of a draw: a mainspec vote beats any offspec vote,
/// which beats any greed vote, regardless of win counts or dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriorityReason {
    /// Upgrade for the character's main role.
    MainSpec,
    /// Upgrade for a secondary role.
    OffSpec,
    /// Anything else.
    Greed,
}

impl PriorityReason {
    /// All reasons, highest priority first.
    pub const ALL: [PriorityReason; 3] = [Self::MainSpec, Self::OffSpec, Self::Greed];

    /// Ranking weight, higher ranks first.
    pub fn weight(self) -> u8 {
        match self {
            Self::MainSpec => 3,
            Self::OffSpec => 2,
            Self::Greed => 1,
        }
    }

    /// Key stored in the `reason` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MainSpec => "mainspec",
            Self::OffSpec => "offspec",
            Self::Greed => "greed",
        }
    }
}

impl fmt::Display for PriorityReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses user input or a stored column value.
///
/// Accepts the stored keys plus the common short forms players type (`ms`, `os`, `main`,
/// `off`, `main-spec`).
impl FromStr for PriorityReason {
    type Err = LootError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "mainspec" | "main" | "ms" => Ok(Self::MainSpec),
            "offspec" | "off" | "os" => Ok(Self::OffSpec),
            "greed" => Ok(Self::Greed),
            _ => Err(LootError::InvalidReason(s.to_string())),
        }
    }
}
