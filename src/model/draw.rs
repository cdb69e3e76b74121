//! Domain models for draws and re-rolls.

use crate::model::reason::PriorityReason;

/// Default upper bound of the per-candidate roll.
pub const DEFAULT_DRAW_MAX: u32 = 100;

/// A voter taking part in a draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub user_id: u64,
    pub reason: PriorityReason,
    /// Win count at the time of the draw.
    pub wins: u32,
}

/// A candidate with its roll, in ranking position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedCandidate {
    pub user_id: u64,
    pub reason: PriorityReason,
    pub wins: u32,
    /// Uniform roll in `1..=draw_max`.
    pub roll: u32,
}

/// Outcome of a first-time draw.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawResult {
    pub guild_id: u64,
    pub slug: String,
    pub display_name: String,
    /// Every candidate, best first.
    pub ranking: Vec<RankedCandidate>,
    pub winner_id: u64,
}

impl DrawResult {
    /// The winning entry of the ranking.
    pub fn winner(&self) -> Option<&RankedCandidate> {
        self.ranking.first()
    }
}

/// Outcome of a re-roll.
#[derive(Debug, Clone, PartialEq)]
pub struct RerollResult {
    pub draw: DrawResult,
    /// Winner recorded before the re-roll.
    pub previous_winner_id: Option<u64>,
    /// Whether wins were moved from the previous winner to the new one.
    pub winner_changed: bool,
}
