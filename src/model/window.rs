//! The active-vote predicate.
//!
//! Every read that feeds ranking, eligibility or listings filters votes through the same
//! `VoteWindow`, so the definition of "active" lives in exactly one place.

use chrono::{DateTime, Duration, Utc};

/// Default validity of a vote.
pub const DEFAULT_VOTE_WINDOW_HOURS: i64 = 48;

/// Rolling validity window for votes.
///
/// A vote is active while `created_at >= now - duration`. Expired votes are never deleted by
/// the window; they simply stop matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteWindow {
    duration: Duration,
}

impl Default for VoteWindow {
    fn default() -> Self {
        Self::hours(DEFAULT_VOTE_WINDOW_HOURS)
    }
}

impl VoteWindow {
    /// Creates a window of the given length.
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    /// Creates a window of `hours` hours.
    pub fn hours(hours: i64) -> Self {
        Self::new(Duration::hours(hours))
    }

    /// Window length.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Oldest creation time still considered active at `now`.
    pub fn cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - self.duration
    }

    /// Whether a vote created at `created_at` is active at `now`.
    pub fn is_active(&self, created_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        created_at >= self.cutoff(now)
    }
}
