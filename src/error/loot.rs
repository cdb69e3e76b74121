use thiserror::Error;

/// Loot domain errors.
///
/// Every variant is an expected outcome of user input or ledger state rather than a fault,
/// and maps to a user-actionable reply via `user_message`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LootError {
    /// Submitted priority reason is not one of the recognised categories.
    #[error("Unknown vote reason '{0}'")]
    InvalidReason(String),

    /// Item name normalises to an empty slug.
    #[error("Item name '{0}' does not contain any letters or digits")]
    InvalidItemName(String),

    /// The user already has an active vote on this item.
    #[error("User {user_id} already has an active vote on '{slug}'")]
    DuplicateVote { user_id: u64, slug: String },

    /// Draw or re-roll attempted on an item without active votes.
    #[error("No active votes on '{0}'")]
    NoCandidates(String),

    /// First-time draw attempted on an item that already has a winner.
    #[error("'{0}' has already been rolled")]
    AlreadyRolled(String),

    /// Re-roll attempted after the configured re-roll window elapsed.
    #[error("Re-roll window for '{0}' has elapsed")]
    RerollWindowElapsed(String),

    /// Another roll changed the item between ranking and recording the winner.
    #[error("'{0}' was rolled concurrently")]
    ConcurrentRoll(String),

    /// Referenced item or user has no matching record.
    #[error("{0}")]
    NotFound(String),

    /// Moderation gate rejected a mutating operation.
    #[error("User {0} is not allowed to moderate loot")]
    Unauthorized(u64),
}

impl LootError {
    /// Reply text for the invoking user.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidReason(reason) => format!(
                "'{}' is not a valid reason. Use mainspec, offspec or greed.",
                reason
            ),
            Self::InvalidItemName(name) => format!("'{}' is not a valid item name.", name),
            Self::DuplicateVote { slug, .. } => format!(
                "You already voted for '{}'. Withdraw that vote first.",
                slug
            ),
            Self::NoCandidates(slug) => format!("Nobody has an active vote on '{}'.", slug),
            Self::AlreadyRolled(slug) => {
                format!("'{}' has already been rolled. Use reroll instead.", slug)
            }
            Self::RerollWindowElapsed(slug) => {
                format!("'{}' was rolled too long ago to be re-rolled.", slug)
            }
            Self::ConcurrentRoll(slug) => {
                format!("'{}' was just rolled by someone else, try again.", slug)
            }
            Self::NotFound(msg) => msg.clone(),
            Self::Unauthorized(_) => "You don't have permission to do that.".to_string(),
        }
    }
}
