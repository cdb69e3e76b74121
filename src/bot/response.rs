//! Reply texts for `/loot` commands.

use crate::model::{
    draw::{DrawResult, RerollResult},
    item::ClearOutcome,
    vote::{ActiveVote, SubmitVoteOutcome, UserVote, WithdrawOutcome},
    win::WinRecord,
};

use crate::bot::command::token::CorrelationToken;

/// Select-menu picker attached to a reply.
#[derive(Debug, Clone, PartialEq)]
pub struct Picker {
    pub token: CorrelationToken,
    /// `(label, value)` pairs.
    pub options: Vec<(String, String)>,
}

/// What a command replies with.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub content: String,
    /// Only the invoking user sees the reply.
    pub ephemeral: bool,
    pub picker: Option<Picker>,
}

impl Reply {
    pub fn public(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ephemeral: false,
            picker: None,
        }
    }

    pub fn private(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ephemeral: true,
            picker: None,
        }
    }
}

fn mention(user_id: u64) -> String {
    format!("<@{}>", user_id)
}

pub fn vote_accepted(outcome: &SubmitVoteOutcome) -> String {
    format!(
        "Vote recorded for **{}** ({}).",
        outcome.item.display_name, outcome.reason
    )
}

pub fn withdrawn(item: &str, outcome: &WithdrawOutcome) -> String {
    if outcome.removed {
        format!("Your vote for **{}** was withdrawn.", item)
    } else {
        format!("You have no active vote for **{}**.", item)
    }
}

/// Picker listing the user's active votes, at most 25 as Discord allows.
pub fn withdraw_picker(token: CorrelationToken, votes: &[UserVote]) -> Picker {
    Picker {
        token,
        options: votes
            .iter()
            .take(25)
            .map(|vote| {
                (
                    format!("{} ({})", vote.display_name, vote.reason),
                    vote.item_slug.clone(),
                )
            })
            .collect(),
    }
}

pub fn active_votes(item: &str, votes: &[ActiveVote]) -> String {
    if votes.is_empty() {
        return format!("Nobody has an active vote on **{}**.", item);
    }

    let lines: Vec<String> = votes
        .iter()
        .map(|vote| {
            format!(
                "- {} {} <t:{}:R>",
                mention(vote.user_id),
                vote.reason,
                vote.created_at.timestamp()
            )
        })
        .collect();

    format!("Active votes on **{}**:\n{}", item, lines.join("\n"))
}

fn ranking_lines(result: &DrawResult) -> String {
    result
        .ranking
        .iter()
        .enumerate()
        .map(|(i, c)| {
            format!(
                "{}. {} {} wins:{} roll:{}",
                i + 1,
                mention(c.user_id),
                c.reason,
                c.wins,
                c.roll
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn draw_result(result: &DrawResult) -> String {
    format!(
        "**{}** goes to {}!\n{}",
        result.display_name,
        mention(result.winner_id),
        ranking_lines(result)
    )
}

pub fn reroll_result(result: &RerollResult) -> String {
    let headline = match (result.winner_changed, result.previous_winner_id) {
        (true, Some(previous)) => format!(
            "**{}** re-rolled: {} replaces {}.",
            result.draw.display_name,
            mention(result.draw.winner_id),
            mention(previous)
        ),
        (true, None) => format!(
            "**{}** re-rolled: {} wins.",
            result.draw.display_name,
            mention(result.draw.winner_id)
        ),
        (false, _) => format!(
            "**{}** re-rolled: {} keeps it.",
            result.draw.display_name,
            mention(result.draw.winner_id)
        ),
    };

    format!("{}\n{}", headline, ranking_lines(&result.draw))
}

pub fn batch_result(results: &[DrawResult]) -> String {
    if results.is_empty() {
        return "There are no open items with active votes.".to_string();
    }

    let lines: Vec<String> = results
        .iter()
        .map(|r| format!("- **{}** → {}", r.display_name, mention(r.winner_id)))
        .collect();

    format!("Rolled {} items:\n{}", results.len(), lines.join("\n"))
}

pub fn wins(user_id: u64, wins: u32) -> String {
    format!("{} has {} win{}.", mention(user_id), wins, if wins == 1 { "" } else { "s" })
}

pub fn wins_set(record: &WinRecord) -> String {
    format!("{} now has {} wins.", mention(record.user_id), record.wins)
}

pub fn leaderboard(records: &[WinRecord]) -> String {
    if records.is_empty() {
        return "Nobody has won anything yet.".to_string();
    }

    let lines: Vec<String> = records
        .iter()
        .enumerate()
        .map(|(i, r)| format!("{}. {} {}", i + 1, mention(r.user_id), r.wins))
        .collect();

    format!("**Leaderboard**\n{}", lines.join("\n"))
}

pub fn cleared(outcome: &ClearOutcome) -> String {
    format!(
        "Cleared {} votes and {} items. Win counts were kept.",
        outcome.votes_deleted, outcome.items_deleted
    )
}

pub fn wins_reset(deleted: u64) -> String {
    format!("Reset win counts of {} members.", deleted)
}
