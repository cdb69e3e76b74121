use crate::{
    config::LootPolicy,
    error::{loot::LootError, AppError},
    model::{reason::PriorityReason, vote::SubmitVoteParam, window::VoteWindow},
    service::{
        allocation::AllocationService, registry::ItemRegistryService, vote::VoteService,
        win::WinLedgerService,
    },
};
use chrono::{Duration, Utc};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};


fn vote_param(user_id: u64, item_name: &str, reason: &str) -> SubmitVoteParam {
    SubmitVoteParam {
        guild_id: 1,
        user_id,
        item_name: item_name.to_string(),
        reason: reason.to_string(),
    }
}
