use crate::{data::vote::LootVoteRepository, model::reason::PriorityReason};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete_latest_active;
mod insert_if_no_active;
mod list_active;
