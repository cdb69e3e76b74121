use crate::{data::item::LootItemRepository, model::item::RollGuard};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete_if_orphaned;
mod list_open_with_votes;
mod mark_rolled;
mod register_if_missing;
