use crate::data::win::{LootWinRepository, MAX_WINS};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod adjust;
mod leaderboard;
mod set;
