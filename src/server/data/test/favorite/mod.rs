use crate::server::{
    data::favorite::FavoriteRepository,
    model::favorite::{FavoriteParam, FavoriteTarget},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_user_and_target;
mod get_by_user;
