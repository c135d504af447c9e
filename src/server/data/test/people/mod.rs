use crate::server::{data::people::PeopleRepository, model::people::CreatePeopleParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_id;
