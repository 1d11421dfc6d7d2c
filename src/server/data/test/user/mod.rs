use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParam, RenameUserParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_credentials_by_name;
mod name_exists;
mod rename;
