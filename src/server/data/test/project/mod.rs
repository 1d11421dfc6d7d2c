use crate::server::{
    data::project::ProjectRepository,
    model::project::{CreateProjectParam, ProjectFields, UpdateProjectParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod update;
