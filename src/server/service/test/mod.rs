use crate::server::{
    data::user::UserRepository,
    error::{upload::UploadError, AppError},
    model::user::{CreateUserOutcome, RenameUserOutcome, RenameUserParam, USER_NAME_MAX},
    service::{auth::AuthService, upload::UploadService, user::UserService},
};
use test_utils::{builder::TestBuilder, factory};
