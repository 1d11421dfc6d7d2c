use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::user::{CreateUserForm, EditUserForm},
    server::{
        controller::page_context,
        error::AppError,
        middleware::{auth::AuthGuard, session::FlashSession},
        model::user::{CreateUserOutcome, RenameUserOutcome, RenameUserParam, USER_NAME_MAX},
        service::user::UserService,
        state::AppState,
    },
    view::{page::create_user_page, render},
};

const NAME_TAKEN_MESSAGE: &str = "Username already exists!";

fn name_too_long_message() -> String {
    format!("Username must be at most {} characters!", USER_NAME_MAX)
}

/// Account creation is open to visitors only until the first account exists.
async fn require_account_access(state: &AppState, session: &Session) -> Result<(), AppError> {
    if UserService::new(&state.db).is_first_run().await? {
        return Ok(());
    }

    AuthGuard::new(&state.db, session).require().await?;
    Ok(())
}

/// GET /create_user - Account creation form
///
/// # Authentication
/// Public while no user exists, otherwise requires a logged in user
pub async fn create_user_form(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    require_account_access(&state, &session).await?;
    let context = page_context(&state.db, &session).await?;

    Ok(render(create_user_page(context)))
}

/// POST /create_user - Create an account
///
/// # Returns
/// - `303 See Other` to `/login` with a success flash - Account created
/// - `200 OK` - Form again with an error flash when a field is blank or the name is taken
pub async fn create_user(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CreateUserForm>,
) -> Result<Response, AppError> {
    require_account_access(&state, &session).await?;
    let flash = FlashSession::new(&session);

    match UserService::new(&state.db).create(&form.name, &form.pass).await? {
        CreateUserOutcome::Created(user) => {
            tracing::info!("Created user {} ({})", user.user_name, user.id);
            flash.success("User created!").await?;

            return Ok(Redirect::to("/login").into_response());
        }
        CreateUserOutcome::MissingFields => {
            flash.error("Username and password are required!").await?
        }
        CreateUserOutcome::NameTooLong => flash.error(name_too_long_message()).await?,
        CreateUserOutcome::NameTaken => flash.error(NAME_TAKEN_MESSAGE).await?,
    }

    let context = page_context(&state.db, &session).await?;
    Ok(render(create_user_page(context)).into_response())
}

/// POST /dashboard/edit_user - Rename a user
pub async fn edit_user(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<EditUserForm>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require().await?;
    let flash = FlashSession::new(&session);

    let param = RenameUserParam {
        id: form.user_id,
        user_name: form.user_name,
    };

    match UserService::new(&state.db).rename(param).await? {
        RenameUserOutcome::Renamed(_) => flash.success("User updated!").await?,
        RenameUserOutcome::MissingName => flash.error("Username is required!").await?,
        RenameUserOutcome::NameTooLong => flash.error(name_too_long_message()).await?,
        RenameUserOutcome::NameTaken => flash.error(NAME_TAKEN_MESSAGE).await?,
        RenameUserOutcome::NotFound => {}
    }

    Ok(Redirect::to("/dashboard"))
}

/// GET /dashboard/delete_user/{id}
///
/// Deleting the signed-in account ends that session on its next request.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require().await?;

    if UserService::new(&state.db).delete(id).await? {
        FlashSession::new(&session).success("User deleted!").await?;
    }

    Ok(Redirect::to("/dashboard"))
}
