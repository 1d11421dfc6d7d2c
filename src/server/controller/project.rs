use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
    Form,
};
use tower_sessions::Session;

use crate::{
    model::project::{CreateProjectForm, EditProjectForm},
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::FlashSession},
        model::project::{CreateProjectParam, UpdateProjectParam},
        service::project::ProjectService,
        state::AppState,
    },
};

const PROJECT_NOT_FOUND: &str = "Project not found.";

/// POST /dashboard/create_project
///
/// # Authentication
/// Requires user to be logged in
pub async fn create_project(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CreateProjectForm>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require().await?;
    let flash = FlashSession::new(&session);

    match CreateProjectParam::from_form(&form) {
        Ok(param) => {
            ProjectService::new(&state.db).create(param).await?;
            flash.success("Project created!").await?;
        }
        Err(reason) => flash.error(reason).await?,
    }

    Ok(Redirect::to("/dashboard"))
}

/// POST /dashboard/edit_project
///
/// Replaces every field of the project.
pub async fn edit_project(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<EditProjectForm>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require().await?;
    let flash = FlashSession::new(&session);

    match UpdateProjectParam::from_form(&form) {
        Ok(param) => match ProjectService::new(&state.db).update(param).await? {
            Some(_) => flash.success("Project updated!").await?,
            None => flash.error(PROJECT_NOT_FOUND).await?,
        },
        Err(reason) => flash.error(reason).await?,
    }

    Ok(Redirect::to("/dashboard"))
}

/// GET /dashboard/delete_project/{id}
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require().await?;
    let flash = FlashSession::new(&session);

    if ProjectService::new(&state.db).delete(id).await? {
        flash.success("Project deleted!").await?;
    } else {
        flash.error(PROJECT_NOT_FOUND).await?;
    }

    Ok(Redirect::to("/dashboard"))
}
