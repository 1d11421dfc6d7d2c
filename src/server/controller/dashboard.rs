use axum::{extract::State, response::IntoResponse};
use tower_sessions::Session;

use crate::{
    server::{
        controller::page_context,
        error::AppError,
        middleware::auth::AuthGuard,
        service::{message::MessageService, project::ProjectService, user::UserService},
        state::AppState,
    },
    view::{
        page::{dashboard_page, DashboardData},
        render,
    },
};

/// GET /dashboard - Admin overview of users, projects and messages
///
/// # Authentication
/// Requires user to be logged in
pub async fn dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let current_user = AuthGuard::new(&state.db, &session).require().await?;

    let data = DashboardData {
        current_user,
        users: UserService::new(&state.db).get_all().await?,
        projects: ProjectService::new(&state.db).get_all().await?,
        messages: MessageService::new(&state.db).get_all().await?,
    };
    let context = page_context(&state.db, &session).await?;

    Ok(render(dashboard_page(context, data)))
}
