use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use tower_sessions::Session;

use crate::server::{
    error::AppError, middleware::auth::AuthGuard, middleware::session::FlashSession,
    service::message::MessageService, state::AppState,
};

/// GET /dashboard/delete_message/{id}
///
/// Unknown ids are ignored.
pub async fn delete_message(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require().await?;

    if MessageService::new(&state.db).delete(id).await? {
        FlashSession::new(&session).success("Message deleted!").await?;
    }

    Ok(Redirect::to("/dashboard"))
}
