use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::user::LoginForm,
    server::{
        controller::page_context,
        error::AppError,
        middleware::session::{AuthSession, FlashSession},
        service::auth::AuthService,
        state::AppState,
    },
    view::{page::login_page, render},
};

/// GET /login - Login form
pub async fn login_form(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let context = page_context(&state.db, &session).await?;

    Ok(render(login_page(context)))
}

/// POST /login - Verify credentials and sign the session in
///
/// # Returns
/// - `303 See Other` to `/dashboard` - Credentials matched
/// - `200 OK` - Login form again with an error flash
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let user = AuthService::new(&state.db)
        .authenticate(&form.username, &form.password)
        .await?;

    let Some(user) = user else {
        tracing::info!("Failed login attempt for {:?}", form.username);

        FlashSession::new(&session)
            .error("Invalid username or password.")
            .await?;
        let context = page_context(&state.db, &session).await?;

        return Ok(render(login_page(context)).into_response());
    };

    AuthSession::new(&session).login(user.id).await?;
    tracing::info!("User {} logged in", user.user_name);

    Ok(Redirect::to("/dashboard").into_response())
}

/// GET /logout - End the session
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).logout().await?;

    FlashSession::new(&session)
        .success("You have been logged out.")
        .await?;

    Ok(Redirect::to("/login"))
}
