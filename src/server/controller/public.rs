use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::contact::{ContactErrors, ContactForm},
    server::{
        controller::page_context,
        error::AppError,
        middleware::session::{CsrfSession, FlashSession},
        model::message::CreateMessageParam,
        service::{message::MessageService, project::ProjectService},
        state::AppState,
    },
    view::{
        page::{contact_page, home_page, projects_page},
        render,
    },
};

const CSRF_MISMATCH_MESSAGE: &str = "The form has expired, please submit it again.";

/// GET / - Landing page listing every project
pub async fn home(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let projects = ProjectService::new(&state.db).get_all().await?;
    let context = page_context(&state.db, &session).await?;

    Ok(render(home_page(context, projects)))
}

/// Fallback for unknown paths
pub async fn not_found() -> AppError {
    AppError::NotFound("Page not found".to_string())
}

/// GET /projects - Every project with its rendered description
pub async fn projects(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let projects = ProjectService::new(&state.db).get_all().await?;
    let context = page_context(&state.db, &session).await?;

    Ok(render(projects_page(context, projects)))
}

/// GET /contact - Empty contact form
pub async fn contact_form(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let csrf_token = CsrfSession::new(&session).token().await?;
    let context = page_context(&state.db, &session).await?;

    Ok(render(contact_page(
        context,
        ContactForm::default(),
        ContactErrors::default(),
        csrf_token,
    )))
}

/// POST /contact - Store a contact message
///
/// # Returns
/// - `303 See Other` to `/contact` with a thank-you flash when the message was stored
/// - `200 OK` with the refilled form and per-field errors when validation failed
pub async fn submit_contact(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ContactForm>,
) -> Result<Response, AppError> {
    let csrf = CsrfSession::new(&session);
    let token_valid = csrf.verify(&form.csrf_token).await?;

    let validated = CreateMessageParam::from_form(&form);

    let param = match (token_valid, validated) {
        (true, Ok(param)) => param,
        (token_valid, result) => {
            let mut errors = result.err().unwrap_or_default();
            if !token_valid {
                errors.form = Some(CSRF_MISMATCH_MESSAGE.to_string());
            }

            let csrf_token = csrf.token().await?;
            let context = page_context(&state.db, &session).await?;

            return Ok(render(contact_page(context, form, errors, csrf_token)).into_response());
        }
    };

    let message = MessageService::new(&state.db).create(param).await?;
    tracing::info!("Stored contact message {} from {}", message.id, message.email);

    FlashSession::new(&session)
        .success("Thank you for submitting your message!")
        .await?;

    Ok(Redirect::to("/contact").into_response())
}
