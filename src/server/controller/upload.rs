use axum::{
    extract::{Multipart, State},
    response::{Html, IntoResponse},
};
use tower_sessions::Session;

use crate::{
    server::{
        controller::page_context,
        error::{upload::UploadError, AppError},
        middleware::auth::AuthGuard,
        service::upload::UploadService,
        state::AppState,
    },
    view::{
        page::{upload_form_page, upload_success},
        render,
    },
};

/// Multipart field carrying the file.
const IMAGE_FIELD: &str = "image";

/// GET /upload - Upload form
///
/// # Authentication
/// Requires user to be logged in
pub async fn upload_form(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require().await?;
    let context = page_context(&state.db, &session).await?;

    Ok(render(upload_form_page(context)))
}

/// POST /upload - Store an image under the upload directory
///
/// # Returns
/// - `200 OK` - HTML link to the stored file
/// - `400 Bad Request` - `No file part`, `No File selected` or `Invalid file type`
/// - `413 Payload Too Large` - Body over `UPLOAD_MAX_BYTES`
pub async fn upload(
    State(state): State<AppState>,
    session: Session,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require().await?;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        // Reject before reading the body.
        UploadService::check_file_name(&file_name)?;

        let bytes = field.bytes().await?;

        let stored_name = UploadService::new(&state.upload_dir)
            .save(&file_name, &bytes)
            .await?;

        return Ok(Html(upload_success(&stored_name)));
    }

    Err(UploadError::MissingFilePart.into())
}
