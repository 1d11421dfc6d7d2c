use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::server::{
    config::Config,
    controller::{auth, dashboard, message, project, public, upload, user},
    state::AppState,
};

/// Builds every route of the site.
///
/// Session handling is layered on by the caller.
pub fn router(config: &Config) -> Router<AppState> {
    Router::new()
        .route("/", get(public::home))
        .route("/projects", get(public::projects))
        .route(
            "/contact",
            get(public::contact_form).post(public::submit_contact),
        )
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/logout", get(auth::logout))
        .route(
            "/create_user",
            get(user::create_user_form).post(user::create_user),
        )
        .route("/dashboard", get(dashboard::dashboard))
        .route("/dashboard/edit_user", post(user::edit_user))
        .route("/dashboard/delete_user/{id}", get(user::delete_user))
        .route(
            "/dashboard/delete_message/{id}",
            get(message::delete_message),
        )
        .route("/dashboard/create_project", post(project::create_project))
        .route("/dashboard/edit_project", post(project::edit_project))
        .route(
            "/dashboard/delete_project/{id}",
            get(project::delete_project),
        )
        .route(
            "/upload",
            get(upload::upload_form)
                .post(upload::upload)
                .layer(DefaultBodyLimit::max(config.upload_max_bytes)),
        )
        .nest("/static", static_files(config))
        .fallback(public::not_found)
}

/// Uploaded images under `/static/images`, everything else from the static directory.
fn static_files(config: &Config) -> Router<AppState> {
    Router::new()
        .nest_service("/images", ServeDir::new(&config.upload_dir))
        .fallback_service(ServeDir::new(&config.static_dir))
}
