//! HTTP handlers.
//!
//! Handlers check access through `AuthGuard`, hand form data to the services and
//! answer with a rendered page or a redirect carrying a flash message.

pub mod auth;
pub mod dashboard;
pub mod message;
pub mod project;
pub mod public;
pub mod upload;
pub mod user;

#[cfg(test)]
mod test;

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::FlashSession},
    },
    view::PageContext,
};

/// Collects the layout data for a page render, draining pending flash messages.
pub(crate) async fn page_context(
    db: &DatabaseConnection,
    session: &Session,
) -> Result<PageContext, AppError> {
    let signed_in = AuthGuard::new(db, session).current_user().await?.is_some();
    let flashes = FlashSession::new(session).take_all().await?;

    Ok(PageContext { signed_in, flashes })
}
