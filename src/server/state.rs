//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into each handler through
//! Axum's state extraction.

use std::{path::PathBuf, sync::Arc};

use sea_orm::DatabaseConnection;

/// Shared resources for request handlers.
///
/// Cloning is cheap: the connection is a pool handle and the path sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Directory uploaded images are written to.
    pub upload_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, upload_dir: PathBuf) -> Self {
        Self {
            db,
            upload_dir: Arc::new(upload_dir),
        }
    }
}
