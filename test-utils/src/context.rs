use std::sync::Arc;

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Matches the application's default inactivity window.
const SESSION_INACTIVITY_MINUTES: i64 = 30;

const IN_MEMORY_URL: &str = "sqlite::memory:";

/// Per-test environment: one in-memory database and, on demand, a session stored in it.
///
/// Both are created on first use and dropped with the context.
#[derive(Default)]
pub struct TestContext {
    pub db: Option<DatabaseConnection>,
    pub session: Option<Session>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the context's database, connecting on first use.
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            self.db = Some(Database::connect(IN_MEMORY_URL).await?);
        }

        self.db
            .as_ref()
            .ok_or_else(|| sea_orm::DbErr::Custom("database not connected".to_string()).into())
    }

    /// Runs the given CREATE TABLE statements in order.
    ///
    /// Called by `TestBuilder::build`.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in &stmts {
            db.execute(stmt).await?;
        }

        Ok(())
    }

    /// Creates a session store in the context's database and creates its table.
    ///
    /// Route tests put this store behind a `SessionManagerLayer`, so sessions written
    /// by requests land in the same database the assertions read.
    ///
    /// # Returns
    /// - `Ok(SqliteStore)` - Store ready for use
    /// - `Err(TestError::Database)` - Connecting or creating the session table failed
    pub async fn session_store(&mut self) -> Result<SqliteStore, TestError> {
        let pool = self.database().await?.get_sqlite_connection_pool().clone();
        let store = SqliteStore::new(pool);

        store
            .migrate()
            .await
            .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

        Ok(store)
    }

    /// Returns the context's session, creating it and its store on first use.
    ///
    /// The session is detached from any request, which suits tests of the session
    /// wrappers and `AuthGuard`.
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        if self.session.is_none() {
            let store = self.session_store().await?;

            self.session = Some(Session::new(
                None,
                Arc::new(store),
                Some(Expiry::OnInactivity(Duration::minutes(
                    SESSION_INACTIVITY_MINUTES,
                ))),
            ));
        }

        self.session
            .as_ref()
            .ok_or_else(|| sea_orm::DbErr::Custom("session not created".to_string()).into())
    }

    /// Returns the database and the session together.
    ///
    /// Borrowing both through `database()` and `session()` separately would need two
    /// overlapping mutable borrows.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.session().await?;

        match (self.db.as_ref(), self.session.as_ref()) {
            (Some(db), Some(session)) => Ok((db, session)),
            _ => Err(sea_orm::DbErr::Custom("test context not initialized".to_string()).into()),
        }
    }
}
