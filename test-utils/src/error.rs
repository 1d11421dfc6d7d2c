use thiserror::Error;

/// Errors that can occur while setting up a test context.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to connect to the in-memory database, create its tables or
    /// migrate the session store table.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
