//! Shared test harness for the portfolio crates.
//!
//! Every test gets its own in-memory SQLite database with only the tables it asks for,
//! optionally a tower-sessions session stored in that same database, and factories that
//! insert rows with unique defaults.
//!
//! - `builder::TestBuilder` picks the tables and creates the context
//! - `context::TestContext` hands out the connection, the session store and a session
//! - `factory` inserts users, messages and projects
//! - `error::TestError` is returned when setup fails
//!
//! ```rust,ignore
//! use entity::prelude::Project;
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_projects() -> Result<(), DbErr> {
//!     let mut test = TestBuilder::new().with_table(Project).build().await.unwrap();
//!     let db = test.database().await.unwrap();
//!
//!     factory::create_project(db).await?;
//!     // ...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
