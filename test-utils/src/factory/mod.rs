//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting test rows with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::UserFactory::new(&db)
//!     .user_name("admin")
//!     .build()
//!     .await?;
//!
//! let project = factory::create_project(&db).await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `message` - Create contact message entities
//! - `project` - Create project entities
//! - `helpers` - Unique id generation shared by all factories

pub mod helpers;
pub mod message;
pub mod project;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use message::create_message;
pub use project::create_project;
pub use user::create_user;
