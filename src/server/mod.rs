//! Server-side request handling and business logic.
//!
//! The backend uses Axum as the web framework, SeaORM for database operations and
//! tower-sessions for the login session.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, access checks and page rendering
//! - **Service Layer** (`service/`) - Business rules between controllers and the data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Typed session wrappers and the authentication guard
//! - **Util** (`util/`) - Password hashing, random tokens and upload file names
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Database, session store and bootstrap account setup
//! - **Router** (`router`) - Route table and static file serving
//!
//! # Request Flow
//!
//! 1. **Router** matches the request to a controller
//! 2. **Controller** resolves the session user through `AuthGuard` where required
//! 3. **Service** applies business rules and calls the data layer
//! 4. **Data** queries the database and returns domain models
//! 5. **Controller** renders a page from `view` or redirects with a flash message

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
