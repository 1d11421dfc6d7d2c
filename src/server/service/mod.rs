//! Business logic layer between controllers and repositories.
//!
//! Services work with domain models and parameter types. Outcomes a visitor can fix
//! (taken names, blank fields, unknown ids) are returned as values so controllers can
//! answer with a flash message; only infrastructure failures are errors.

pub mod auth;
pub mod message;
pub mod project;
pub mod upload;
pub mod user;

#[cfg(test)]
mod test;
