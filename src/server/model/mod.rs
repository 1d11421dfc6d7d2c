//! Domain models and operation parameters.
//!
//! Repositories convert entities into these types at the data boundary; controllers
//! build the parameter types from submitted forms.

pub mod message;
pub mod project;
pub mod user;
