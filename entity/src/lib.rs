//! SeaORM entities for the portfolio database.
//!
//! The three tables are independent of each other; no relations are declared.

pub mod prelude;

pub mod message;
pub mod project;
pub mod user;
