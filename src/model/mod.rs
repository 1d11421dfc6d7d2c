//! Form payloads and view-facing types shared between handlers and views.

pub mod contact;
pub mod flash;
pub mod project;
pub mod user;
