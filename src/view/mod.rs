//! Server-rendered HTML views.
//!
//! Pages are built with dioxus `rsx!` and rendered to a string once per request with
//! `dioxus-ssr`; nothing runs in the browser apart from the small static script.

pub mod component;
pub mod markdown;
pub mod page;

use axum::response::Html;
use dioxus::prelude::*;

use crate::model::flash::Flash;

pub const SITE_NAME: &str = "Portfolio";

/// Per-request data every page layout needs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageContext {
    /// Whether a user is signed in; switches the navigation links.
    pub signed_in: bool,
    /// Flash messages drained from the session for this render.
    pub flashes: Vec<Flash>,
}

/// Renders a page element into a complete HTML document.
pub fn render(page: Element) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>{}",
        dioxus_ssr::render_element(page)
    ))
}
