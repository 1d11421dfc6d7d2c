use dioxus::prelude::*;

use crate::view::{component::Layout, PageContext};

pub fn create_user_page(context: PageContext) -> Element {
    rsx!(Layout {
        title: "Create user".to_string(),
        context: context,
        h1 { "Create user" }
        form {
            class: "form",
            method: "post",
            action: "/create_user",
            label { r#for: "name", "Username" }
            input { id: "name", r#type: "text", name: "name" }
            label { r#for: "pass", "Password" }
            input { id: "pass", r#type: "password", name: "pass" }
            button { class: "btn", r#type: "submit", "Create" }
        }
    })
}
