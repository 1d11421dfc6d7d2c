use dioxus::prelude::*;

use crate::view::{component::Layout, PageContext};

pub fn login_page(context: PageContext) -> Element {
    rsx!(Layout {
        title: "Login".to_string(),
        context: context,
        h1 { "Login" }
        form {
            class: "form",
            method: "post",
            action: "/login",
            label { r#for: "username", "Username" }
            input {
                id: "username",
                r#type: "text",
                name: "username",
                required: true,
            }
            label { r#for: "password", "Password" }
            input {
                id: "password",
                r#type: "password",
                name: "password",
                required: true,
            }
            button { class: "btn", r#type: "submit", "Login" }
        }
    })
}
