use dioxus::prelude::*;

use crate::view::{component::Layout, PageContext};

pub fn upload_form_page(context: PageContext) -> Element {
    rsx!(Layout {
        title: "Upload".to_string(),
        context: context,
        h1 { "Upload image" }
        form {
            class: "form",
            method: "post",
            action: "/upload",
            enctype: "multipart/form-data",
            input {
                r#type: "file",
                name: "image",
                accept: ".png,.jpg,.jpeg,.gif",
            }
            button { class: "btn", r#type: "submit", "Upload" }
        }
        a { href: "/dashboard", "Back to dashboard" }
    })
}

/// Body returned after a stored upload, linking to the file's public path.
pub fn upload_success(file_name: &str) -> String {
    let body = rsx!(p {
        "File uploaded successfully! Access it "
        a { href: "/static/images/{file_name}", "here" }
        "."
    });

    dioxus_ssr::render_element(body)
}
