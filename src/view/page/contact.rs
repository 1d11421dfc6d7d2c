use dioxus::prelude::*;

use crate::{
    model::contact::{ContactErrors, ContactForm},
    view::{component::Layout, PageContext},
};

#[component]
fn FieldError(#[props(!optional)] error: Option<String>) -> Element {
    match error {
        Some(error) => rsx!(span { class: "field-error", "{error}" }),
        None => rsx!(),
    }
}

/// Contact form, refilled with `values` and annotated with `errors` after a rejected submission.
pub fn contact_page(
    context: PageContext,
    values: ContactForm,
    errors: ContactErrors,
    csrf_token: String,
) -> Element {
    rsx!(Layout {
        title: "Contact".to_string(),
        context: context,
        h1 { "Contact" }
        form {
            class: "form",
            method: "post",
            action: "/contact",
            novalidate: true,
            input { r#type: "hidden", name: "csrf_token", value: "{csrf_token}" }
            FieldError { error: errors.form.clone() }

            label { r#for: "name", "Name" }
            input {
                id: "name",
                r#type: "text",
                name: "name",
                value: "{values.name}",
            }
            FieldError { error: errors.name.clone() }

            label { r#for: "email", "Email" }
            input {
                id: "email",
                r#type: "email",
                name: "email",
                value: "{values.email}",
            }
            FieldError { error: errors.email.clone() }

            label { r#for: "subject", "Subject" }
            input {
                id: "subject",
                r#type: "text",
                name: "subject",
                value: "{values.subject}",
            }
            FieldError { error: errors.subject.clone() }

            label { r#for: "message", "Message" }
            textarea {
                id: "message",
                name: "message",
                rows: 6,
                "{values.message}"
            }
            FieldError { error: errors.message.clone() }

            button { class: "btn", r#type: "submit", "Send" }
        }
    })
}
