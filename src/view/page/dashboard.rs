use dioxus::prelude::*;

use crate::{
    server::model::{message::Message, project::Project, user::User},
    view::{component::Layout, PageContext},
};

/// Everything listed on the dashboard.
pub struct DashboardData {
    pub current_user: User,
    pub users: Vec<User>,
    pub projects: Vec<Project>,
    pub messages: Vec<Message>,
}

pub fn dashboard_page(context: PageContext, data: DashboardData) -> Element {
    let DashboardData {
        current_user,
        users,
        projects,
        messages,
    } = data;

    rsx!(Layout {
        title: "Dashboard".to_string(),
        context: context,
        h1 { "Dashboard" }
        p { "Signed in as {current_user.user_name}" }
        div {
            class: "actions",
            a { class: "btn", href: "/upload", "Upload image" }
            a { class: "btn", href: "/create_user", "Create user" }
        }

        section {
            h2 { "Users" }
            table {
                class: "table",
                thead {
                    tr {
                        th { "ID" }
                        th { "Username" }
                        th { "" }
                    }
                }
                tbody {
                    for user in users {
                        UserRow { key: "{user.id}", user: user.clone() }
                    }
                }
            }
        }

        section {
            h2 { "Projects" }
            form {
                class: "form",
                method: "post",
                action: "/dashboard/create_project",
                ProjectFields { project: None }
                button { class: "btn", r#type: "submit", "Create project" }
            }
            for project in projects {
                ProjectRow { key: "{project.id}", project: project.clone() }
            }
        }

        section {
            h2 { "Messages" }
            if messages.is_empty() {
                p { class: "muted", "No messages." }
            }
            for message in messages {
                article {
                    key: "{message.id}",
                    class: "message",
                    h3 { "{message.subject}" }
                    p {
                        class: "muted",
                        "{message.name} <{message.email}> · "
                        {message.timestamp.format("%Y-%m-%d %H:%M UTC").to_string()}
                    }
                    p { "{message.message}" }
                    a {
                        class: "btn btn-danger",
                        href: "/dashboard/delete_message/{message.id}",
                        "Delete"
                    }
                }
            }
        }
    })
}

#[component]
fn UserRow(user: User) -> Element {
    rsx!(tr {
        td { "{user.id}" }
        td {
            form {
                class: "inline-form",
                method: "post",
                action: "/dashboard/edit_user",
                input { r#type: "hidden", name: "user_id", value: "{user.id}" }
                input { r#type: "text", name: "user_name", value: "{user.user_name}" }
                button { class: "btn", r#type: "submit", "Rename" }
            }
        }
        td {
            a {
                class: "btn btn-danger",
                href: "/dashboard/delete_user/{user.id}",
                "Delete"
            }
        }
    })
}

#[component]
fn ProjectRow(project: Project) -> Element {
    rsx!(div {
        class: "project-row",
        form {
            class: "form",
            method: "post",
            action: "/dashboard/edit_project",
            input { r#type: "hidden", name: "project_id", value: "{project.id}" }
            ProjectFields { project: Some(project.clone()) }
            button { class: "btn", r#type: "submit", "Save" }
        }
        a {
            class: "btn btn-danger",
            href: "/dashboard/delete_project/{project.id}",
            "Delete"
        }
    })
}

/// Inputs shared by the create and edit project forms; prefilled when editing.
#[component]
fn ProjectFields(#[props(!optional)] project: Option<Project>) -> Element {
    let title = project.as_ref().map(|p| p.title.clone()).unwrap_or_default();
    let text = project.as_ref().and_then(|p| p.text.clone()).unwrap_or_default();
    let source_code = project
        .as_ref()
        .and_then(|p| p.source_code.clone())
        .unwrap_or_default();
    let image = project.as_ref().and_then(|p| p.image.clone()).unwrap_or_default();

    rsx!(
        label { "Title" }
        input { r#type: "text", name: "title", value: "{title}", required: true }
        label { "Description (Markdown)" }
        textarea { name: "text", rows: 3, "{text}" }
        label { "Source code URL" }
        input { r#type: "text", name: "source_code", value: "{source_code}" }
        label { "Image path" }
        input {
            r#type: "text",
            name: "image",
            value: "{image}",
            placeholder: "/static/images/example.png",
        }
    )
}
