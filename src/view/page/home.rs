use dioxus::prelude::*;

use crate::{
    server::model::project::Project,
    view::{
        component::{Layout, ProjectCard},
        PageContext, SITE_NAME,
    },
};

pub fn home_page(context: PageContext, projects: Vec<Project>) -> Element {
    rsx!(Layout {
        title: "Home".to_string(),
        context: context,
        section {
            class: "hero",
            h1 { "Welcome to my {SITE_NAME}" }
            p { "A selection of things I have built. Get in touch through the contact page." }
            a { class: "btn", href: "/contact", "Contact me" }
        }
        section {
            class: "project-grid",
            for project in projects {
                ProjectCard { key: "{project.id}", project: project.clone() }
            }
        }
    })
}
