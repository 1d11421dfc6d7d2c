use dioxus::prelude::*;

use crate::{
    server::model::project::Project,
    view::{
        component::{Layout, ProjectCard},
        PageContext,
    },
};

pub fn projects_page(context: PageContext, projects: Vec<Project>) -> Element {
    rsx!(Layout {
        title: "Projects".to_string(),
        context: context,
        h1 { "Projects" }
        if projects.is_empty() {
            p { class: "muted", "No projects yet." }
        }
        section {
            class: "project-grid",
            for project in projects {
                ProjectCard { key: "{project.id}", project: project.clone() }
            }
        }
    })
}
