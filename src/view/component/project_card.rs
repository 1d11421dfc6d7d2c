use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_brands_icons::FaGithub, Icon};

use crate::{server::model::project::Project, view::markdown};

#[component]
pub fn ProjectCard(project: Project) -> Element {
    let description = project.text.as_deref().map(markdown::to_html);
    let image = project.image.as_ref().filter(|url| markdown::is_safe_link(url));
    let source_code = project
        .source_code
        .as_ref()
        .filter(|url| markdown::is_safe_link(url));

    rsx!(article {
        class: "project-card",
        if let Some(image) = image {
            img {
                class: "project-image",
                src: "{image}",
                alt: "{project.title}",
            }
        }
        h3 { "{project.title}" }
        if let Some(description) = description {
            div {
                class: "project-text",
                dangerous_inner_html: "{description}",
            }
        }
        if let Some(source_code) = source_code {
            a {
                class: "project-source",
                href: "{source_code}",
                Icon {
                    width: 18,
                    height: 18,
                    icon: FaGithub
                }
                span { "Source code" }
            }
        }
    })
}
