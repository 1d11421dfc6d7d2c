use dioxus::prelude::*;

use crate::view::{
    component::{FlashList, Header},
    PageContext, SITE_NAME,
};

#[component]
pub fn Layout(title: String, context: PageContext, children: Element) -> Element {
    rsx!(html {
        lang: "en",
        head {
            meta { charset: "utf-8" }
            meta {
                name: "viewport",
                content: "width=device-width, initial-scale=1",
            }
            title { "{title} | {SITE_NAME}" }
            link { rel: "stylesheet", href: "/static/css/style.css" }
        }
        body {
            Header { signed_in: context.signed_in }
            main {
                class: "page",
                FlashList { flashes: context.flashes.clone() }
                {children}
            }
            footer {
                class: "footer",
                "© "
                span { id: "spanYear" }
                " {SITE_NAME}"
            }
            script { src: "/static/js/base.js" }
        }
    })
}
