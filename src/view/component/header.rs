use dioxus::prelude::*;

use crate::view::SITE_NAME;

#[component]
pub fn Header(signed_in: bool) -> Element {
    rsx!(header {
        class: "header",
        a {
            class: "brand",
            href: "/",
            {SITE_NAME}
        }
        nav {
            ul {
                class: "nav-list",
                li { a { href: "/", "Home" } }
                li { a { href: "/projects", "Projects" } }
                li { a { href: "/contact", "Contact" } }
                if signed_in {
                    li { a { href: "/dashboard", "Dashboard" } }
                    li { a { href: "/logout", "Logout" } }
                } else {
                    li { a { href: "/login", "Login" } }
                }
            }
        }
    })
}
