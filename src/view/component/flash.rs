use dioxus::prelude::*;

use crate::model::flash::{Flash, FlashLevel};

#[component]
pub fn FlashList(flashes: Vec<Flash>) -> Element {
    if flashes.is_empty() {
        return rsx!();
    }

    rsx!(ul {
        class: "flashes",
        for flash in flashes.iter() {
            li {
                class: match flash.level {
                    FlashLevel::Success => "flash flash-success",
                    FlashLevel::Error => "flash flash-error",
                },
                "{flash.message}"
            }
        }
    })
}
