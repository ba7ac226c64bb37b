//! Round arrow button that opens and closes the settings panel

use crate::components::button::ChromelessButton;
use dioxus::prelude::*;

#[component]
pub fn ArrowButton(is_open: bool, onclick: EventHandler<MouseEvent>) -> Element {
    let class = if is_open {
        "arrow-button arrow-button--open"
    } else {
        "arrow-button"
    };
    let label = if is_open {
        "Close settings panel"
    } else {
        "Open settings panel"
    };

    rsx! {
        ChromelessButton {
            class: Some(class.to_string()),
            aria_label: Some(label.to_string()),
            onclick: move |e: MouseEvent| onclick.call(e),
            svg {
                class: "arrow-button__icon",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M9 18l6-6-6-6" }
            }
        }
    }
}
