//! Toggle group component - a row of radio buttons where one is selected

use dioxus::prelude::*;
use folio_common::{StyleOption, StyleSelection};

/// A row of mutually exclusive options
#[component]
pub fn ToggleGroup(
    /// Shared radio `name` for the group
    name: String,
    title: String,
    options: &'static [StyleOption],
    selection: StyleSelection,
    on_change: EventHandler<StyleOption>,
) -> Element {
    rsx! {
        fieldset { class: "toggle-group", role: "radiogroup",
            legend { class: "toggle-group__title", "{title}" }
            div { class: "toggle-group__items",
                for option in options.iter().copied() {
                    label {
                        key: "{option.value}",
                        class: if selection.is_checked(&option) { "toggle-group__item toggle-group__item--checked" } else { "toggle-group__item" },
                        input {
                            r#type: "radio",
                            name: "{name}",
                            value: option.value,
                            checked: selection.is_checked(&option),
                            onchange: move |_| on_change.call(option),
                        }
                        span { "{option.label}" }
                    }
                }
            }
        }
    }
}
