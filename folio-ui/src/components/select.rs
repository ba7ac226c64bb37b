//! Single-choice list built on the native `<select>` element
//!
//! ```ignore
//! Select {
//!     title: "Font",
//!     options: FONT_FAMILY_OPTIONS,
//!     selection,
//!     on_change: move |option: StyleOption| { ... },
//! }
//! ```

use dioxus::prelude::*;
use folio_common::{StyleOption, StyleSelection};

/// Labelled dropdown over a fixed option list
#[component]
pub fn Select(
    /// Label shown above the control
    title: String,
    /// Options in display order
    options: &'static [StyleOption],
    /// Current binding; decides which option is checked
    selection: StyleSelection,
    /// Called once per user selection
    on_change: EventHandler<StyleOption>,
) -> Element {
    rsx! {
        label { class: "select",
            span { class: "select__title", "{title}" }
            select {
                class: "select__control",
                value: selection.selected().value,
                onchange: move |e: FormEvent| {
                    let value = e.value();
                    if let Some(choice) = options.iter().find(|o| o.value == value) {
                        on_change.call(*choice);
                    }
                },
                for choice in options.iter() {
                    option {
                        key: "{choice.value}",
                        value: choice.value,
                        selected: selection.is_checked(choice),
                        "{choice.label}"
                    }
                }
            }
        }
    }
}
