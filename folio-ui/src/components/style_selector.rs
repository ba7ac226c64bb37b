//! Binds one style dimension to its control

use dioxus::prelude::*;
use folio_common::{ControlKind, DimensionCatalog, StyleOption, StylePatch, StyleSelection};

use crate::components::{Select, ToggleGroup};

/// One dimension's control. Reports its default once on mount and every
/// selection after that as a single-key `StylePatch`.
#[component]
pub fn StyleSelector(entry: DimensionCatalog, on_change_style: EventHandler<StylePatch>) -> Element {
    let mut selection = use_signal(|| {
        StyleSelection::mount(entry.dimension, entry.default, |patch| {
            on_change_style.call(patch)
        })
    });

    let current = selection();
    let on_change = move |option: StyleOption| {
        selection
            .write()
            .select(option, |patch| on_change_style.call(patch));
    };

    match entry.control {
        ControlKind::Select => rsx! {
            Select {
                title: "{entry.title}",
                options: entry.options,
                selection: current,
                on_change,
            }
        },
        ControlKind::ToggleGroup => rsx! {
            ToggleGroup {
                name: "{entry.dimension.key()}-select",
                title: "{entry.title}",
                options: entry.options,
                selection: current,
                on_change,
            }
        },
    }
}
