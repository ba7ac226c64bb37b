//! Article settings panel
//!
//! Side panel with one selector per style dimension and Reset/Apply buttons.
//! The form stays mounted while closed (only its class changes), so selector
//! state and the dismiss watcher survive hide/show.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use folio_common::{PanelVisibility, StyleCatalog, StylePatch};

use crate::components::{
    use_outside_dismiss, ArrowButton, Button, ButtonAction, ButtonVariant, Heading, Separator,
    StyleSelector,
};

/// Counter for generating unique panel region IDs
static PANEL_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

#[component]
pub fn SettingsPanel(
    catalog: StyleCatalog,
    /// Receives every selector change (buffer edit)
    on_change_style: EventHandler<StylePatch>,
    /// Form submit; the handler owns `prevent_default`
    on_apply: EventHandler<FormEvent>,
    /// Form reset; the handler owns `prevent_default`
    on_reset: EventHandler<FormEvent>,
) -> Element {
    let mut visibility = use_signal(PanelVisibility::default);
    let is_open = use_memo(move || visibility().is_open());

    let region_id = use_hook(|| {
        let id = PANEL_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("settings-panel-{}", id)
    });

    // The region covers the arrow button too, so pressing it is not an
    // outside click and only the toggle decides the next state.
    use_outside_dismiss(is_open.into(), region_id.clone(), move || {
        let next = visibility.peek().dismiss();
        visibility.set(next);
    });

    let panel_class = if is_open() {
        "settings-panel settings-panel--open"
    } else {
        "settings-panel"
    };

    rsx! {
        div { id: "{region_id}", class: "settings-panel-region",
            ArrowButton {
                is_open: is_open(),
                onclick: move |_| {
                    let next = visibility().toggle();
                    visibility.set(next);
                },
            }
            aside { class: panel_class,
                form {
                    class: "settings-panel__form",
                    onsubmit: move |e: FormEvent| on_apply.call(e),
                    onreset: move |e: FormEvent| on_reset.call(e),
                    Heading {
                        size: 31,
                        weight: 800,
                        uppercase: true,
                        "Set parameters"
                    }
                    StyleSelector { entry: catalog.font_family, on_change_style }
                    StyleSelector { entry: catalog.font_size, on_change_style }
                    StyleSelector { entry: catalog.font_color, on_change_style }
                    Separator {}
                    StyleSelector { entry: catalog.background_color, on_change_style }
                    StyleSelector { entry: catalog.container_width, on_change_style }
                    div { class: "settings-panel__actions",
                        Button {
                            variant: ButtonVariant::Clear,
                            action: ButtonAction::Reset,
                            title: "Reset",
                        }
                        Button {
                            variant: ButtonVariant::Apply,
                            action: ButtonAction::Submit,
                            title: "Apply",
                        }
                    }
                }
            }
        }
    }
}
