//! Article page: the preview surface and owner of the applied style

use dioxus::prelude::*;
use folio_common::{ArticleStyle, StyleCatalog, StylePatch, StyleRecord};
use folio_ui::{ArticleView, SettingsPanel};
use tracing::{error, info};

#[component]
pub fn ArticlePage() -> Element {
    let catalog = use_hook(|| {
        let catalog = StyleCatalog::default();
        if let Err(e) = catalog.validate() {
            error!("Style catalog is inconsistent: {}", e);
        }
        catalog
    });

    // Buffer edits go through a non-reactive value so they never re-render
    // the preview; only apply/reset write the rendered record.
    let mut style = use_hook({
        let defaults = catalog.default_record();
        move || CopyValue::new(ArticleStyle::new(defaults))
    });
    let mut applied: Signal<StyleRecord> = use_signal(|| style.read().applied().clone());

    let on_change_style = move |patch: StylePatch| {
        style.write().change_style(&patch);
    };

    let on_apply = move |e: FormEvent| {
        e.prevent_default();
        let next = style.write().apply().clone();
        info!("Applying article style");
        applied.set(next);
    };

    let on_reset = move |e: FormEvent| {
        e.prevent_default();
        let next = style.write().reset().clone();
        info!("Resetting article style");
        applied.set(next);
    };

    let inline_style = applied.read().to_inline_style();

    rsx! {
        main { class: "main", style: "{inline_style}",
            SettingsPanel {
                catalog,
                on_change_style,
                on_apply,
                on_reset,
            }
            ArticleView {}
        }
    }
}
