//! Article preview content
//!
//! Reads its fonts, colors and width from the custom properties set on the
//! enclosing preview container; it has no style state of its own.

use dioxus::prelude::*;

#[component]
pub fn ArticleView() -> Element {
    rsx! {
        article { class: "article",
            h1 { class: "article__title", "Human, a study in typography" }
            p { class: "article__text",
                "Type is how a page speaks before anyone reads it. The same words set in a \
                 different face, size or color carry a different tone, and a reader notices \
                 long before they can say why."
            }
            p { class: "article__text",
                "Use the arrow button to open the settings panel and try other fonts, sizes, \
                 colors and widths. Nothing changes until you press Apply; Reset brings back \
                 the defaults."
            }
        }
    }
}
