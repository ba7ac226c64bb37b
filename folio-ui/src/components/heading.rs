use dioxus::prelude::*;

/// Section heading
#[component]
pub fn Heading(
    /// Font size in pixels
    size: u16,
    #[props(default = 400)] weight: u16,
    #[props(default)] uppercase: bool,
    children: Element,
) -> Element {
    let style = format!(
        "font-size: {size}px; font-weight: {weight};{}",
        if uppercase { " text-transform: uppercase;" } else { "" }
    );

    rsx! {
        h2 { class: "heading", style: "{style}", {children} }
    }
}
