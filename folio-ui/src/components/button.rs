//! Reusable button component

use dioxus::prelude::*;

/// Chromeless button component - provides accessibility and base functionality
/// without visual styling. Used internally by Button and ArrowButton.
#[component]
pub fn ChromelessButton(
    #[props(default)] class: Option<String>,
    #[props(default = "button")] r#type: &'static str,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: class.as_deref(),
            r#type,
            aria_label: aria_label.as_deref(),
            onclick: move |e| {
                if let Some(ref handler) = onclick {
                    handler.call(e);
                }
            },
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Filled - commits the form
    Apply,
    /// Outlined - clears the form
    Clear,
}

/// Which form action the button triggers
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonAction {
    Submit,
    Reset,
}

impl ButtonAction {
    fn as_type(&self) -> &'static str {
        match self {
            ButtonAction::Submit => "submit",
            ButtonAction::Reset => "reset",
        }
    }
}

/// Labelled form button; the surrounding form handles the action
#[component]
pub fn Button(variant: ButtonVariant, action: ButtonAction, title: String) -> Element {
    let variant_class = match variant {
        ButtonVariant::Apply => "button button--apply",
        ButtonVariant::Clear => "button button--clear",
    };

    rsx! {
        ChromelessButton {
            class: Some(variant_class.to_string()),
            r#type: action.as_type(),
            span { class: "button__title", "{title}" }
        }
    }
}
