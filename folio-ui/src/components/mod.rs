//! Shared UI components

pub mod arrow_button;
pub mod article;
pub mod button;
pub mod heading;
pub mod outside_dismiss;
pub mod select;
pub mod separator;
pub mod settings_panel;
pub mod style_selector;
pub mod toggle_group;

pub use arrow_button::ArrowButton;
pub use article::ArticleView;
pub use button::{Button, ButtonAction, ButtonVariant, ChromelessButton};
pub use heading::Heading;
pub use outside_dismiss::use_outside_dismiss;
pub use select::Select;
pub use separator::Separator;
pub use settings_panel::SettingsPanel;
pub use style_selector::StyleSelector;
pub use toggle_group::ToggleGroup;
