//! folio-common - Pure state for the article style settings panel
//!
//! Holds the option catalog, style records and the state machines behind the
//! settings form (buffer/apply/reset, panel visibility, selector binding and
//! the outside-dismiss subscription lifecycle). Nothing here touches the DOM.

pub mod article_style;
pub mod catalog;
pub mod dimension;
pub mod dismiss;
pub mod panel;
pub mod selector;
pub mod style_option;
pub mod style_record;

pub use article_style::ArticleStyle;
pub use catalog::{CatalogError, ControlKind, DimensionCatalog, StyleCatalog};
pub use dimension::StyleDimension;
pub use dismiss::{is_outside, DismissWatcher, PointerRegion};
pub use panel::PanelVisibility;
pub use selector::StyleSelection;
pub use style_option::StyleOption;
pub use style_record::{StylePatch, StyleRecord};
