//! folio-ui - View components for the article style settings panel
//!
//! Presentational primitives plus the settings form itself. State lives in
//! `folio-common`; these components only bind it to the DOM.

pub mod components;
pub mod wasm_utils;

pub use components::*;
