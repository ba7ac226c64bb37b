//! WASM utilities for browser interop
//!
//! `OutsidePointerListener` attaches a document `mousedown` listener that
//! reports pointer-downs landing outside one element. The listener closure is
//! owned by the struct and removed in `Drop` instead of being leaked with
//! `Closure::forget()`, so the listener lives exactly as long as the value:
//!
//! ```ignore
//! let listener = OutsidePointerListener::attach(document, "settings-panel-0".into(), on_outside);
//!
//! // Listener is removed here
//! drop(listener);
//! ```
//!
//! Held inside a `DismissWatcher`, it goes away whenever the watcher
//! deactivates or is torn down.

use folio_common::{is_outside, PointerRegion};
use tracing::debug;
use wasm_bindgen_x::prelude::*;

const POINTER_DOWN: &str = "mousedown";

/// Document pointer-down listener scoped to one region element.
pub struct OutsidePointerListener {
    document: web_sys_x::Document,
    callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)>,
}

impl OutsidePointerListener {
    /// Starts listening. `on_outside` runs once per pointer-down whose target
    /// is not inside the element with id `region_id`. The region is looked up
    /// per event; if it is missing, every pointer-down counts as outside.
    pub fn attach(
        document: web_sys_x::Document,
        region_id: String,
        mut on_outside: impl FnMut() + 'static,
    ) -> Self {
        let lookup = document.clone();
        let callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)> =
            Closure::wrap(Box::new(move |event: wasm_bindgen_x::JsValue| {
                let region = lookup.get_element_by_id(&region_id).map(ElementRegion);
                let target = event_target_node(&event);
                if is_outside(region.as_ref(), target.as_ref()) {
                    debug!("Pointer down outside #{region_id}");
                    on_outside();
                }
            }));

        document
            .add_event_listener_with_callback(POINTER_DOWN, callback.as_ref().unchecked_ref())
            .ok();

        Self { document, callback }
    }
}

impl Drop for OutsidePointerListener {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback(POINTER_DOWN, self.callback.as_ref().unchecked_ref());
    }
}

struct ElementRegion(web_sys_x::Element);

impl PointerRegion<web_sys_x::Node> for ElementRegion {
    fn contains(&self, target: &web_sys_x::Node) -> bool {
        self.0.contains(Some(target))
    }
}

/// Event targets that are not DOM nodes come back as `None`.
fn event_target_node(event: &wasm_bindgen_x::JsValue) -> Option<web_sys_x::Node> {
    event
        .dyn_ref::<web_sys_x::Event>()
        .and_then(|e| e.target())
        .and_then(|t| t.dyn_into::<web_sys_x::Node>().ok())
}
