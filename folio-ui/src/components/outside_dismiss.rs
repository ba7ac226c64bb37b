//! Close-on-outside-click behavior for popover-like panels

use dioxus::prelude::*;
use folio_common::DismissWatcher;

use crate::wasm_utils::OutsidePointerListener;

/// Calls `on_dismiss` for every document `mousedown` that lands outside the
/// element with id `region_id`, but only while `active` is true.
///
/// The listener is attached when `active` turns true and removed when it turns
/// false or the calling component unmounts.
pub fn use_outside_dismiss(
    active: ReadSignal<bool>,
    region_id: String,
    on_dismiss: impl FnMut() + Clone + 'static,
) {
    let mut watcher: Signal<DismissWatcher<OutsidePointerListener>> =
        use_signal(DismissWatcher::new);

    use_effect(move || {
        let is_active = active();
        let region_id = region_id.clone();
        let on_dismiss = on_dismiss.clone();

        watcher.write().set_active(is_active, move || {
            let document = web_sys_x::window()?.document()?;
            Some(OutsidePointerListener::attach(document, region_id, on_dismiss))
        });
    });

    use_drop(move || {
        // The signal may already be gone if the scope is mid-teardown
        if let Ok(mut guard) = watcher.try_write() {
            guard.teardown();
        }
    });
}
