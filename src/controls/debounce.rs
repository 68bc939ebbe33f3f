use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Quiet period before the replay callback fires.
pub const DEBOUNCE_MS: i32 = 200;

/// Debounced wrapper around the replay callback.
///
/// Owns at most one pending timeout at a time; each trigger cancels the
/// previous one, so a burst of slider events collapses into a single
/// invocation 200ms after the last change. State lives in this struct,
/// one per `bind` call, so independently bound containers never cancel
/// each other's timers.
#[derive(Clone)]
pub struct Debounce {
    callback: js_sys::Function,
    pending: Rc<Cell<Option<i32>>>,
}

impl Debounce {
    pub fn new(callback: js_sys::Function) -> Self {
        Self {
            callback,
            pending: Rc::new(Cell::new(None)),
        }
    }

    /// Cancel any pending invocation and schedule a fresh one.
    pub fn trigger(&self) {
        let Some(window) = web_sys::window() else { return };
        if let Some(handle) = self.pending.take() {
            window.clear_timeout_with_handle(handle);
        }

        let pending = self.pending.clone();
        let callback = self.callback.clone();
        let fire = Closure::once_into_js(move || {
            pending.set(None);
            let _ = callback.call0(&JsValue::NULL);
        });

        match window
            .set_timeout_with_callback_and_timeout_and_arguments_0(fire.unchecked_ref(), DEBOUNCE_MS)
        {
            Ok(handle) => self.pending.set(Some(handle)),
            Err(err) => log::warn!("failed to schedule replay callback: {err:?}"),
        }
    }
}
