//! Browser implementations of the interpreter's collaborators.
//!
//! Provides safe access to the Web APIs the host needs: localStorage,
//! the async clipboard, `window.confirm` and timers.

use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Storage, Window};

use vaultsh_core::{Scheduler, StoreError};

use crate::store::KeyValue;

#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

#[inline]
fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Log a warning to the browser console.
pub fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}

// =============================================================================
// localStorage
// =============================================================================

/// [`KeyValue`] over `window.localStorage`. Missing storage reads as empty.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl KeyValue for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = local_storage()
            .ok_or_else(|| StoreError::Backend("localStorage unavailable".to_string()))?;
        storage.set_item(key, value).map_err(|_| {
            warn(&format!("Failed to write {key} to localStorage"));
            StoreError::Backend(format!("could not save {key}"))
        })
    }
}

// =============================================================================
// Clipboard & Confirm
// =============================================================================

/// Fire-and-forget `navigator.clipboard.writeText(text)`.
///
/// Looked up reflectively so browsers without the async clipboard API (or
/// insecure contexts) only log a warning.
pub fn write_clipboard(text: &str) {
    let Some(window) = window() else { return };
    let navigator = window.navigator();

    let write_text = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .ok()
        .filter(|clipboard| !clipboard.is_undefined())
        .and_then(|clipboard| {
            let function = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
                .ok()?
                .dyn_into::<js_sys::Function>()
                .ok()?;
            Some((clipboard, function))
        });

    match write_text {
        Some((clipboard, function)) => {
            if function.call1(&clipboard, &JsValue::from_str(text)).is_err() {
                warn("Clipboard write was rejected");
            }
        }
        None => warn("Clipboard API not available"),
    }
}

/// Blocking `window.confirm(question)`. No window means no.
pub fn confirm(question: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(question).ok())
        .unwrap_or(false)
}

// =============================================================================
// Timers
// =============================================================================

/// Runs deferred tasks on `setTimeout`, then calls `notify` so reactive state
/// that the task touched can be re-read.
#[derive(Clone)]
pub struct TimerScheduler {
    notify: Rc<dyn Fn()>,
}

impl TimerScheduler {
    pub fn new(notify: impl Fn() + 'static) -> Self {
        Self {
            notify: Rc::new(notify),
        }
    }
}

impl Scheduler for TimerScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let notify = Rc::clone(&self.notify);
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, move || {
            task();
            notify();
        })
        .forget();
    }
}
