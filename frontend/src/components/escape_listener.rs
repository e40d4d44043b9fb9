use std::cell::Cell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, Window};

thread_local! {
    static ACTIVE: Cell<usize> = Cell::new(0);
}

/// Number of window `keydown` listeners currently held by guards.
pub fn active_listeners() -> usize {
    ACTIVE.with(|active| active.get())
}

pub fn is_escape(key: &str) -> bool {
    // "Esc" is what older Edge/IE report.
    key == "Escape" || key == "Esc"
}

/// Window-level Escape handler that lives exactly as long as the guard.
pub struct EscapeListener {
    window: Window,
    callback: Closure<dyn FnMut(KeyboardEvent)>,
}

impl EscapeListener {
    /// Returns `None` outside a browser or if the listener could not be added.
    pub fn attach(on_escape: impl Fn() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::<dyn FnMut(KeyboardEvent)>::new(move |e: KeyboardEvent| {
            if is_escape(&e.key()) {
                on_escape();
            }
        });
        window
            .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
            .ok()?;
        ACTIVE.with(|active| active.set(active.get() + 1));
        Some(Self { window, callback })
    }
}

impl Drop for EscapeListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("keydown", self.callback.as_ref().unchecked_ref());
        ACTIVE.with(|active| active.set(active.get().saturating_sub(1)));
    }
}
