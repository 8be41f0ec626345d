use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, ErrorEvent, Event};

/// Reports uncaught script errors to the console. Nothing is retried or shown to the visitor.
pub fn install_error_handler() {
    let Some(window) = window() else {
        return;
    };

    let on_error = Closure::wrap(Box::new(move |e: Event| match e.dyn_ref::<ErrorEvent>() {
        Some(error) => {
            gloo_console::warn!("JavaScript error caught:", error.error());
            log::debug!("{} ({}:{}:{})", error.message(), error.filename(), error.lineno(), error.colno());
        }
        None => gloo_console::warn!("JavaScript error caught:", e),
    }) as Box<dyn FnMut(Event)>);

    if let Err(err) = window.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref()) {
        warn!("Could not install error handler: {:?}", err);
    }
    on_error.forget();
}
