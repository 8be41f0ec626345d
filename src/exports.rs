use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::js_sys::{Object, Reflect};
use web_sys::window;

use crate::analytics::track_event_js;
use crate::config;
use crate::notification::show_notification;

pub const GLOBAL_NAME: &str = "SketaApp";

/// Missing, non-numeric, negative or non-finite durations fall back to the default.
fn coerce_duration(value: Option<f64>) -> u32 {
    match value {
        Some(ms) if ms.is_finite() && ms >= 0.0 => ms.min(u32::MAX as f64) as u32,
        _ => config::NOTIFICATION_DURATION_MS,
    }
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = String)]
    fn js_string(value: &JsValue) -> String;
}

/// Text the way `element.textContent = value` would render it: `null` clears, everything else goes through `String()`.
fn coerce_text(value: &JsValue) -> String {
    if value.is_null() {
        String::new()
    } else if let Some(text) = value.as_string() {
        text
    } else {
        js_string(value)
    }
}

/// Publishes `window.SketaApp = { showNotification, trackEvent }` for inline scripts.
pub fn expose_globals() -> Result<(), JsValue> {
    let window = window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let app = Object::new();

    let show = Closure::wrap(Box::new(move |message: JsValue, duration: JsValue| {
        let message = coerce_text(&message);
        if let Err(err) = show_notification(&message, coerce_duration(duration.as_f64())) {
            warn!("showNotification failed: {:?}", err);
        }
    }) as Box<dyn Fn(JsValue, JsValue)>);

    let track = Closure::wrap(Box::new(move |name: JsValue, properties: JsValue| {
        let properties = if properties.is_undefined() || properties.is_null() {
            Object::new().into()
        } else {
            properties
        };
        track_event_js(&coerce_text(&name), &properties);
    }) as Box<dyn Fn(JsValue, JsValue)>);

    Reflect::set(&app, &JsValue::from_str("showNotification"), show.as_ref())?;
    Reflect::set(&app, &JsValue::from_str("trackEvent"), track.as_ref())?;
    Reflect::set(&window, &JsValue::from_str(GLOBAL_NAME), &app)?;

    // Referenced from window for the rest of the page's life
    show.forget();
    track.forget();

    info!("Exposed window.{}", GLOBAL_NAME);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_defaults_when_missing_or_invalid() {
        assert_eq!(coerce_duration(None), 3000);
        assert_eq!(coerce_duration(Some(f64::NAN)), 3000);
        assert_eq!(coerce_duration(Some(f64::INFINITY)), 3000);
        assert_eq!(coerce_duration(Some(-5.0)), 3000);
    }

    #[test]
    fn duration_keeps_valid_values() {
        assert_eq!(coerce_duration(Some(0.0)), 0);
        assert_eq!(coerce_duration(Some(1500.0)), 1500);
        assert_eq!(coerce_duration(Some(2500.9)), 2500);
        assert_eq!(coerce_duration(Some(1e12)), u32::MAX);
    }
}
