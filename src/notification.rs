use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, HtmlElement};

use crate::config;

pub const NOTIFICATION_CLASS: &str = "notification";

const OFFSCREEN: &str = "translateX(100%)";
const ONSCREEN: &str = "translateX(0)";

const TOAST_STYLE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("top", "100px"),
    ("right", "20px"),
    ("background", config::ACCENT_COLOR),
    ("color", "white"),
    ("padding", "12px 20px"),
    ("border-radius", "8px"),
    ("box-shadow", "0 4px 20px rgba(211, 81, 0, 0.3)"),
    ("z-index", "10000"),
    ("font-size", "14px"),
    ("font-weight", "500"),
    ("transform", OFFSCREEN),
    ("transition", "transform 0.3s ease"),
    ("max-width", "300px"),
];

fn toast_style() -> String {
    TOAST_STYLE
        .iter()
        .map(|(property, value)| format!("{}: {};", property, value))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Slides a toast in from the right edge, replacing any toast already on screen.
///
/// The toast stays for `duration_ms`, slides back out and is then detached.
/// Timers belonging to a replaced toast only ever touch their own element,
/// so a newer toast is never cut short.
pub fn show_notification(message: &str, duration_ms: u32) -> Result<(), JsValue> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document is not available"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;

    if let Some(existing) = document.query_selector(&format!(".{}", NOTIFICATION_CLASS))? {
        existing.remove();
    }

    let toast = document.create_element("div")?.dyn_into::<HtmlElement>()?;
    toast.set_class_name(NOTIFICATION_CLASS);
    toast.set_text_content(Some(message));
    toast.set_attribute("style", &toast_style())?;
    body.append_child(&toast)?;
    debug!("Showing notification for {}ms: {}", duration_ms, message);

    {
        let toast = toast.clone();
        Timeout::new(config::NOTIFICATION_SLIDE_IN_DELAY_MS, move || {
            if let Err(err) = toast.style().set_property("transform", ONSCREEN) {
                warn!("Failed to slide notification in: {:?}", err);
            }
        })
        .forget();
    }

    Timeout::new(duration_ms, move || {
        if let Err(err) = toast.style().set_property("transform", OFFSCREEN) {
            warn!("Failed to slide notification out: {:?}", err);
        }
        Timeout::new(config::NOTIFICATION_SLIDE_OUT_MS, move || {
            if let Some(parent) = toast.parent_node() {
                if let Err(err) = parent.remove_child(&toast) {
                    warn!("Failed to remove notification: {:?}", err);
                }
            }
        })
        .forget();
    })
    .forget();

    Ok(())
}

/// Fire-and-forget variant for event handlers.
pub fn notify(message: &str) {
    if let Err(err) = show_notification(message, config::NOTIFICATION_DURATION_MS) {
        warn!("Could not show notification: {:?}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_starts_offscreen() {
        let style = toast_style();
        assert!(style.contains("transform: translateX(100%);"));
        assert!(style.contains("transition: transform 0.3s ease;"));
    }

    #[test]
    fn toast_uses_accent_color_and_sits_above_page() {
        let style = toast_style();
        assert!(style.starts_with("position: fixed;"));
        assert!(style.contains("background: #d35100;"));
        assert!(style.contains("color: white;"));
        assert!(style.contains("z-index: 10000;"));
        assert!(style.ends_with("max-width: 300px;"));
    }

    #[test]
    fn every_declaration_is_terminated() {
        let style = toast_style();
        assert_eq!(style.matches(';').count(), TOAST_STYLE.len());
    }
}
