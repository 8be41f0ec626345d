//! Helpers for the in-browser tests.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsValue;
use web_sys::js_sys::{Function, Object, Reflect, JSON};
use web_sys::{window, Element, MouseEvent, MouseEventInit};

/// Empty `<div>` appended to `<body>` to mount components into.
pub fn scratch_root() -> Element {
    let document = window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    root
}

/// Lets the Yew scheduler, effects and timers run.
pub async fn settle(ms: u32) {
    TimeoutFuture::new(ms).await;
}

/// Dispatches a bubbling, cancelable click and hands the event back.
pub fn click(target: &Element) -> MouseEvent {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = MouseEvent::new_with_mouse_event_init_dict("click", &init).unwrap();
    target.dispatch_event(&event).unwrap();
    event
}

pub fn clear_notifications() {
    let document = window().unwrap().document().unwrap();
    let toasts = document.query_selector_all(".notification").unwrap();
    for i in 0..toasts.length() {
        if let Some(node) = toasts.item(i) {
            if let Some(parent) = node.parent_node() {
                parent.remove_child(&node).unwrap();
            }
        }
    }
}

/// `window.analytics` whose `track` records every `[name, properties]` pair.
/// Removed from `window` on drop.
pub struct AnalyticsRecorder {
    analytics: Object,
}

impl AnalyticsRecorder {
    pub fn install() -> Self {
        let analytics = Object::new();
        let track = Function::new_with_args(
            "name, props",
            "this.calls = (this.calls || []).concat([[name, props]]);",
        );
        Reflect::set(&analytics, &JsValue::from_str("track"), &track).unwrap();
        Reflect::set(&window().unwrap(), &JsValue::from_str("analytics"), &analytics).unwrap();
        Self { analytics }
    }

    pub fn calls_json(&self) -> String {
        let calls = Reflect::get(&self.analytics, &JsValue::from_str("calls")).unwrap();
        if calls.is_undefined() {
            return "[]".to_string();
        }
        JSON::stringify(&calls).unwrap().as_string().unwrap()
    }
}

impl Drop for AnalyticsRecorder {
    fn drop(&mut self) {
        let _ = Reflect::delete_property(&window().unwrap(), &JsValue::from_str("analytics"));
    }
}
