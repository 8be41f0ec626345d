use std::fmt;

use log::{info, warn};
use serde::ser::{Serialize, SerializeMap, Serializer};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Function, Reflect, JSON};

/// Ordered key/value payload sent along with an analytics event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventProperties(Vec<(String, String)>);

impl EventProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a property, replacing the value in place if the key is already set.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
        self
    }

    /// Plain JS object (not a `Map`), which is what gtag and analytics.js expect.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        Ok(self.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
    }
}

impl Serialize for EventProperties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl fmt::Display for EventProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => f.write_str(&json),
            Err(_) => f.write_str("{}"),
        }
    }
}

/// Logs the event and forwards it to whichever analytics globals the host page provides.
pub fn track_event(name: &str, properties: &EventProperties) {
    info!("Event tracked: {} {}", name, properties);
    match properties.to_js() {
        Ok(js_properties) => dispatch(name, &js_properties),
        Err(err) => warn!("Could not convert properties for {}: {:?}", name, err),
    }
}

/// Same as [`track_event`] for properties that already live on the JS side.
pub fn track_event_js(name: &str, properties: &JsValue) {
    info!("Event tracked: {} {}", name, describe(properties));
    dispatch(name, properties);
}

fn dispatch(name: &str, properties: &JsValue) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let global: &JsValue = window.as_ref();
    let name = JsValue::from_str(name);

    // Google Analytics 4
    if let Some(gtag) = callable(global, "gtag") {
        if let Err(err) = gtag.call3(&JsValue::NULL, &JsValue::from_str("event"), &name, properties) {
            warn!("gtag failed: {}", describe(&err));
        }
    }

    // Segment-style analytics.track
    if let Ok(analytics) = Reflect::get(global, &JsValue::from_str("analytics")) {
        if analytics.is_object() {
            if let Some(track) = callable(&analytics, "track") {
                if let Err(err) = track.call2(&analytics, &name, properties) {
                    warn!("analytics.track failed: {}", describe(&err));
                }
            }
        }
    }
}

fn callable(target: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

fn describe(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    JSON::stringify(value)
        .ok()
        .and_then(|json| json.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let props = EventProperties::new()
            .with("link", "login")
            .with("page", "early_access_ended");
        assert_eq!(props.to_string(), r#"{"link":"login","page":"early_access_ended"}"#);
    }

    #[test]
    fn replaces_existing_key() {
        let props = EventProperties::new()
            .with("email", "old@sketa.app")
            .with("page", "early_access_ended")
            .with("email", "new@sketa.app");
        assert_eq!(props.to_string(), r#"{"email":"new@sketa.app","page":"early_access_ended"}"#);
    }

    #[test]
    fn empty_properties_render_as_empty_object() {
        let props = EventProperties::new();
        assert_eq!(props, EventProperties::default());
        assert_eq!(props.to_string(), "{}");
    }

    #[test]
    fn escapes_values_in_log_output() {
        let props = EventProperties::new().with("email", "a\"b@sketa.app");
        assert_eq!(props.to_string(), r#"{"email":"a\"b@sketa.app"}"#);
    }
}
