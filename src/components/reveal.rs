use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{window, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;
use crate::head::inject_animation_styles;

pub const ANIMATE_IN_CLASS: &str = "animate-in";

/// Inline style every reveal target starts with; `.animate-in` overrides it with `!important`.
pub const HIDDEN_STYLE: &[(&str, &str)] = &[
    ("opacity", "0"),
    ("transform", "translateY(20px)"),
    ("transition", "opacity 0.6s ease, transform 0.6s ease"),
];

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Observer plus the closure it calls back into. Disconnects when dropped.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn hide(element: &Element) -> Result<(), JsValue> {
    let Some(element) = element.dyn_ref::<HtmlElement>() else {
        return Ok(());
    };
    let style = element.style();
    for (property, value) in HIDDEN_STYLE {
        style.set_property(property, value)?;
    }
    Ok(())
}

fn reveal(element: &Element) {
    if let Err(err) = element.class_list().add_1(ANIMATE_IN_CLASS) {
        warn!("Failed to reveal element: {:?}", err);
    }
}

fn targets(selector: &str) -> Result<Vec<Element>, JsValue> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document is not available"))?;
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn observer_supported() -> bool {
    window()
        .map(|w| Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

/// Observes and hides each element. An element that cannot be hidden is
/// shown straight away instead of being left half-styled.
fn prepare_targets<F>(observer: &IntersectionObserver, elements: &[Element], hide: F)
where
    F: Fn(&Element) -> Result<(), JsValue>,
{
    for element in elements {
        observer.observe(element);
        if let Err(err) = hide(element) {
            warn!("Failed to hide element, showing it without animation: {:?}", err);
            observer.unobserve(element);
            reveal(element);
        }
    }
}

/// Hides every element matching `selector` and fades each one in the first
/// time it scrolls into view. Without IntersectionObserver support the
/// elements are shown right away and `None` is returned.
pub fn observe_reveal_targets(selector: &str) -> Result<Option<RevealObserver>, JsValue> {
    let elements = targets(selector)?;

    if !observer_supported() {
        warn!("IntersectionObserver unavailable, showing {} elements without animation", elements.len());
        elements.iter().for_each(reveal);
        return Ok(None);
    }

    let callback: EntriesCallback = Closure::wrap(Box::new(|entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if entry.is_intersecting() {
                let target = entry.target();
                reveal(&target);
                // One-shot
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
    options.set_root_margin(config::REVEAL_ROOT_MARGIN);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

    prepare_targets(&observer, &elements, hide);
    debug!("Observing {} elements for fade-in", elements.len());

    Ok(Some(RevealObserver {
        observer,
        _callback: callback,
    }))
}

/// Fade-in on scroll for the elements matching `selector`, set up after the first render.
#[hook]
pub fn use_reveal_on_scroll(selector: &'static str) {
    use_effect_with_deps(
        move |_| {
            if let Err(err) = inject_animation_styles() {
                warn!("Could not inject animation styles: {:?}", err);
            }
            let observer = match observe_reveal_targets(selector) {
                Ok(observer) => observer,
                Err(err) => {
                    warn!("Could not set up fade-in animations: {:?}", err);
                    None
                }
            };
            move || drop(observer)
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_state_is_offset_and_transparent() {
        assert!(HIDDEN_STYLE.contains(&("opacity", "0")));
        assert!(HIDDEN_STYLE.contains(&("transform", "translateY(20px)")));
    }

    #[test]
    fn transition_covers_both_hidden_properties() {
        let (_, transition) = HIDDEN_STYLE
            .iter()
            .find(|(property, _)| *property == "transition")
            .copied()
            .unwrap();
        for (property, _) in HIDDEN_STYLE.iter().filter(|(p, _)| *p != "transition") {
            assert!(transition.contains(property), "{} is not transitioned", property);
        }
    }
}
