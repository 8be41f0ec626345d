use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::analytics::{track_event, EventProperties};
use crate::config;
use crate::notification::notify;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::HEADER_SCROLL_THRESHOLD
}

/// Admits one animation frame per throttle window.
#[derive(Debug, Default)]
pub struct FrameGate {
    ticking: Cell<bool>,
}

impl FrameGate {
    /// Returns true if the caller may schedule a frame; the gate then stays shut until `release`.
    pub fn try_begin(&self) -> bool {
        !self.ticking.replace(true)
    }

    pub fn release(&self) {
        self.ticking.set(false);
    }
}

fn sync_header(scrolled: &UseStateHandle<bool>) {
    if let Some(scroll_y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
        scrolled.set(is_scrolled(scroll_y));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Press {
    Untouched,
    Down,
    Up,
}

fn nav_link_style(press: Press) -> Option<&'static str> {
    match press {
        Press::Untouched => None,
        Press::Down => Some("transform: scale(0.95); transition: transform 0.1s ease;"),
        Press::Up => Some("transform: scale(1); transition: transform 0.1s ease;"),
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let scrolled = use_state_eq(|| false);
    let press = use_state_eq(|| Press::Untouched);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let gate = Rc::new(FrameGate::default());
                    let callback = Closure::<dyn Fn()>::new({
                        let scrolled = scrolled.clone();
                        move || {
                            if !gate.try_begin() {
                                return;
                            }
                            if let Some(window) = web_sys::window() {
                                let scrolled = scrolled.clone();
                                let frame = Closure::once_into_js(move || sync_header(&scrolled));
                                if let Err(err) = window.request_animation_frame(frame.unchecked_ref()) {
                                    warn!("requestAnimationFrame failed: {:?}", err);
                                }
                            }
                            let gate = gate.clone();
                            Timeout::new(config::SCROLL_THROTTLE_MS, move || gate.release()).forget();
                        }
                    });

                    if let Err(err) = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()) {
                        warn!("Could not listen for scroll events: {:?}", err);
                    }
                    // Initial check
                    sync_header(&scrolled);

                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                    })
                } else {
                    Box::new(|| ())
                };
                destructor
            },
            (),
        );
    }

    let on_nav_click = {
        let press = press.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();

            press.set(Press::Down);
            {
                let press = press.clone();
                Timeout::new(config::NAV_PRESS_MS, move || press.set(Press::Up)).forget();
            }

            track_event(
                "navigation_click",
                &EventProperties::new()
                    .with("link", "login")
                    .with("page", config::PAGE_NAME),
            );

            // Real login lands with the launch
            notify(config::LOGIN_PLACEHOLDER_MESSAGE);
        })
    };

    html! {
        <header class={classes!("header", (*scrolled).then(|| "scrolled"))}>
            <div class="container header__inner">
                <a href="/" class="logo">{"SKeta"}</a>
                <nav class="nav">
                    <a href="#" class="nav__link" style={nav_link_style(*press)} onclick={on_nav_click}>
                        {"Login"}
                    </a>
                </nav>
            </div>
        </header>
    }
}
