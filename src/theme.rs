use std::fmt;

use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, MediaQueryListEvent};

pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_match(matches: bool) -> Self {
        if matches {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

fn theme_changed(theme: Theme) {
    info!("Theme changed to: {}", theme);
}

/// Logs the current color scheme and keeps logging it whenever the OS setting flips.
pub fn watch_color_scheme() {
    let Some(query) = window().and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten()) else {
        warn!("matchMedia unavailable, assuming light theme");
        theme_changed(Theme::default());
        return;
    };

    let on_change = Closure::wrap(Box::new(move |e: MediaQueryListEvent| {
        theme_changed(Theme::from_dark_match(e.matches()));
    }) as Box<dyn FnMut(MediaQueryListEvent)>);

    if let Err(err) = query.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref()) {
        warn!("Could not listen for theme changes: {:?}", err);
    }
    // Lives as long as the page
    on_change.forget();

    theme_changed(Theme::from_dark_match(query.matches()));
}
