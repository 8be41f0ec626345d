use yew::prelude::*;
use log::{info, warn};

mod analytics;
mod config;
mod errors;
mod exports;
mod head;
mod notification;
mod theme;
mod components {
    pub mod header;
    pub mod mailto;
    pub mod reveal;
}
mod pages {
    pub mod early_access;
}
#[cfg(all(test, target_arch = "wasm32"))]
mod test_support;

use pages::early_access::EarlyAccessEnded;


#[function_component]
fn App() -> Html {
    info!("Rendering early access ended page");
    html! {
        <EarlyAccessEnded />
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    errors::install_error_handler();

    if let Err(err) = exports::expose_globals() {
        warn!("Could not expose window.{}: {:?}", exports::GLOBAL_NAME, err);
    }

    theme::watch_color_scheme();

    if let Err(err) = head::preload_resources() {
        warn!("Could not preload resources: {:?}", err);
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
