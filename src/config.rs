use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose while running locally with trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Page identifier attached to every analytics event.
pub const PAGE_NAME: &str = "early_access_ended";

pub const CONTACT_EMAIL: &str = "hello@sketa.app";

pub const ACCENT_COLOR: &str = "#d35100";

// Header
pub const HEADER_SCROLL_THRESHOLD: f64 = 100.0;
pub const SCROLL_THROTTLE_MS: u32 = 16; // ~60fps

// Fade-in animations
pub const REVEAL_SELECTOR: &str = ".hero__content, .info-card, .footer__content";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// Click feedback
pub const EMAIL_FLASH_MS: u32 = 300;
pub const NAV_PRESS_MS: u32 = 100;
pub const LOGIN_PLACEHOLDER_MESSAGE: &str = "Login functionality will be available when we launch!";

// Notifications
pub const NOTIFICATION_DURATION_MS: u32 = 3000;
pub const NOTIFICATION_SLIDE_IN_DELAY_MS: u32 = 10;
pub const NOTIFICATION_SLIDE_OUT_MS: u32 = 300;

pub const PRELOAD_STYLESHEETS: &[&str] = &[
    "https://fonts.googleapis.com/css2?family=Roboto:wght@300;400;500;700;900&display=swap",
];
