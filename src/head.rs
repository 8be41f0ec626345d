use log::debug;
use wasm_bindgen::JsValue;
use web_sys::{window, Document, HtmlHeadElement};

use crate::config;

pub const ANIMATION_STYLE_ID: &str = "sketa-animations";

pub const ANIMATION_CSS: &str = r#"
    .animate-in {
        opacity: 1 !important;
        transform: translateY(0) !important;
    }

    .header.scrolled {
        background-color: rgba(255, 255, 255, 0.98) !important;
        box-shadow: 0 2px 20px rgba(0, 0, 0, 0.1);
    }

    [data-color-scheme="dark"] .header.scrolled {
        background-color: rgba(31, 33, 33, 0.98) !important;
        box-shadow: 0 2px 20px rgba(0, 0, 0, 0.3);
    }

    @media (prefers-color-scheme: dark) {
        .header.scrolled {
            background-color: rgba(31, 33, 33, 0.98) !important;
            box-shadow: 0 2px 20px rgba(0, 0, 0, 0.3);
        }
    }
"#;

fn document_and_head() -> Result<(Document, HtmlHeadElement), JsValue> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document is not available"))?;
    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("document has no head"))?;
    Ok((document, head))
}

/// Appends the `.animate-in` and `.header.scrolled` rules to `<head>`. Idempotent.
pub fn inject_animation_styles() -> Result<(), JsValue> {
    let (document, head) = document_and_head()?;
    if document.get_element_by_id(ANIMATION_STYLE_ID).is_some() {
        return Ok(());
    }

    let style = document.create_element("style")?;
    style.set_id(ANIMATION_STYLE_ID);
    style.set_text_content(Some(ANIMATION_CSS));
    head.append_child(&style)?;
    debug!("Injected animation styles");
    Ok(())
}

pub fn preload_resources() -> Result<(), JsValue> {
    let (document, head) = document_and_head()?;
    for url in config::PRELOAD_STYLESHEETS {
        let link = document.create_element("link")?;
        link.set_attribute("rel", "preload")?;
        link.set_attribute("href", url)?;
        link.set_attribute("as", "style")?;
        head.append_child(&link)?;
        debug!("Preloading {}", url);
    }
    Ok(())
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn injects_styles_once() {
        inject_animation_styles().unwrap();
        inject_animation_styles().unwrap();
        let count = window()
            .unwrap()
            .document()
            .unwrap()
            .query_selector_all(&format!("#{}", ANIMATION_STYLE_ID))
            .unwrap()
            .length();
        assert_eq!(count, 1);
    }
}
