//! Browser side of the coblos voting page.
//!
//! The page markup is rendered by the server; this crate only attaches
//! behavior to it: vote buttons ask for confirmation and post the vote,
//! the optional registration form posts without reloading, and results
//! are shown as toasts.

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod choice;
mod config;

#[cfg(target_arch = "wasm32")]
mod bind;
#[cfg(target_arch = "wasm32")]
mod browser;
#[cfg(target_arch = "wasm32")]
#[allow(clippy::unit_arg, clippy::unused_unit)]
mod dialog;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
#[allow(clippy::unit_arg, clippy::unused_unit)]
mod toast;

pub use config::{
    CONFIG_ELEMENT_ID, DEFAULT_CANDIDATE_ATTRIBUTE, DEFAULT_REGISTER_FORM_ID,
    DEFAULT_VOTE_SELECTOR, PageConfig,
};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

/// Entry point for the WASM module.
///
/// Called automatically when the module is loaded. Sets up panic reporting
/// and console logging, then wires the page, waiting for `DOMContentLoaded`
/// if the document is still being parsed.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    if let Err(err) = start() {
        tracing::error!(error = ?err, "failed to wire voting page");
    }
}

#[cfg(target_arch = "wasm32")]
fn start() -> Result<(), JsValue> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if document.ready_state() != "loading" {
        return bind::wire(&document);
    }

    let target = document.clone();
    let on_ready = Closure::once(move |_event: web_sys::Event| {
        if let Err(err) = bind::wire(&target) {
            tracing::error!(error = ?err, "failed to wire voting page");
        }
    });
    document.add_event_listener_with_callback(
        "DOMContentLoaded",
        on_ready.as_ref().unchecked_ref(),
    )?;
    on_ready.forget();
    Ok(())
}
