use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

/// A view mounted into its own host element on `<body>`.
///
/// The host is appended when the overlay is created and removed when it is
/// dropped, so a dialog or toast cannot outlive the value that owns it.
pub struct Overlay<H> {
    host: HtmlElement,
    _view: H,
}

/// Append a fresh host to `<body>` and mount `view` into it.
pub fn mount<F, N>(view: F) -> Result<Overlay<impl Sized>, JsValue>
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no <body>"))?;

    let host: HtmlElement = document.create_element("div")?.dyn_into()?;
    host.set_attribute("data-coblos-overlay", "")?;
    body.append_child(&host)?;

    let handle = leptos::mount::mount_to(host.clone(), view);
    Ok(Overlay {
        host,
        _view: handle,
    })
}

impl<H> Drop for Overlay<H> {
    fn drop(&mut self) {
        self.host.remove();
    }
}
