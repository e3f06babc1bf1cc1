//! Wires the page's server-rendered controls to the shared flows.

use coblos_core::{ActionGuard, ApiClient, Notify, Registration, flow};
use std::rc::Rc;
use tracing::{debug, info, warn};
use url::Url;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, FormData, HtmlFormElement};

use crate::browser::BrowserUi;
use crate::config::{CONFIG_ELEMENT_ID, PageConfig};

/// Everything a handler needs, shared by all handlers on the page.
struct Page {
    client: ApiClient,
    config: PageConfig,
    ui: BrowserUi,
}

/// Read the page config, then attach the vote and registration listeners.
pub fn wire(document: &Document) -> Result<(), JsValue> {
    let block = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    let config = PageConfig::from_page(block.as_deref());

    let origin = web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .location()
        .origin()?;
    let base = Url::parse(&origin).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let client = ApiClient::new(base, config.settings.endpoints.clone())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let ui = BrowserUi::new(
        config.settings.messages.clone(),
        config.settings.toast_duration(),
    );

    let page = Rc::new(Page { client, config, ui });
    let votes = bind_vote_controls(document, &page)?;
    let register = bind_register_form(document, &page)?;
    info!(votes, register, "page wired");
    Ok(())
}

fn bind_vote_controls(document: &Document, page: &Rc<Page>) -> Result<u32, JsValue> {
    let controls = document.query_selector_all(&page.config.vote_selector)?;
    let mut bound = 0;

    for index in 0..controls.length() {
        let Some(control) = controls
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };

        let guard = Rc::new(ActionGuard::new());
        let page = Rc::clone(page);
        let target = control.clone();
        let on_click = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            let page = Rc::clone(&page);
            let guard = Rc::clone(&guard);
            let control = target.clone();
            spawn_local(async move {
                let raw = control
                    .get_attribute(&page.config.candidate_attribute)
                    .unwrap_or_default();
                let _disabled = DisabledWhilePending::new(&control);
                let outcome =
                    flow::vote(&page.client, &page.config.settings, &page.ui, &guard, &raw).await;
                debug!(?outcome, "vote finished");
            });
        });

        control.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
        bound += 1;
    }

    Ok(bound)
}

fn bind_register_form(document: &Document, page: &Rc<Page>) -> Result<bool, JsValue> {
    let Some(element) = document.get_element_by_id(&page.config.register_form_id) else {
        return Ok(false);
    };
    let Ok(form) = element.dyn_into::<HtmlFormElement>() else {
        warn!(id = %page.config.register_form_id, "registration element is not a <form>");
        return Ok(false);
    };

    let guard = Rc::new(ActionGuard::new());
    let page = Rc::clone(page);
    let target = form.clone();
    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();

        let registration = match read_registration(&target) {
            Ok(registration) => registration,
            Err(err) => {
                warn!(error = ?err, "could not read registration form");
                page.ui.toast(&page.config.settings.messages.registration_failed);
                return;
            }
        };
        let page = Rc::clone(&page);
        let guard = Rc::clone(&guard);
        spawn_local(async move {
            let outcome = flow::register(
                &page.client,
                &page.config.settings,
                &page.ui,
                &guard,
                &registration,
            )
            .await;
            debug!(?outcome, "registration finished");
        });
    });

    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();
    Ok(true)
}

/// Absent fields read as empty strings.
fn read_registration(form: &HtmlFormElement) -> Result<Registration, JsValue> {
    let data = FormData::new_with_form(form)?;
    let field = |name: &str| data.get(name).as_string().unwrap_or_default();
    Ok(Registration::new(
        field("name"),
        field("email"),
        field("password"),
    ))
}

/// Marks a control `disabled` for the lifetime of the value. A control that
/// was already disabled is left as it was.
struct DisabledWhilePending<'a> {
    control: &'a Element,
    restore: bool,
}

impl<'a> DisabledWhilePending<'a> {
    fn new(control: &'a Element) -> Self {
        let restore = !control.has_attribute("disabled");
        if restore {
            let _ = control.set_attribute("disabled", "");
        }
        Self { control, restore }
    }
}

impl Drop for DisabledWhilePending<'_> {
    fn drop(&mut self) {
        if self.restore {
            let _ = self.control.remove_attribute("disabled");
        }
    }
}
