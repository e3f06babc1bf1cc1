use coblos_core::Messages;
use leptos::prelude::*;
use std::sync::Arc;

use crate::{choice, overlay};

const BACKDROP_STYLE: &str = "position:fixed;inset:0;background:rgba(0,0,0,.5);\
    display:grid;place-items:center;z-index:99";
const PANEL_STYLE: &str = "background:#15192e;border:1px solid #232846;border-radius:14px;\
    padding:16px;min-width:280px;box-shadow:0 10px 30px rgba(0,0,0,.35)";

#[component]
fn ConfirmDialog(
    title: String,
    message: String,
    cancel_label: String,
    confirm_label: String,
    on_choice: Callback<bool>,
) -> impl IntoView {
    view! {
        <div style=BACKDROP_STYLE role="dialog" aria-modal="true">
            <div style=PANEL_STYLE>
                <h3 style="margin:0 0 8px 0">{title}</h3>
                <p style="color:#a7adbf;margin:0 0 12px 0">{message}</p>
                <div style="display:flex;gap:10px;justify-content:flex-end">
                    <button class="btn-outline" on:click=move |_| on_choice.run(false)>
                        {cancel_label}
                    </button>
                    <button class="btn-primary" on:click=move |_| on_choice.run(true)>
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Show a modal confirmation and wait for the user.
///
/// Resolves `true` for confirm and `false` for cancel; only the first click
/// counts. The dialog is removed from the page before this returns. There is
/// no timeout and clicking the backdrop does nothing.
pub async fn confirm(title: &str, message: &str, messages: &Messages) -> bool {
    let (choice, rx) = choice::channel::<bool>();
    let choice = Arc::new(choice);

    let title = title.to_string();
    let message = message.to_string();
    let cancel_label = messages.cancel_label.clone();
    let confirm_label = messages.confirm_label.clone();

    let mounted = overlay::mount(move || {
        let on_choice = Callback::new(move |confirmed: bool| {
            choice.resolve(confirmed);
        });
        view! {
            <ConfirmDialog
                title=title
                message=message
                cancel_label=cancel_label
                confirm_label=confirm_label
                on_choice=on_choice
            />
        }
    });

    let dialog = match mounted {
        Ok(dialog) => dialog,
        Err(err) => {
            tracing::warn!(error = ?err, "could not open confirmation dialog");
            return false;
        }
    };

    let choice = rx.await.unwrap_or(false);
    drop(dialog);
    choice
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::spawn_local;
    use wasm_bindgen_test::*;
    use web_sys::{Document, HtmlElement};

    fn document() -> Document {
        web_sys::window().and_then(|w| w.document()).unwrap()
    }

    fn button(selector: &str) -> HtmlElement {
        document()
            .query_selector(&format!("[data-coblos-overlay] {}", selector))
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap()
    }

    fn overlay_count() -> u32 {
        document()
            .query_selector_all("[data-coblos-overlay]")
            .unwrap()
            .length()
    }

    /// Open a dialog in the background and wait until it is on the page.
    async fn open() -> oneshot::Receiver<bool> {
        let (tx, rx) = oneshot::channel();
        spawn_local(async move {
            let choice = confirm("Konfirmasi", "Yakin?", &Messages::default()).await;
            let _ = tx.send(choice);
        });
        TimeoutFuture::new(0).await;
        rx
    }

    #[wasm_bindgen_test]
    async fn test_confirm_control_resolves_true_and_removes_dialog() {
        let before = overlay_count();
        let rx = open().await;
        assert_eq!(overlay_count(), before + 1);

        button(".btn-primary").click();
        assert_eq!(rx.await, Ok(true));
        assert_eq!(overlay_count(), before);
    }

    #[wasm_bindgen_test]
    async fn test_cancel_control_resolves_false_and_removes_dialog() {
        let before = overlay_count();
        let rx = open().await;

        button(".btn-outline").click();
        assert_eq!(rx.await, Ok(false));
        assert_eq!(overlay_count(), before);
    }

    #[wasm_bindgen_test]
    async fn test_only_first_click_counts() {
        let rx = open().await;
        let cancel = button(".btn-outline");
        let confirm = button(".btn-primary");

        cancel.click();
        confirm.click();
        assert_eq!(rx.await, Ok(false));
    }
}
