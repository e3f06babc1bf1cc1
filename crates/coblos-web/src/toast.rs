use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::time::Duration;
use wasm_bindgen_futures::spawn_local;

use crate::overlay;

const TOAST_STYLE: &str = "position:fixed;left:50%;transform:translateX(-50%);bottom:20px;\
    background:#15192e;color:#e6e8ee;border:1px solid #232846;border-radius:12px;\
    padding:10px 14px;box-shadow:0 10px 30px rgba(0,0,0,.35);z-index:99";

#[component]
fn Toast(message: String) -> impl IntoView {
    view! {
        <div style=TOAST_STYLE role="status" aria-live="polite">
            {message}
        </div>
    }
}

/// Show `message` near the bottom of the viewport for `duration`.
///
/// Every call gets its own element; concurrent toasts overlap.
pub fn show(message: &str, duration: Duration) {
    let message = message.to_string();
    let toast = match overlay::mount(move || view! { <Toast message=message/> }) {
        Ok(toast) => toast,
        Err(err) => {
            tracing::warn!(error = ?err, "could not show toast");
            return;
        }
    };

    let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
    spawn_local(async move {
        TimeoutFuture::new(millis).await;
        drop(toast);
    });
}
