use coblos_core::{ClientError, Confirm, Messages, Navigate, Notify};
use std::time::Duration;

use crate::{dialog, toast};

/// The page's own dialog, toast and `window.location`.
pub struct BrowserUi {
    messages: Messages,
    toast_duration: Duration,
}

impl BrowserUi {
    pub fn new(messages: Messages, toast_duration: Duration) -> Self {
        Self {
            messages,
            toast_duration,
        }
    }
}

impl Confirm for BrowserUi {
    async fn confirm(&self, title: &str, message: &str) -> bool {
        dialog::confirm(title, message, &self.messages).await
    }
}

impl Notify for BrowserUi {
    fn toast(&self, message: &str) {
        toast::show(message, self.toast_duration);
    }
}

impl Navigate for BrowserUi {
    fn navigate(&self, target: &str) -> coblos_core::Result<()> {
        let window =
            web_sys::window().ok_or_else(|| ClientError::Navigation("no window".to_string()))?;
        window
            .location()
            .set_href(target)
            .map_err(|err| ClientError::Navigation(format!("{:?}", err)))
    }
}
