//! Seams between the flows and whatever renders them.
//!
//! The browser implements these with a modal overlay, a toast element and
//! `window.location`; the terminal with a prompt, a status line and a
//! printed URL.

use crate::error::Result;

/// Interactive yes/no decision.
#[allow(async_fn_in_trait)]
pub trait Confirm {
    /// Resolves once: `true` for confirm, `false` for cancel.
    async fn confirm(&self, title: &str, message: &str) -> bool;
}

/// Transient, non-blocking notification sink.
pub trait Notify {
    fn toast(&self, message: &str);
}

pub trait Navigate {
    /// Move the user on to `target` (as given by the server, usually a path).
    fn navigate(&self, target: &str) -> Result<()>;
}
