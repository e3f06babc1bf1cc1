//! The two user actions on the voting page, written once against the UI
//! seams so the browser and the terminal run the same logic.
//!
//! Apart from navigation, a decline or a busy control, every path ends in
//! exactly one toast.

use tracing::{debug, info, warn};

use crate::client::ApiClient;
use crate::error::ClientError;
use crate::guard::ActionGuard;
use crate::protocol::{CandidateId, Registration, VoteRequest};
use crate::settings::Settings;
use crate::ui::{Confirm, Navigate, Notify};

/// How a single activation of a control ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The control already had an action in flight; nothing happened.
    Busy,
    /// The user cancelled the confirmation; no request was sent.
    Declined,
    /// The server accepted the vote and the user was sent on to `target`.
    Redirected(String),
    /// The server accepted the registration; the success text was toasted.
    Accepted(String),
    /// The server answered and its answer was shown as a toast.
    Notified(String),
    /// The action could not complete; `shown` is the toast text.
    Failed { error: ClientError, shown: String },
}

/// Ask for confirmation, then cast a vote for the candidate named by
/// `raw_candidate` (the control's attribute text).
pub async fn vote<U>(
    client: &ApiClient,
    settings: &Settings,
    ui: &U,
    guard: &ActionGuard,
    raw_candidate: &str,
) -> Outcome
where
    U: Confirm + Notify + Navigate,
{
    let Some(_in_flight) = guard.try_begin() else {
        debug!("vote already in flight, ignoring activation");
        return Outcome::Busy;
    };
    let messages = &settings.messages;

    let candidate_id = match raw_candidate.parse::<CandidateId>() {
        Ok(id) => id,
        Err(error) => return fail(ui, error, &messages.vote_failed),
    };

    let confirmed = ui
        .confirm(&messages.vote_confirm_title, &messages.vote_confirm_message)
        .await;
    if !confirmed {
        debug!(%candidate_id, "vote declined");
        return Outcome::Declined;
    }

    let reply = match client.post_vote(&VoteRequest { candidate_id }).await {
        Ok(reply) => reply,
        Err(error) => return fail(ui, error, &messages.vote_failed),
    };

    if reply.ok {
        if let Some(target) = reply.redirect() {
            return match ui.navigate(target) {
                Ok(()) => {
                    info!(%candidate_id, redirect = target, "vote accepted");
                    Outcome::Redirected(target.to_string())
                }
                Err(error) => fail(ui, error, &messages.vote_failed),
            };
        }
    }

    notify(ui, reply.message().unwrap_or(messages.vote_failed.as_str()))
}

/// Submit the registration fields. No client-side validation; the server
/// decides.
pub async fn register<U>(
    client: &ApiClient,
    settings: &Settings,
    ui: &U,
    guard: &ActionGuard,
    registration: &Registration,
) -> Outcome
where
    U: Notify,
{
    let Some(_in_flight) = guard.try_begin() else {
        debug!("registration already in flight, ignoring submit");
        return Outcome::Busy;
    };
    let messages = &settings.messages;

    match client.post_registration(registration).await {
        Ok(reply) if reply.ok => {
            info!("registration accepted");
            ui.toast(&messages.registration_succeeded);
            Outcome::Accepted(messages.registration_succeeded.clone())
        }
        Ok(reply) => notify(
            ui,
            reply.message().unwrap_or(messages.registration_failed.as_str()),
        ),
        Err(error) => fail(ui, error, &messages.registration_failed),
    }
}

fn notify<U: Notify>(ui: &U, text: &str) -> Outcome {
    ui.toast(text);
    Outcome::Notified(text.to_string())
}

fn fail<U: Notify>(ui: &U, error: ClientError, fallback: &str) -> Outcome {
    warn!(%error, "action failed");
    ui.toast(fallback);
    Outcome::Failed {
        error,
        shown: fallback.to_string(),
    }
}
