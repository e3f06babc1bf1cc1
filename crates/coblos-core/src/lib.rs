//! coblos core - client side of a campus voting page
//!
//! This crate holds everything the voting page does that is not tied to a
//! particular screen:
//!
//! 1. Wire types for `POST /api/vote` and `POST /register`
//! 2. An HTTP client that reads the server's JSON answer whatever the status
//! 3. The vote and registration flows, written against small UI traits
//!    ([`Confirm`], [`Notify`], [`Navigate`]) so the browser and the terminal
//!    front-ends share them
//!
//! # Example
//!
//! ```ignore
//! use coblos_core::{ActionGuard, ApiClient, Settings, flow};
//!
//! let settings = Settings::default();
//! let client = ApiClient::new(base_url, settings.endpoints.clone())?;
//! let guard = ActionGuard::new();
//! let outcome = flow::vote(&client, &settings, &ui, &guard, "3").await;
//! ```

pub mod client;
pub mod error;
pub mod flow;
pub mod guard;
pub mod protocol;
pub mod settings;
pub mod ui;

pub use client::{ApiClient, SESSION_COOKIE_NAME};
pub use error::{ClientError, Result};
pub use flow::Outcome;
pub use guard::{ActionGuard, ActionState, InFlight};
pub use protocol::{CandidateId, Registration, ServerReply, VoteRequest};
pub use settings::{Endpoints, Messages, Settings};
pub use ui::{Confirm, Navigate, Notify};
