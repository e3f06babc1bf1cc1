use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_VOTE_PATH: &str = "/api/vote";
pub const DEFAULT_REGISTER_PATH: &str = "/register";

/// Default on-screen time of a toast (2.5 s)
pub const DEFAULT_TOAST_DURATION_MS: u32 = 2500;

/// Endpoint paths, joined onto the server base URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub vote: String,
    pub register: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            vote: DEFAULT_VOTE_PATH.to_string(),
            register: DEFAULT_REGISTER_PATH.to_string(),
        }
    }
}

/// User-facing text. Defaults match the deployed page (Indonesian).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub vote_confirm_title: String,
    pub vote_confirm_message: String,
    pub cancel_label: String,
    pub confirm_label: String,
    /// Shown when a vote fails without a server-provided message
    pub vote_failed: String,
    pub registration_succeeded: String,
    /// Shown when registration fails without a server-provided message
    pub registration_failed: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            vote_confirm_title: "Konfirmasi pilihan".to_string(),
            vote_confirm_message: "Apakah kamu yakin memilih kandidat ini?".to_string(),
            cancel_label: "Batal".to_string(),
            confirm_label: "Yakin".to_string(),
            vote_failed: "Terjadi kesalahan.".to_string(),
            registration_succeeded: "Registrasi berhasil. Silakan login.".to_string(),
            registration_failed: "Registrasi gagal.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub endpoints: Endpoints,
    pub messages: Messages,
    pub toast_duration_ms: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            messages: Messages::default(),
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }
}

impl Settings {
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.toast_duration_ms))
    }
}
