//! Request and reply shapes for the two endpoints the page talks to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ClientError;

/// Numeric identifier of a candidate, as rendered into the page markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(i64);

impl CandidateId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

/// Accepts only a plain decimal integer, surrounding whitespace allowed.
/// Narrower than a browser's `Number(...)`: `"1e3"` and the empty string
/// are rejected here instead of becoming `1000` and `0`.
impl FromStr for CandidateId {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| ClientError::InvalidCandidate(s.to_string()))
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// JSON body of `POST /api/vote`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VoteRequest {
    pub candidate_id: CandidateId,
}

/// Fields of the registration form. Built fresh for every submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Registration {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Encode as `application/x-www-form-urlencoded`, matching what a
    /// browser's `URLSearchParams` produces for the same fields.
    pub fn to_form_body(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .append_pair("name", &self.name)
            .append_pair("email", &self.email)
            .append_pair("password", &self.password)
            .finish()
    }
}

/// What both endpoints answer with, on success and on failure alike.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ServerReply {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub redirect: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ServerReply {
    /// Redirect target, ignoring empty strings.
    pub fn redirect(&self) -> Option<&str> {
        self.redirect.as_deref().filter(|r| !r.is_empty())
    }

    /// Human-readable message, ignoring empty strings.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }
}
