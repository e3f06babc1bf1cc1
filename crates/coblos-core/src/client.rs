use reqwest::header::{self, HeaderMap, HeaderValue};
use tracing::debug;
use url::Url;

use crate::error::{ClientError, Result};
use crate::protocol::{Registration, ServerReply, VoteRequest};
use crate::settings::Endpoints;

// Timeout configuration (native only; the browser owns fetch timeouts)
#[cfg(not(target_arch = "wasm32"))]
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);
#[cfg(not(target_arch = "wasm32"))]
const CONNECT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

/// Name of the backend's login session cookie
pub const SESSION_COOKIE_NAME: &str = "session";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Talks to the voting backend. One request per call, no retries.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
    endpoints: Endpoints,
}

impl ApiClient {
    pub fn new(base: Url, endpoints: Endpoints) -> Result<Self> {
        Self::with_session(base, endpoints, None)
    }

    /// Like [`ApiClient::new`], but sends an existing login session cookie
    /// with every request. Accepts either the bare cookie value or a
    /// `session=...` pair.
    pub fn with_session(base: Url, endpoints: Endpoints, session: Option<&str>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(session) = session.filter(|s| !s.is_empty()) {
            let cookie = session_cookie(session);
            let value = HeaderValue::from_str(&cookie)
                .map_err(|e| ClientError::InvalidSession(e.to_string()))?;
            headers.insert(header::COOKIE, value);
        }

        let builder = reqwest::Client::builder().default_headers(headers);
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT);

        Ok(Self {
            http: builder.build()?,
            base,
            endpoints,
        })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Resolve a server-relative path (or absolute URL) against the base.
    pub fn resolve(&self, path: &str) -> Result<Url> {
        Ok(self.base.join(path)?)
    }

    /// `POST` the vote as JSON.
    pub async fn post_vote(&self, request: &VoteRequest) -> Result<ServerReply> {
        let url = self.resolve(&self.endpoints.vote)?;
        debug!(%url, candidate = %request.candidate_id, "sending vote");

        let response = self.http.post(url).json(request).send().await?;
        read_reply(response).await
    }

    /// `POST` the registration fields as a url-encoded form.
    pub async fn post_registration(&self, registration: &Registration) -> Result<ServerReply> {
        let url = self.resolve(&self.endpoints.register)?;
        debug!(%url, "sending registration");

        let response = self
            .http
            .post(url)
            .header(header::CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(registration.to_form_body())
            .send()
            .await?;
        read_reply(response).await
    }
}

fn session_cookie(session: &str) -> String {
    let prefix = format!("{}=", SESSION_COOKIE_NAME);
    if session.starts_with(&prefix) {
        session.to_string()
    } else {
        format!("{}{}", prefix, session)
    }
}

/// The backend answers rejections with 4xx statuses *and* a JSON body
/// carrying the message, so the status is not treated as an error here.
async fn read_reply(response: reqwest::Response) -> Result<ServerReply> {
    let status = response.status();
    let body = response.text().await?;
    debug!(%status, bytes = body.len(), "reply received");

    serde_json::from_str(&body)
        .map_err(|e| ClientError::MalformedReply(format!("status {}: {}", status.as_u16(), e)))
}
