//! Reqwest-backed user source adapter.
//!
//! This adapter owns transport details only: URL construction, HTTP status
//! mapping, and JSON decoding into domain users. It performs exactly one
//! request per lookup with no retries or caching.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use thiserror::Error;
use tracing::debug;

use super::dto::UserDto;
use crate::domain::ports::{DiagnosticSink, TracingDiagnostics, UserSource, UserSourceError};
use crate::domain::{FetchOutcome, User, UserFetcher, UserId};

/// Base URL of the public user service.
pub const DEFAULT_BASE_URL: &str = "https://api.example.com";
const DEFAULT_USER_AGENT: &str = "user-profile/0.1";
const USERS_SEGMENT: &str = "users";

/// Errors raised while constructing a [`UserHttpSource`].
#[derive(Debug, Error)]
pub enum UserHttpSourceError {
    /// The base URL could not be parsed.
    #[error("invalid user service base URL {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// The base URL cannot carry path segments (for example `mailto:`).
    #[error("user service base URL {url:?} cannot carry a path")]
    CannotBeABase { url: String },
    /// The reqwest client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// User source that performs HTTP GET requests against one service.
#[derive(Debug, Clone)]
pub struct UserHttpSource {
    client: Client,
    base_url: Url,
}

impl UserHttpSource {
    /// Build an adapter for `base_url`.
    ///
    /// ```rust,ignore
    /// let source = UserHttpSource::new(Url::parse("https://api.example.com")?)?;
    /// ```
    /// # Errors
    ///
    /// Returns an error when the URL cannot carry a path or the reqwest client
    /// cannot be constructed.
    pub fn new(base_url: Url) -> Result<Self, UserHttpSourceError> {
        if base_url.cannot_be_a_base() {
            return Err(UserHttpSourceError::CannotBeABase {
                url: base_url.into(),
            });
        }
        let client = Client::builder().user_agent(DEFAULT_USER_AGENT).build()?;
        Ok(Self { client, base_url })
    }

    /// Parse `base_url` and build an adapter for it.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL is malformed or [`Self::new`] fails.
    pub fn from_base_url(base_url: &str) -> Result<Self, UserHttpSourceError> {
        let parsed =
            Url::parse(base_url).map_err(|source| UserHttpSourceError::InvalidBaseUrl {
                url: base_url.to_owned(),
                source,
            })?;
        Self::new(parsed)
    }

    /// Adapter targeting [`DEFAULT_BASE_URL`].
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_default_base_url() -> Result<Self, UserHttpSourceError> {
        Self::from_base_url(DEFAULT_BASE_URL)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve `{base_url}/users/{id}`, keeping any path prefix on the base.
    fn user_url(&self, user_id: &UserId) -> Result<Url, UserSourceError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                UserSourceError::transport(format!(
                    "base URL {} cannot carry a path",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .push(USERS_SEGMENT)
            .push(&user_id.to_string());
        Ok(url)
    }
}

#[async_trait]
impl UserSource for UserHttpSource {
    async fn fetch_user(&self, user_id: &UserId) -> Result<User, UserSourceError> {
        let url = self.user_url(user_id)?;
        debug!(%url, "requesting user record");
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            // The body only feeds the preview; the status must survive a failed read.
            let body = match response.bytes().await {
                Ok(body) => body,
                Err(error) => {
                    debug!(%status, %error, "discarding unreadable error body");
                    Default::default()
                }
            };
            return Err(map_status_error(status, body.as_ref()));
        }

        let body = response.bytes().await.map_err(map_transport_error)?;
        parse_user(body.as_ref())
    }
}

/// Fetch one user from [`DEFAULT_BASE_URL`], reporting failures via `tracing`.
///
/// Never fails: adapter construction errors are folded into the outcome the
/// same way request errors are.
pub async fn fetch_user(user_id: UserId) -> FetchOutcome {
    match UserHttpSource::with_default_base_url() {
        Ok(source) => {
            UserFetcher::with_tracing(std::sync::Arc::new(source))
                .fetch_user(user_id)
                .await
        }
        Err(error) => {
            let failure = UserSourceError::transport(error.to_string());
            TracingDiagnostics.report_fetch_failure(&user_id, &failure);
            FetchOutcome::failed(failure)
        }
    }
}

fn parse_user(body: &[u8]) -> Result<User, UserSourceError> {
    let decoded: UserDto = serde_json::from_slice(body).map_err(|error| {
        UserSourceError::decode(format!("invalid user JSON payload: {error}"))
    })?;
    decoded.into_domain().map_err(UserSourceError::decode)
}

fn map_transport_error(error: reqwest::Error) -> UserSourceError {
    if error.is_timeout() {
        UserSourceError::transport(format!("timed out: {error}"))
    } else {
        UserSourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> UserSourceError {
    let code = status.as_u16();
    let body_preview = body_preview(body);
    if body_preview.is_empty() {
        UserSourceError::http_status(code)
    } else {
        UserSourceError::status(code, format!("HTTP {code}: {body_preview}"))
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
