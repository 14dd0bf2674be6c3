//! User retrieval service.
//!
//! Wraps the [`UserSource`] port so callers always receive a
//! [`FetchOutcome`] value. Transport, status, and decode failures are
//! coalesced into a single error string and reported to the diagnostic sink.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::domain::ports::{DiagnosticSink, TracingDiagnostics, UserSource};
use crate::domain::{User, UserId};

const FALLBACK_ERROR: &str = "fetch failed";

/// Result of one retrieval attempt.
///
/// ## Invariants
/// - `error` is only populated, and never blank, when `data` is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchOutcome {
    data: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl FetchOutcome {
    /// Outcome carrying a retrieved user.
    pub fn found(user: User) -> Self {
        Self {
            data: Some(user),
            error: None,
        }
    }

    /// Outcome carrying the description of a failure.
    ///
    /// # Examples
    /// ```
    /// use user_profile::domain::FetchOutcome;
    ///
    /// let outcome = FetchOutcome::failed("HTTP 404");
    /// assert!(outcome.data().is_none());
    /// assert_eq!(outcome.error(), Some("HTTP 404"));
    /// ```
    pub fn failed(error: impl fmt::Display) -> Self {
        let message = error.to_string();
        let message = if message.trim().is_empty() {
            FALLBACK_ERROR.to_owned()
        } else {
            message
        };
        Self {
            data: None,
            error: Some(message),
        }
    }

    pub fn data(&self) -> Option<&User> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Consume the outcome, keeping only the user.
    pub fn into_data(self) -> Option<User> {
        self.data
    }
}

/// Fetches users through a [`UserSource`] and never fails.
#[derive(Clone)]
pub struct UserFetcher {
    source: Arc<dyn UserSource>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl UserFetcher {
    /// Build a fetcher with an explicit diagnostic sink.
    pub fn new(source: Arc<dyn UserSource>, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            source,
            diagnostics,
        }
    }

    /// Build a fetcher that reports failures through `tracing`.
    pub fn with_tracing(source: Arc<dyn UserSource>) -> Self {
        Self::new(source, Arc::new(TracingDiagnostics))
    }

    /// Retrieve `user_id`, converting every failure into an outcome value.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use user_profile::domain::{UserFetcher, UserId};
    /// use user_profile::domain::ports::FixtureUserSource;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let fetcher = UserFetcher::with_tracing(Arc::new(FixtureUserSource));
    /// let outcome = fetcher.fetch_user(UserId::new(42)).await;
    /// assert_eq!(outcome.data().map(|user| user.name()), Some("Ada"));
    /// assert!(outcome.error().is_none());
    /// # });
    /// ```
    #[instrument(skip_all, fields(user_id = %user_id))]
    pub async fn fetch_user(&self, user_id: UserId) -> FetchOutcome {
        match self.source.fetch_user(&user_id).await {
            Ok(user) => {
                debug!("user fetched");
                FetchOutcome::found(user)
            }
            Err(error) => {
                self.diagnostics.report_fetch_failure(&user_id, &error);
                FetchOutcome::failed(error)
            }
        }
    }
}

impl fmt::Debug for UserFetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserFetcher").finish_non_exhaustive()
    }
}
