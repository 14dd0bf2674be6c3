//! Side channel for reporting retrieval failures.
//!
//! Reporting is fire-and-forget: sinks return nothing and must not block the
//! caller, so a failing sink can never change a fetch outcome.

use tracing::error;

use super::UserSourceError;
use crate::domain::UserId;

/// Receives a notification for every failed user retrieval.
#[cfg_attr(test, mockall::automock)]
pub trait DiagnosticSink: Send + Sync {
    /// Record that fetching `user_id` failed with `error`.
    fn report_fetch_failure(&self, user_id: &UserId, error: &UserSourceError);
}

/// Sink that emits a `tracing` error event per failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn report_fetch_failure(&self, user_id: &UserId, error: &UserSourceError) {
        error!(
            user_id = %user_id,
            status = error.status_code(),
            error = %error,
            "Failed to fetch user"
        );
    }
}

/// Sink that drops every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpDiagnostics;

impl DiagnosticSink for NoOpDiagnostics {
    fn report_fetch_failure(&self, _user_id: &UserId, _error: &UserSourceError) {}
}
