//! Driven port for retrieving user records from a remote service.
//!
//! The domain owns the error taxonomy so the fetch service can stay
//! adapter-agnostic; adapters only decide which variant a failure maps to.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{User, UserId, UserRole};

define_port_error! {
    /// Errors surfaced while retrieving a user record.
    pub enum UserSourceError {
        /// The service answered with a non-success status.
        Status { status: u16, message: String } =>
            "{message}",
        /// The request never produced a readable response.
        Transport { message: String } =>
            "user request transport failed: {message}",
        /// The success body did not match the user record shape.
        Decode { message: String } =>
            "user response decode failed: {message}",
    }
}

impl UserSourceError {
    /// Build a status error with the conventional `HTTP {status}` message.
    pub fn http_status(status: u16) -> Self {
        Self::status(status, format!("HTTP {status}"))
    }

    /// Numeric status for [`UserSourceError::Status`] errors.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport { .. } | Self::Decode { .. } => None,
        }
    }
}

/// Port for looking up one user record by identifier.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Fetch the record for `user_id`, attempting the lookup at most once.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use user_profile::domain::UserId;
    /// use user_profile::domain::ports::{FixtureUserSource, UserSource};
    ///
    /// let user = FixtureUserSource.fetch_user(&UserId::new(42)).await?;
    /// assert_eq!(user.name(), "Ada");
    /// # Ok::<(), user_profile::domain::ports::UserSourceError>(())
    /// ```
    async fn fetch_user(&self, user_id: &UserId) -> Result<User, UserSourceError>;
}

/// Fixture source that always returns the same admin user for any id.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureUserSource;

#[async_trait]
impl UserSource for FixtureUserSource {
    async fn fetch_user(&self, user_id: &UserId) -> Result<User, UserSourceError> {
        Ok(User::new(*user_id, "Ada", "ada@example.com", UserRole::Admin))
    }
}
