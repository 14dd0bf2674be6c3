//! User data model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Validation errors raised while building domain users from raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    UnknownRole { label: String },
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownRole { label } => write!(
                f,
                "role must be one of admin, user, or guest (got {label:?})",
            ),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Numeric user identifier as understood by the remote user service.
///
/// No local range checks are applied; the remote service decides whether an
/// identifier refers to an existing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Wrap a raw identifier.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = std::num::ParseIntError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value.trim().parse().map(Self)
    }
}

/// Closed set of roles a user may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full administrative access.
    Admin,
    /// Regular signed-in user.
    User,
    /// Anonymous or limited visitor.
    Guest,
}

impl UserRole {
    /// Wire label used by the remote service.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
            Self::Guest => "guest",
        }
    }

    /// Uppercased label shown in profile views.
    pub const fn display_label(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::User => "USER",
            Self::Guest => "GUEST",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = UserValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            "guest" => Ok(Self::Guest),
            other => Err(UserValidationError::UnknownRole {
                label: other.to_owned(),
            }),
        }
    }
}

/// User record retrieved from the remote service.
///
/// ## Invariants
/// - `role` is always one of the three [`UserRole`] variants.
/// - `active` defaults to `true` when the remote payload omits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    role: UserRole,
    active: bool,
}

impl User {
    /// Build an active user.
    ///
    /// # Examples
    /// ```
    /// use user_profile::domain::{User, UserId, UserRole};
    ///
    /// let user = User::new(UserId::new(42), "Ada", "ada@example.com", UserRole::Admin);
    /// assert!(user.is_admin());
    /// assert_eq!(user.greeting(), "Hello, Ada!");
    /// ```
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        role: UserRole,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role,
            active: true,
        }
    }

    /// Override the active flag.
    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the user holds the admin role.
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Greeting line shown at the top of the profile.
    pub fn greeting(&self) -> String {
        format!("Hello, {}!", self.name)
    }
}

/// Return the active administrators from `users`, preserving order.
pub fn admin_users(users: &[User]) -> Vec<User> {
    users
        .iter()
        .filter(|user| user.is_admin() && user.is_active())
        .cloned()
        .collect()
}
