//! Domain types and services for user profiles.
//!
//! Everything here is transport agnostic. Outbound adapters implement the
//! traits in [`ports`]; callers drive [`UserFetcher`] and [`UserProfile`].

pub mod ports;
pub mod profile_view;
pub mod user;
pub mod user_fetch;

pub use profile_view::{LoadedProfile, ProfileView, UserProfile, render};
pub use user::{User, UserId, UserRole, UserValidationError, admin_users};
pub use user_fetch::{FetchOutcome, UserFetcher};
