//! User profile client library.
//!
//! Retrieves user records from a remote service and renders them through a
//! three-state profile view.
//!
//! - [`domain`]: user model, retrieval outcome, profile view, and ports
//! - [`outbound`]: reqwest adapter for the user service
//! - [`config`]: OrthoConfig-backed settings
//! - [`cli`]: command-line flow used by the `user-profile` binary
//! - [`telemetry`]: tracing subscriber bootstrap for binaries

pub mod cli;
pub mod config;
pub mod domain;
pub mod outbound;
pub mod telemetry;

pub use domain::{FetchOutcome, ProfileView, UserProfile, render};
pub use outbound::users::fetch_user;
pub use presentation_utils::format_date;
