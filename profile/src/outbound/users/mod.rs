//! User service outbound adapters.
//!
//! This module provides a thin HTTP implementation of the `UserSource` port
//! plus a one-call helper that targets the default endpoint.

mod dto;
mod http_source;

pub use http_source::{DEFAULT_BASE_URL, UserHttpSource, UserHttpSourceError, fetch_user};
