//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **users**: reqwest-backed client for the remote user service
//!
//! Adapters are thin translators between wire representations and domain
//! types. They contain no business logic.

pub mod users;
