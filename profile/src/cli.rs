//! Command-line flow for the `user-profile` binary.
//!
//! The binary delegates to these functions so base URL resolution and
//! rendering can be exercised in tests without spawning a subprocess.

use std::ffi::OsString;
use std::sync::Arc;

use clap::Parser;
use ortho_config::OrthoConfig;
use thiserror::Error;
use tracing::info;

use crate::config::ProfileSettings;
use crate::domain::{UserFetcher, UserId, UserProfile};
use crate::outbound::users::{UserHttpSource, UserHttpSourceError};

const PROGRAM_NAME: &str = "user-profile";

/// `user-profile` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "user-profile",
    about = "Fetch a user record and print its rendered profile",
    version
)]
pub struct CliArgs {
    /// Identifier of the user to show.
    #[arg(value_name = "USER_ID")]
    pub user_id: UserId,
    /// User service base URL. Falls back to `PROFILE_BASE_URL`, then the
    /// public service.
    #[arg(long = "base-url", value_name = "url")]
    pub base_url: Option<String>,
}

/// Setup failures surfaced by the command-line flow.
///
/// Retrieval failures are not errors here; they render as the not found view.
#[derive(Debug, Error)]
pub enum CliError {
    /// Layered settings could not be merged.
    #[error("load settings: {message}")]
    Settings {
        /// Merge failure reported by OrthoConfig.
        message: String,
    },
    /// The resolved base URL cannot back an HTTP adapter.
    #[error(transparent)]
    Source(#[from] UserHttpSourceError),
}

/// Load [`ProfileSettings`] from configuration files and the environment.
///
/// # Errors
///
/// Returns [`CliError::Settings`] when the configuration layers cannot be
/// merged.
pub fn load_settings() -> Result<ProfileSettings, CliError> {
    ProfileSettings::load_from_iter([OsString::from(PROGRAM_NAME)]).map_err(|error| {
        CliError::Settings {
            message: error.to_string(),
        }
    })
}

/// Pick the base URL: the flag wins over settings.
///
/// # Examples
/// ```
/// use clap::Parser;
/// use user_profile::cli::{CliArgs, load_settings, resolve_base_url};
///
/// let args = CliArgs::parse_from(["user-profile", "42", "--base-url", "http://localhost:9000"]);
/// let settings = load_settings().expect("settings load");
/// assert_eq!(resolve_base_url(&args, &settings), "http://localhost:9000");
/// ```
#[must_use]
pub fn resolve_base_url<'a>(args: &'a CliArgs, settings: &'a ProfileSettings) -> &'a str {
    args.base_url.as_deref().unwrap_or_else(|| settings.base_url())
}

/// Fetch the requested user and return the rendered profile markup.
///
/// A missing user or failed request still succeeds with the not found view.
///
/// # Errors
///
/// Returns [`CliError::Source`] when the resolved base URL is unusable.
pub async fn run(args: &CliArgs, settings: &ProfileSettings) -> Result<String, CliError> {
    let base_url = resolve_base_url(args, settings);
    let source = UserHttpSource::from_base_url(base_url)?;
    let fetcher = UserFetcher::with_tracing(Arc::new(source));

    let mut profile = UserProfile::new(args.user_id);
    profile.refresh(&fetcher).await;
    info!(user_id = %args.user_id, %base_url, "profile resolved");

    Ok(profile.render())
}
