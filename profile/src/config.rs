//! Client configuration loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::users::DEFAULT_BASE_URL;

/// Configuration values for the user profile client.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PROFILE")]
pub struct ProfileSettings {
    /// Base URL of the user service; `/users/{id}` is appended per request.
    #[ortho_config(default = DEFAULT_BASE_URL.to_owned())]
    pub base_url: String,
}

impl ProfileSettings {
    /// Return the configured base URL, the public service unless overridden.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }
}
