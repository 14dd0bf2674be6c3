//! DTOs for decoding user service JSON responses.
//!
//! The adapter decodes into this transport DTO first, then maps it into the
//! domain [`User`] in one pass so unknown role labels surface as decode errors.

use serde::Deserialize;

use crate::domain::{User, UserId, UserRole};

const fn default_active() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub(super) struct UserDto {
    pub(super) id: u64,
    pub(super) name: String,
    pub(super) email: String,
    pub(super) role: String,
    #[serde(default = "default_active")]
    pub(super) active: bool,
}

impl UserDto {
    pub(super) fn into_domain(self) -> Result<User, String> {
        let role = self
            .role
            .parse::<UserRole>()
            .map_err(|error| format!("user {}: {error}", self.id))?;
        Ok(User::new(UserId::new(self.id), self.name, self.email, role).with_active(self.active))
    }
}
