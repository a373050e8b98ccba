use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::rbac::Role;

/// An identity record from the portal directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    pub id: Uuid,
    pub name: String,
    /// Login key; unique within a directory.
    pub email: String,
    pub role: Role,
    pub batch: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    pub joined_at: DateTime<Utc>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Principal {
    pub fn new(id: Uuid, name: &str, email: &str, role: Role, batch: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role,
            batch: batch.to_string(),
            profile_image: None,
            joined_at: crate::utils::utc_now(),
            is_active: true,
        }
    }

    pub fn with_profile_image(mut self, url: impl Into<String>) -> Self {
        self.profile_image = Some(url.into());
        self
    }

    pub fn with_joined_at(mut self, joined_at: DateTime<Utc>) -> Self {
        self.joined_at = joined_at;
        self
    }
}
