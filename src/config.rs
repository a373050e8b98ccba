use std::path::PathBuf;

use serde::Deserialize;

use crate::errors::AppError;

pub const DEFAULT_EMAIL_SUFFIX: &str = "@student.nitandhra.ac.in";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PortalConfig {
    /// Every login identifier must end with this suffix.
    #[serde(default = "default_email_suffix")]
    pub email_suffix: String,
    /// JSON file with the principal directory; the built-in one is used when unset.
    #[serde(default)]
    pub directory_path: Option<PathBuf>,
}

fn default_email_suffix() -> String {
    DEFAULT_EMAIL_SUFFIX.to_string()
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            email_suffix: default_email_suffix(),
            directory_path: None,
        }
    }
}

impl PortalConfig {
    pub fn new(email_suffix: impl Into<String>) -> Result<Self, AppError> {
        let config = Self {
            email_suffix: email_suffix.into(),
            directory_path: None,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads `PORTAL_EMAIL_SUFFIX` and `PORTAL_DIRECTORY` through `lookup`.
    /// Missing or blank values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let email_suffix = non_blank("PORTAL_EMAIL_SUFFIX").unwrap_or_else(default_email_suffix);
        let directory_path = non_blank("PORTAL_DIRECTORY").map(PathBuf::from);

        let config = Self {
            email_suffix,
            directory_path,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_directory_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.directory_path = Some(path.into());
        self
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let domain = self.email_suffix.strip_prefix('@').ok_or_else(|| {
            AppError::configuration(format!(
                "email suffix {:?} must start with '@'",
                self.email_suffix
            ))
        })?;
        if domain.is_empty() {
            return Err(AppError::configuration("email suffix must name a domain"));
        }
        Ok(())
    }

    /// Domain-membership rule for login identifiers. A format check only.
    pub fn accepts_identifier(&self, identifier: &str) -> bool {
        identifier.ends_with(&self.email_suffix)
    }
}
