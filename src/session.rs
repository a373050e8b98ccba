//! Single-principal session store.
//!
//! The store owns the directory it authenticates against and at most one
//! active [`Principal`]. Only [`SessionStore::try_login`] and
//! [`SessionStore::logout`] change the active principal; both need `&mut`,
//! so there is exactly one writer at a time.

use crate::config::PortalConfig;
use crate::directory::Directory;
use crate::errors::{AppResult, LoginError};
use crate::models::Principal;

#[derive(Debug, Clone)]
pub struct SessionStore {
    config: PortalConfig,
    directory: Directory,
    active: Option<Principal>,
}

impl SessionStore {
    /// Fails if the config's suffix rule is invalid, since an empty suffix
    /// would accept every identifier.
    pub fn new(config: PortalConfig, directory: Directory) -> AppResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            directory,
            active: None,
        })
    }

    /// Looks `identifier` up and installs the match as the active principal.
    ///
    /// The secret is not verified: any value, including the empty string,
    /// is accepted for a known identifier. On error the previous session is
    /// left exactly as it was.
    pub fn try_login(
        &mut self,
        identifier: &str,
        _secret: &str,
    ) -> Result<&Principal, LoginError> {
        if !self.config.accepts_identifier(identifier) {
            tracing::debug!(
                identifier = %identifier,
                suffix = %self.config.email_suffix,
                "login rejected: identifier outside institutional domain"
            );
            return Err(LoginError::MalformedIdentifier {
                identifier: identifier.to_string(),
                suffix: self.config.email_suffix.clone(),
            });
        }

        let Some(found) = self.directory.find_by_email(identifier) else {
            tracing::debug!(
                identifier = %identifier,
                "login rejected: unknown identifier"
            );
            return Err(LoginError::UnknownIdentifier(identifier.to_string()));
        };

        tracing::info!(user_id = %found.id, role = %found.role, "login");
        Ok(self.active.insert(found.clone()))
    }

    pub fn login(&mut self, identifier: &str, secret: &str) -> bool {
        self.try_login(identifier, secret).is_ok()
    }

    pub fn logout(&mut self) {
        if let Some(previous) = self.active.take() {
            tracing::info!(user_id = %previous.id, "logout");
        }
    }

    pub fn current_principal(&self) -> Option<&Principal> {
        self.active.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.active.is_some()
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }
}
