use std::sync::Arc;

use crate::authz::{DefaultPolicyEvaluator, PolicyEvaluator, ResourceContext};
use crate::config::PortalConfig;
use crate::directory::Directory;
use crate::errors::{AppResult, LoginError};
use crate::models::{Principal, Role};
use crate::session::SessionStore;

/// Session store plus authorization resolver, handed to presentation code.
#[derive(Clone)]
pub struct Portal {
    session: SessionStore,
    evaluator: Arc<dyn PolicyEvaluator>,
}

impl Portal {
    pub fn new(session: SessionStore, evaluator: Arc<dyn PolicyEvaluator>) -> Self {
        Self { session, evaluator }
    }

    pub fn login(&mut self, identifier: &str, secret: &str) -> bool {
        self.session.login(identifier, secret)
    }

    pub fn try_login(
        &mut self,
        identifier: &str,
        secret: &str,
    ) -> Result<&Principal, LoginError> {
        self.session.try_login(identifier, secret)
    }

    pub fn logout(&mut self) {
        self.session.logout();
    }

    pub fn current_principal(&self) -> Option<&Principal> {
        self.session.current_principal()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// False whenever nobody is logged in.
    pub fn has_permission(&self, token: &str) -> bool {
        self.current_principal()
            .map(|principal| self.evaluator.has_permission(principal, token))
            .unwrap_or(false)
    }

    /// Like [`has_permission`](Self::has_permission), but also allows the
    /// owner named in `ctx`.
    pub fn can(&self, token: &str, ctx: &ResourceContext) -> bool {
        self.current_principal()
            .map(|principal| self.evaluator.can(principal, token, ctx))
            .unwrap_or(false)
    }

    /// Admin and secretary see the approvals panel on the dashboard.
    pub fn is_officer(&self) -> bool {
        matches!(
            self.current_principal().map(|p| p.role),
            Some(Role::Admin | Role::Secretary)
        )
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }
}

impl std::fmt::Debug for Portal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Portal")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

/// Builds a portal from config: loads the directory file when one is set,
/// otherwise uses the built-in accounts, with the default role table.
pub fn create_portal(config: PortalConfig) -> AppResult<Portal> {
    config.validate()?;

    let directory = match &config.directory_path {
        Some(path) => Directory::from_json_file(path)?,
        None => Directory::mock(),
    };

    let session = SessionStore::new(config, directory)?;
    let evaluator: Arc<dyn PolicyEvaluator> = Arc::new(DefaultPolicyEvaluator::default());
    Ok(Portal::new(session, evaluator))
}
