use super::context::ResourceContext;
use super::table::RolePermissions;
use crate::models::Principal;

/// Policy evaluator trait for pluggable authorization logic
pub trait PolicyEvaluator {
    /// Check if the principal may perform `permission` on the resource in `ctx`
    fn can(&self, principal: &Principal, permission: &str, ctx: &ResourceContext) -> bool;

    /// Check a role permission with no resource involved
    fn has_permission(&self, principal: &Principal, permission: &str) -> bool {
        self.can(principal, permission, &ResourceContext::new())
    }
}

/// Default policy evaluator over a fixed role table
///
/// Evaluation order:
/// 1. role holds the "all" wildcard -> allow
/// 2. role holds the permission verbatim -> allow
/// 3. principal owns the resource -> allow
/// 4. deny
#[derive(Debug, Clone, Default)]
pub struct DefaultPolicyEvaluator {
    table: RolePermissions,
}

impl DefaultPolicyEvaluator {
    pub fn new(table: RolePermissions) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RolePermissions {
        &self.table
    }
}

impl PolicyEvaluator for DefaultPolicyEvaluator {
    fn can(&self, principal: &Principal, permission: &str, ctx: &ResourceContext) -> bool {
        // 1. Wildcard bypasses all checks
        if self.table.is_wildcard(principal.role) {
            tracing::debug!(
                user_id = %principal.id,
                role = %principal.role,
                permission = %permission,
                "wildcard bypass"
            );
            return true;
        }

        // 2. Role permission
        if self.table.grants(principal.role, permission) {
            tracing::debug!(
                user_id = %principal.id,
                role = %principal.role,
                permission = %permission,
                "role permission match"
            );
            return true;
        }

        // 3. Ownership
        if ctx.is_owned_by(principal.id) {
            tracing::debug!(
                user_id = %principal.id,
                permission = %permission,
                resource_type = ?ctx.resource_type,
                "owner match"
            );
            return true;
        }

        // 4. Deny
        tracing::debug!(
            user_id = %principal.id,
            role = %principal.role,
            permission = %permission,
            "permission denied"
        );
        false
    }
}
