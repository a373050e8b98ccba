//! Authorization module - role table and policy evaluation
//!
//! This module implements the portal's RBAC model with support for:
//! - A fixed, validated role -> permission table
//! - The "all" wildcard held by admin
//! - Ownership-aware checks for authored resources

mod context;
mod evaluator;
mod table;

pub use context::ResourceContext;
pub use evaluator::{DefaultPolicyEvaluator, PolicyEvaluator};
pub use table::RolePermissions;
