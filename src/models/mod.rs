pub mod rbac;
pub mod user;

pub use rbac::{Permission, Role, UnknownName};
pub use user::Principal;
