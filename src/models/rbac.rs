use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// =============================================================================
// ROLE
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Secretary,
    JointSecretary,
    Volunteer,
    Executive,
    Student,
}

impl Role {
    pub const COUNT: usize = 6;

    pub const ALL: [Role; Role::COUNT] = [
        Role::Admin,
        Role::Secretary,
        Role::JointSecretary,
        Role::Volunteer,
        Role::Executive,
        Role::Student,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Secretary => "secretary",
            Role::JointSecretary => "joint_secretary",
            Role::Volunteer => "volunteer",
            Role::Executive => "executive",
            Role::Student => "student",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownName {
                kind: "role",
                name: s.to_string(),
            })
    }
}

// =============================================================================
// PERMISSION
// =============================================================================

/// Capability checked before an action is offered to the principal.
///
/// `All` is the wildcard: a role holding it passes every query, including
/// queries for tokens outside this catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    All,
    PostCreate,
    PostModerate,
    PostPropose,
    EventCreate,
    EventView,
    GalleryUpload,
    GalleryView,
    MemberView,
    CommentCreate,
    CommentModerate,
    ResourceManage,
}

impl Permission {
    pub const CATALOG: [Permission; 12] = [
        Permission::All,
        Permission::PostCreate,
        Permission::PostModerate,
        Permission::PostPropose,
        Permission::EventCreate,
        Permission::EventView,
        Permission::GalleryUpload,
        Permission::GalleryView,
        Permission::MemberView,
        Permission::CommentCreate,
        Permission::CommentModerate,
        Permission::ResourceManage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::All => "all",
            Permission::PostCreate => "post_create",
            Permission::PostModerate => "post_moderate",
            Permission::PostPropose => "post_propose",
            Permission::EventCreate => "event_create",
            Permission::EventView => "event_view",
            Permission::GalleryUpload => "gallery_upload",
            Permission::GalleryView => "gallery_view",
            Permission::MemberView => "member_view",
            Permission::CommentCreate => "comment_create",
            Permission::CommentModerate => "comment_moderate",
            Permission::ResourceManage => "resource_manage",
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Permission::All)
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::CATALOG
            .into_iter()
            .find(|permission| permission.as_str() == s)
            .ok_or_else(|| UnknownName {
                kind: "permission",
                name: s.to_string(),
            })
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} {name:?}")]
pub struct UnknownName {
    pub kind: &'static str,
    pub name: String,
}
