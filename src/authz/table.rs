use std::collections::BTreeSet;

use crate::errors::AppError;
use crate::models::{Permission, Role};

/// Fixed role -> permission-set mapping.
///
/// Stored as one slot per [`Role`] variant, so every role always has an
/// entry; construction additionally rejects empty sets. The table is never
/// mutated after it is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolePermissions {
    slots: [BTreeSet<Permission>; Role::COUNT],
}

impl RolePermissions {
    /// Builds a table from explicit entries.
    ///
    /// Every role must appear exactly once with at least one permission.
    pub fn new<I, P>(entries: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = (Role, P)>,
        P: IntoIterator<Item = Permission>,
    {
        let mut slots: [Option<BTreeSet<Permission>>; Role::COUNT] = Default::default();

        for (role, permissions) in entries {
            let slot = &mut slots[slot_index(role)];
            if slot.is_some() {
                return Err(AppError::configuration(format!(
                    "role {role} is mapped more than once"
                )));
            }
            let set: BTreeSet<Permission> = permissions.into_iter().collect();
            if set.is_empty() {
                return Err(AppError::configuration(format!(
                    "role {role} has an empty permission set"
                )));
            }
            *slot = Some(set);
        }

        let missing: Vec<&str> = Role::ALL
            .iter()
            .filter(|role| slots[slot_index(**role)].is_none())
            .map(|role| role.as_str())
            .collect();
        if !missing.is_empty() {
            return Err(AppError::configuration(format!(
                "roles without a permission entry: {}",
                missing.join(", ")
            )));
        }

        Ok(Self {
            slots: slots.map(Option::unwrap_or_default),
        })
    }

    pub fn permissions_for(&self, role: Role) -> &BTreeSet<Permission> {
        &self.slots[slot_index(role)]
    }

    /// True if `role` holds the wildcard or exactly `token`.
    pub fn grants(&self, role: Role, token: &str) -> bool {
        let set = self.permissions_for(role);
        if set.contains(&Permission::All) {
            return true;
        }
        token
            .parse::<Permission>()
            .map(|permission| set.contains(&permission))
            .unwrap_or(false)
    }

    pub fn is_wildcard(&self, role: Role) -> bool {
        self.permissions_for(role).contains(&Permission::All)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Role, &BTreeSet<Permission>)> + '_ {
        Role::ALL.into_iter().map(move |role| (role, self.permissions_for(role)))
    }
}

fn slot_index(role: Role) -> usize {
    role as usize
}

impl Default for RolePermissions {
    fn default() -> Self {
        use Permission::*;

        let slots = [
            // admin
            BTreeSet::from([All]),
            // secretary
            BTreeSet::from([
                PostCreate,
                PostModerate,
                EventCreate,
                GalleryUpload,
                MemberView,
                CommentModerate,
            ]),
            // joint_secretary
            BTreeSet::from([
                PostCreate,
                EventCreate,
                GalleryUpload,
                MemberView,
                CommentModerate,
            ]),
            // volunteer
            BTreeSet::from([PostPropose, CommentCreate, GalleryView]),
            // executive
            BTreeSet::from([
                PostPropose,
                CommentCreate,
                CommentModerate,
                GalleryView,
                ResourceManage,
            ]),
            // student
            BTreeSet::from([CommentCreate, GalleryView, EventView]),
        ];

        Self { slots }
    }
}
