use serde::Serialize;

use crate::app::Portal;
use crate::models::Permission;

/// Sidebar entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Dashboard,
    Posts,
    Events,
    Gallery,
    Members,
    Achievements,
    Resources,
    Newsletter,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Dashboard,
        Section::Posts,
        Section::Events,
        Section::Gallery,
        Section::Members,
        Section::Achievements,
        Section::Resources,
        Section::Newsletter,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Posts => "posts",
            Section::Events => "events",
            Section::Gallery => "gallery",
            Section::Members => "members",
            Section::Achievements => "achievements",
            Section::Resources => "resources",
            Section::Newsletter => "newsletter",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Posts => "Posts & Notifications",
            Section::Events => "Events",
            Section::Gallery => "Gallery",
            Section::Members => "Members",
            Section::Achievements => "Achievements",
            Section::Resources => "Resources",
            Section::Newsletter => "Newsletter",
        }
    }

    /// Permission required to see the entry, if any.
    pub fn required_permission(&self) -> Option<Permission> {
        match self {
            Section::Posts => Some(Permission::PostCreate),
            Section::Members => Some(Permission::MemberView),
            _ => None,
        }
    }
}

/// Entries the current principal may navigate to. Empty when logged out.
pub fn visible_sections(portal: &Portal) -> Vec<Section> {
    if !portal.is_authenticated() {
        return Vec::new();
    }

    Section::ALL
        .into_iter()
        .filter(|section| match section.required_permission() {
            Some(permission) => portal.has_permission(permission.as_str()),
            None => true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_posts_and_members_are_gated() {
        let gated: Vec<Section> = Section::ALL
            .into_iter()
            .filter(|s| s.required_permission().is_some())
            .collect();
        assert_eq!(gated, vec![Section::Posts, Section::Members]);
    }

    #[test]
    fn ids_match_serde_names() {
        for section in Section::ALL {
            let json = serde_json::to_string(&section).unwrap();
            assert_eq!(json, format!("\"{}\"", section.id()));
        }
    }
}
