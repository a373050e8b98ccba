use std::fs;

use anyhow::{Context, Result};
use portal_access::{create_portal, AppError, PortalConfig, Role};
use tempfile::tempdir;

const DIRECTORY_JSON: &str = r#"[
    {
        "id": "00000000-0000-0000-0000-000000000010",
        "name": "Joint Secretary",
        "email": "joint@student.nitandhra.ac.in",
        "role": "joint_secretary",
        "batch": "2022",
        "joinedAt": "2024-08-01T09:30:00Z"
    },
    {
        "id": "00000000-0000-0000-0000-000000000011",
        "name": "Volunteer",
        "email": "volunteer@student.nitandhra.ac.in",
        "role": "volunteer",
        "batch": "2024",
        "profileImage": "https://example.org/v.png",
        "joinedAt": "2024-08-02T09:30:00Z",
        "isActive": false
    }
]"#;

#[test]
fn portal_loads_principals_from_json_file() -> Result<()> {
    let dir = tempdir().context("failed to create tempdir")?;
    let path = dir.path().join("directory.json");
    fs::write(&path, DIRECTORY_JSON)?;

    let mut portal = create_portal(PortalConfig::default().with_directory_path(&path))?;
    assert_eq!(portal.session().directory().len(), 2);

    // Built-in accounts are not merged in.
    assert!(!portal.login("admin@student.nitandhra.ac.in", "x"));

    assert!(portal.login("joint@student.nitandhra.ac.in", "x"));
    assert_eq!(portal.current_principal().map(|p| p.role), Some(Role::JointSecretary));
    assert!(portal.has_permission("event_create"));
    assert!(!portal.has_permission("post_moderate"));

    assert!(portal.login("volunteer@student.nitandhra.ac.in", "x"));
    let volunteer = portal.current_principal().context("volunteer logged in")?;
    assert!(!volunteer.is_active);
    assert_eq!(volunteer.profile_image.as_deref(), Some("https://example.org/v.png"));
    assert!(portal.has_permission("post_propose"));
    Ok(())
}

#[test]
fn missing_directory_file_is_an_io_error() -> Result<()> {
    let dir = tempdir()?;
    let config = PortalConfig::default().with_directory_path(dir.path().join("absent.json"));
    let err = create_portal(config).unwrap_err();
    assert!(matches!(err, AppError::Io(_)));
    Ok(())
}

#[test]
fn duplicate_emails_in_file_are_rejected() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("dupes.json");
    let entry = r#"{
        "id": "00000000-0000-0000-0000-000000000012",
        "name": "Exec",
        "email": "exec@student.nitandhra.ac.in",
        "role": "executive",
        "batch": "2023",
        "joinedAt": "2024-08-01T00:00:00Z"
    }"#;
    fs::write(&path, format!("[{entry}, {entry}]"))?;

    let err = create_portal(PortalConfig::default().with_directory_path(&path)).unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
    Ok(())
}
