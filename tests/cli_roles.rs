use std::fs;
use std::process::Command;

use anyhow::{Context, Result};
use tempfile::tempdir;

fn portal_access() -> Command {
    Command::new(env!("CARGO_BIN_EXE_portal-access"))
}

#[test]
fn roles_ignores_a_broken_directory_file() -> Result<()> {
    let dir = tempdir().context("failed to create tempdir")?;
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json")?;

    let output = portal_access()
        .arg("roles")
        .env("PORTAL_DIRECTORY", &path)
        .output()
        .context("failed to run portal-access")?;

    assert!(output.status.success(), "roles failed: {:?}", output);
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("admin"));
    assert!(stdout.contains("joint_secretary"));
    assert!(stdout.contains("comment_create"));
    Ok(())
}

#[test]
fn login_commands_still_report_a_broken_directory_file() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json")?;

    let output = portal_access()
        .args(["whoami", "--email", "admin@student.nitandhra.ac.in"])
        .env("PORTAL_DIRECTORY", &path)
        .output()
        .context("failed to run portal-access")?;

    assert!(!output.status.success());
    Ok(())
}
