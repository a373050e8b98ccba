use anyhow::Result;
use portal_access::navigation::{visible_sections, Section};
use portal_access::{create_portal, PortalConfig};

#[test]
fn logged_out_navigation_is_empty() -> Result<()> {
    let portal = create_portal(PortalConfig::default())?;
    assert!(visible_sections(&portal).is_empty());
    Ok(())
}

#[test]
fn admin_and_secretary_see_every_section() -> Result<()> {
    for email in ["admin@student.nitandhra.ac.in", "secretary@student.nitandhra.ac.in"] {
        let mut portal = create_portal(PortalConfig::default())?;
        assert!(portal.login(email, "x"));
        assert_eq!(visible_sections(&portal), Section::ALL.to_vec(), "{email}");
    }
    Ok(())
}

#[test]
fn student_does_not_see_gated_sections() -> Result<()> {
    let mut portal = create_portal(PortalConfig::default())?;
    assert!(portal.login("student@student.nitandhra.ac.in", "x"));

    let ids: Vec<&str> = visible_sections(&portal).iter().map(|s| s.id()).collect();
    assert_eq!(
        ids,
        vec!["dashboard", "events", "gallery", "achievements", "resources", "newsletter"]
    );

    portal.logout();
    assert!(visible_sections(&portal).is_empty());
    Ok(())
}
