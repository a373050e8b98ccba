use std::collections::HashSet;
use std::path::Path;

use chrono::{TimeZone, Utc};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::{Principal, Role};

/// Known principals, looked up by email.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    principals: Vec<Principal>,
}

impl Directory {
    /// Fails with a conflict if two entries share an email.
    pub fn new(principals: Vec<Principal>) -> AppResult<Self> {
        let mut seen = HashSet::new();
        for principal in &principals {
            if !seen.insert(principal.email.as_str()) {
                return Err(AppError::conflict(format!(
                    "duplicate directory email {}",
                    principal.email
                )));
            }
        }
        Ok(Self { principals })
    }

    /// The portal's demonstration accounts.
    pub fn mock() -> Self {
        let joined_at = Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).single().unwrap_or_else(Utc::now);
        let principals = vec![
            Principal::new(
                Uuid::from_u128(1),
                "Admin User",
                "admin@student.nitandhra.ac.in",
                Role::Admin,
                "2022",
            )
            .with_joined_at(joined_at),
            Principal::new(
                Uuid::from_u128(2),
                "Secretary",
                "secretary@student.nitandhra.ac.in",
                Role::Secretary,
                "2021",
            )
            .with_joined_at(joined_at),
            Principal::new(
                Uuid::from_u128(3),
                "Student User",
                "student@student.nitandhra.ac.in",
                Role::Student,
                "2023",
            )
            .with_joined_at(joined_at),
        ];
        Self { principals }
    }

    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let de = &mut serde_json::Deserializer::from_str(json);
        let principals: Vec<Principal> = serde_path_to_error::deserialize(de)?;
        Self::new(principals)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let directory = Self::from_json_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            principals = directory.len(),
            "loaded principal directory"
        );
        Ok(directory)
    }

    /// Exact, case-sensitive match on the login key.
    pub fn find_by_email(&self, email: &str) -> Option<&Principal> {
        self.principals.iter().find(|p| p.email == email)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Principal> {
        self.principals.iter()
    }

    pub fn len(&self) -> usize {
        self.principals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.principals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_directory_has_unique_emails() {
        let mock = Directory::mock();
        assert_eq!(mock.len(), 3);
        assert!(Directory::new(mock.iter().cloned().collect()).is_ok());
    }

    #[test]
    fn lookup_is_exact() {
        let mock = Directory::mock();
        let found = mock.find_by_email("student@student.nitandhra.ac.in").unwrap();
        assert_eq!(found.role, Role::Student);
        assert_eq!(found.batch, "2023");
        assert!(mock.find_by_email("Student@student.nitandhra.ac.in").is_none());
        assert!(mock.find_by_email(" student@student.nitandhra.ac.in").is_none());
    }

    #[test]
    fn duplicate_email_is_rejected() {
        let mock = Directory::mock();
        let mut principals: Vec<Principal> = mock.iter().cloned().collect();
        principals.push(principals[0].clone());
        let err = Directory::new(principals).unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[test]
    fn json_errors_carry_the_field_path() {
        let json = r#"[{
            "id": "00000000-0000-0000-0000-000000000009",
            "name": "Vol",
            "email": "vol@student.nitandhra.ac.in",
            "role": "captain",
            "batch": "2024",
            "joinedAt": "2024-08-01T00:00:00Z"
        }]"#;
        let err = Directory::from_json_str(json).unwrap_err();
        match err {
            AppError::InvalidData { path, .. } => assert_eq!(path, "[0].role"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
