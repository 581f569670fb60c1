//! User directory and session models

use serde::{Deserialize, Serialize};

/// A directory entry, persisted verbatim in the auth snapshot.
///
/// The password is stored in plaintext. That matches the deployed
/// `campus-auth-storage` schema and is only tolerable for this local-only,
/// single-machine directory; anything networked or multi-user must replace
/// it with hashed credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// The currently authenticated user. The email doubles as the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl Principal {
    /// Principal for a directory record
    pub fn for_record(record: &UserRecord) -> Self {
        Self {
            id: record.email.clone(),
            name: record.name.clone(),
            email: record.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_principal_id_is_email() {
        let record = UserRecord {
            email: "ada@campus.edu".to_string(),
            password: "p1".to_string(),
            name: "Ada".to_string(),
        };
        let principal = Principal::for_record(&record);
        assert_eq!(principal.id, "ada@campus.edu");
        assert_eq!(principal.email, "ada@campus.edu");
        assert_eq!(principal.name, "Ada");
    }
}
