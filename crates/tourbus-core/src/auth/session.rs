//! Session state

use serde::{Deserialize, Serialize};

use super::{Role, StaffRole};

/// Who is using the console right now
///
/// A guest never has a username and an authenticated session always has
/// one, so role and username cannot drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Session {
    #[default]
    Guest,
    Authenticated {
        role: StaffRole,
        username: String,
    },
}

impl Session {
    pub fn role(&self) -> Role {
        match self {
            Session::Guest => Role::Guest,
            Session::Authenticated { role, .. } => Role::from(*role),
        }
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            Session::Guest => None,
            Session::Authenticated { username, .. } => Some(username),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guest_has_no_username() {
        let session = Session::default();
        assert_eq!(session.role(), Role::Guest);
        assert_eq!(session.username(), None);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_authenticated_projection() {
        let session = Session::Authenticated {
            role: StaffRole::Employee,
            username: "employee".to_string(),
        };
        assert_eq!(session.role(), Role::Employee);
        assert_eq!(session.username(), Some("employee"));
        assert!(session.is_authenticated());
    }
}
