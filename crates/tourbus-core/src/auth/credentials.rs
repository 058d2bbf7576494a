//! Fixed credential table
//!
//! Passwords are stored and compared in plain text.

use serde::{Deserialize, Serialize};

use super::StaffRole;

/// One valid login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Human-readable label (e.g. "Driver")
    pub label: String,
    /// Username compared against the trimmed input
    pub username: String,
    /// Password compared verbatim
    pub password: String,
    /// Role granted on a successful match
    pub role: StaffRole,
}

impl Credential {
    pub fn new(
        label: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        role: StaffRole,
    ) -> Self {
        Self {
            label: label.into(),
            username: username.into(),
            password: password.into(),
            role,
        }
    }

    /// Exact, case-sensitive comparison. The username is expected pre-trimmed.
    fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

/// Immutable set of credentials checked by the session authority
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialTable {
    entries: Vec<Credential>,
}

impl CredentialTable {
    /// Create a table from explicit entries
    pub fn new(entries: Vec<Credential>) -> Self {
        Self { entries }
    }

    /// The table shipped with the console
    pub fn builtin() -> Self {
        Self::new(vec![
            Credential::new("Admin", "admin", "admin123", StaffRole::Admin),
            Credential::new("Driver", "driver", "driver123", StaffRole::Driver),
            Credential::new("Employee", "employee", "employee123", StaffRole::Employee),
        ])
    }

    /// Find the credential matching a login attempt
    ///
    /// Leading and trailing whitespace is trimmed from `username` only.
    pub fn find(&self, username: &str, password: &str) -> Option<&Credential> {
        let username = username.trim();
        self.entries
            .iter()
            .find(|credential| credential.matches(username, password))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Credential> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CredentialTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table() {
        let table = CredentialTable::builtin();
        assert_eq!(table.len(), 3);
        assert!(table.iter().any(|c| c.role == StaffRole::Admin));
        assert!(table.iter().any(|c| c.role == StaffRole::Driver));
        assert!(table.iter().any(|c| c.role == StaffRole::Employee));
    }

    #[test]
    fn test_find_trims_username_only() {
        let table = CredentialTable::builtin();
        assert_eq!(
            table.find("  driver  ", "driver123").map(|c| c.role),
            Some(StaffRole::Driver)
        );
        assert!(table.find("driver", " driver123").is_none());
        assert!(table.find("driver", "driver123 ").is_none());
    }

    #[test]
    fn test_find_is_case_sensitive() {
        let table = CredentialTable::builtin();
        assert!(table.find("Admin", "admin123").is_none());
        assert!(table.find("admin", "ADMIN123").is_none());
    }

    #[test]
    fn test_password_whitespace_is_significant() {
        let table = CredentialTable::new(vec![Credential::new(
            "Spacey",
            "spacey",
            "secret ",
            StaffRole::Employee,
        )]);
        assert!(table.find("spacey", "secret").is_none());
        assert!(table.find("spacey", "secret ").is_some());
    }

    #[test]
    fn test_empty_input_does_not_match() {
        let table = CredentialTable::builtin();
        assert!(table.find("", "").is_none());
        assert!(CredentialTable::new(Vec::new()).is_empty());
    }
}
