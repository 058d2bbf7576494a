//! Console roles

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role of whoever is using the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Unauthenticated passenger or visitor
    #[default]
    Guest,
    /// Bus driver
    Driver,
    /// Crew member (cabin, energy, cleaning)
    Employee,
    /// Fleet administrator, sees everything drivers and employees see
    Admin,
}

impl Role {
    /// Every role, in display order
    pub const ALL: [Role; 4] = [Role::Guest, Role::Driver, Role::Employee, Role::Admin];

    /// Display label shown in the UI
    pub fn label(self) -> &'static str {
        match self {
            Role::Guest => "Επισκέπτης",
            Role::Driver => "Οδηγός",
            Role::Employee => "Υπάλληλος",
            Role::Admin => "Διαχειριστής",
        }
    }

    /// Stable lowercase identifier
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::Driver => "driver",
            Role::Employee => "employee",
            Role::Admin => "admin",
        }
    }

    /// The staff role behind this role, `None` for guests
    pub fn staff(self) -> Option<StaffRole> {
        match self {
            Role::Guest => None,
            Role::Driver => Some(StaffRole::Driver),
            Role::Employee => Some(StaffRole::Employee),
            Role::Admin => Some(StaffRole::Admin),
        }
    }

    pub fn is_staff(self) -> bool {
        self.staff().is_some()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Roles a credential can grant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
    Driver,
    Employee,
    Admin,
}

impl StaffRole {
    pub fn label(self) -> &'static str {
        Role::from(self).label()
    }
}

impl From<StaffRole> for Role {
    fn from(role: StaffRole) -> Self {
        match role {
            StaffRole::Driver => Role::Driver,
            StaffRole::Employee => Role::Employee,
            StaffRole::Admin => Role::Admin,
        }
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Role::from(*self).fmt(f)
    }
}
