//! Home-screen shortcut cards per role

use serde::Serialize;

use crate::auth::Role;

/// Dashboard a shortcut opens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Destination {
    DriverConsole,
    DriverAssistance,
    ClimateControl,
    EnergyStation,
    CrewControl,
    RobotVacuum,
}

impl Destination {
    pub fn title(self) -> &'static str {
        match self {
            Destination::DriverConsole => "Κονσόλα Οδηγού",
            Destination::DriverAssistance => "Υποβοήθηση Οδηγού",
            Destination::ClimateControl => "Έλεγχος Κλίματος",
            Destination::EnergyStation => "Ενέργεια Οχήματος",
            Destination::CrewControl => "Έλεγχος Πληρώματος",
            Destination::RobotVacuum => "Ρομπότ Καθαρισμού",
        }
    }
}

/// A shortcut card on the home screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shortcut {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tag: &'static str,
    pub icon: &'static str,
    pub destination: Destination,
}

const DRIVER_CARDS: [Shortcut; 2] = [
    Shortcut {
        id: "driver-dashboard",
        title: "Κονσόλα Οδηγού",
        description: "Βασικά εργαλεία οδήγησης.",
        tag: "Οδηγός",
        icon: "bus",
        destination: Destination::DriverConsole,
    },
    Shortcut {
        id: "driver-climate",
        title: "Έλεγχος Κλίματος",
        description: "Ρύθμισε θερμοκρασία και εξαερισμό.",
        tag: "Κλίμα",
        icon: "fan",
        destination: Destination::ClimateControl,
    },
];

const EMPLOYEE_CARDS: [Shortcut; 3] = [
    Shortcut {
        id: "employee-control",
        title: "Έλεγχος Πληρώματος",
        description: "Καθημερινές λειτουργίες πληρώματος.",
        tag: "Προσωπικό",
        icon: "account",
        destination: Destination::CrewControl,
    },
    Shortcut {
        id: "employee-energy",
        title: "Ενέργεια Οχήματος",
        description: "Κατάσταση κατανάλωσης και φόρτισης.",
        tag: "Ενέργεια",
        icon: "battery-charging",
        destination: Destination::EnergyStation,
    },
    Shortcut {
        id: "employee-robot",
        title: "Ρομπότ Καθαρισμού",
        description: "Έλεγχος ρομπότ καμπίνας.",
        tag: "Καθαριότητα",
        icon: "robot",
        destination: Destination::RobotVacuum,
    },
];

/// Shortcut cards for a role; administrators get the driver cards followed by the employee cards
pub fn shortcuts_for(role: Role) -> Vec<Shortcut> {
    match role {
        Role::Guest => Vec::new(),
        Role::Driver => DRIVER_CARDS.to_vec(),
        Role::Employee => EMPLOYEE_CARDS.to_vec(),
        Role::Admin => DRIVER_CARDS.iter().chain(EMPLOYEE_CARDS.iter()).cloned().collect(),
    }
}

/// Whether `role` may open `destination`
///
/// A dashboard is open to a role exactly when one of its shortcuts leads
/// there; driver assistance comes with the driver console.
pub fn allows(role: Role, destination: Destination) -> bool {
    let target = match destination {
        Destination::DriverAssistance => Destination::DriverConsole,
        other => other,
    };
    shortcuts_for(role).iter().any(|s| s.destination == target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(role: Role) -> Vec<&'static str> {
        shortcuts_for(role).iter().map(|s| s.id).collect()
    }

    #[test]
    fn test_guest_has_no_shortcuts() {
        assert!(shortcuts_for(Role::Guest).is_empty());
    }

    #[test]
    fn test_driver_and_employee_cards() {
        assert_eq!(ids(Role::Driver), vec!["driver-dashboard", "driver-climate"]);
        assert_eq!(
            ids(Role::Employee),
            vec!["employee-control", "employee-energy", "employee-robot"]
        );
    }

    #[test]
    fn test_admin_is_union_in_order() {
        let mut expected = ids(Role::Driver);
        expected.extend(ids(Role::Employee));
        assert_eq!(ids(Role::Admin), expected);
    }

    #[test]
    fn test_allows() {
        assert!(!allows(Role::Guest, Destination::DriverConsole));
        assert!(allows(Role::Driver, Destination::DriverAssistance));
        assert!(allows(Role::Driver, Destination::ClimateControl));
        assert!(!allows(Role::Driver, Destination::EnergyStation));
        assert!(!allows(Role::Employee, Destination::DriverAssistance));
        assert!(allows(Role::Employee, Destination::CrewControl));
        assert!(allows(Role::Admin, Destination::RobotVacuum));
        assert!(allows(Role::Admin, Destination::DriverAssistance));
    }

    #[test]
    fn test_destinations() {
        let admin = shortcuts_for(Role::Admin);
        assert_eq!(admin[0].destination, Destination::DriverConsole);
        assert_eq!(admin[3].destination, Destination::EnergyStation);
        assert_eq!(admin[4].destination, Destination::RobotVacuum);
    }
}
