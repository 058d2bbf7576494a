//! Driver assistance overview (static)

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssistanceStatus {
    Active,
    Standby,
    Warning,
    Offline,
}

impl AssistanceStatus {
    pub fn label(self) -> &'static str {
        match self {
            AssistanceStatus::Active => "Ενεργό",
            AssistanceStatus::Standby => "Αναμονή",
            AssistanceStatus::Warning => "Προσοχή",
            AssistanceStatus::Offline => "Εκτός",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Caution,
    Critical,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Info => "Ενημέρωση",
            Severity::Caution => "Προσοχή",
            Severity::Critical => "Κρίσιμο",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct AssistanceSummary {
    pub route_name: &'static str,
    pub last_update: &'static str,
    pub safety_score: &'static str,
    pub conditions: &'static str,
    pub next_break: &'static str,
    pub system_status: AssistanceStatus,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct AssistanceMetric {
    pub id: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub unit: Option<&'static str>,
    pub helper: &'static str,
    pub status: AssistanceStatus,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct AssistanceAlert {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub time: &'static str,
    pub severity: Severity,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct AssistanceAction {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub status: AssistanceStatus,
    /// Overrides the generic status label on the action card
    pub status_label: &'static str,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ChecklistItem {
    pub id: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
    pub status: AssistanceStatus,
}

pub static SUMMARY: AssistanceSummary = AssistanceSummary {
    route_name: "Κυκλική Διαδρομή Α",
    last_update: "Ενημερώθηκε πριν από 1 λεπτό",
    safety_score: "95",
    conditions: "Στάση σε στάση",
    next_break: "10 λεπτά",
    system_status: AssistanceStatus::Active,
};

pub static METRICS: &[AssistanceMetric] = &[
    AssistanceMetric {
        id: "speed",
        label: "Ταχύτητα",
        value: "0",
        unit: Some("km/h"),
        helper: "Σταματημένο για επιβίβαση",
        status: AssistanceStatus::Active,
    },
    AssistanceMetric {
        id: "distance",
        label: "Απόσταση",
        value: "0.0",
        unit: Some("sec"),
        helper: "Στάση σε φανάρι/στάση",
        status: AssistanceStatus::Active,
    },
    AssistanceMetric {
        id: "lane",
        label: "Απόκλιση λωρίδας",
        value: "0.0",
        unit: Some("m"),
        helper: "Κεντραρισμένο στη στάση",
        status: AssistanceStatus::Active,
    },
    AssistanceMetric {
        id: "attention",
        label: "Εστίαση οδηγού",
        value: "Καλή",
        unit: None,
        helper: "Μάτια στον δρόμο",
        status: AssistanceStatus::Active,
    },
    AssistanceMetric {
        id: "doors",
        label: "Θύρες",
        value: "1",
        unit: Some("ανοικτή"),
        helper: "Πίσω-αριστερή ανοικτή στη στάση",
        status: AssistanceStatus::Warning,
    },
    AssistanceMetric {
        id: "tires",
        label: "Πίεση ελαστικών",
        value: "OK",
        unit: None,
        helper: "Όλοι οι αισθητήρες φυσιολογικοί",
        status: AssistanceStatus::Standby,
    },
];

pub static ALERTS: &[AssistanceAlert] = &[
    AssistanceAlert {
        id: "alert-fatigue",
        title: "Αυξημένος κίνδυνος κόπωσης",
        description: "Συνιστάται διάλειμμα μέσα σε 12 λεπτά. Τεντωθείτε και ενυδατωθείτε.",
        time: "Μόλις τώρα",
        severity: Severity::Caution,
    },
    AssistanceAlert {
        id: "alert-door",
        title: "Πίσω-αριστερή θύρα μισάνοιχτη",
        description: "Η θύρα είναι ανοικτή για επιβίβαση. Κλείσιμο πριν την αναχώρηση.",
        time: "Πριν από 1 λεπτό",
        severity: Severity::Critical,
    },
    AssistanceAlert {
        id: "alert-lane",
        title: "Εντοπίστηκε απόκλιση λωρίδας",
        description: "Η υποβοήθηση λωρίδας διόρθωσε μικρή απόκλιση στην τελευταία στροφή.",
        time: "Πριν από 6 λεπτά",
        severity: Severity::Info,
    },
];

pub static ACTIONS: &[AssistanceAction] = &[
    AssistanceAction {
        id: "action-lka",
        label: "Υποβοήθηση λωρίδας",
        description: "Διορθώνει απαλά για να μείνετε κεντραρισμένοι.",
        status: AssistanceStatus::Active,
        status_label: "Ενεργό",
    },
    AssistanceAction {
        id: "action-acc",
        label: "Προσαρμοζόμενο cruise",
        description: "Διατηρεί απόσταση στην κίνηση.",
        status: AssistanceStatus::Active,
        status_label: "Αυτόματο",
    },
    AssistanceAction {
        id: "action-fcw",
        label: "Πρόσκρουση εμπρός",
        description: "Προειδοποιεί και προετοιμάζει φρένα.",
        status: AssistanceStatus::Active,
        status_label: "Παρακολούθηση",
    },
    AssistanceAction {
        id: "action-bsm",
        label: "Έλεγχος τυφλού σημείου",
        description: "Οι πλευρικοί αισθητήρες σαρώνουν.",
        status: AssistanceStatus::Standby,
        status_label: "Αναμονή",
    },
    AssistanceAction {
        id: "action-doors",
        label: "Ασφάλεια θυρών",
        description: "Αποτρέπει άνοιγμα εν κινήσει.",
        status: AssistanceStatus::Warning,
        status_label: "Έτοιμο",
    },
    AssistanceAction {
        id: "action-camera",
        label: "Κάμερα οδηγού",
        description: "Εντοπίζει απόσπαση και κόπωση.",
        status: AssistanceStatus::Active,
        status_label: "Ζωντανό",
    },
];

pub static CHECKLIST: &[ChecklistItem] = &[
    ChecklistItem {
        id: "check-mirror",
        title: "Ολοκληρώθηκε έλεγχος καθρεφτών",
        detail: "Έλεγχος αριστερού, δεξιού και καμπίνας.",
        status: AssistanceStatus::Active,
    },
    ChecklistItem {
        id: "check-doors",
        title: "Επιβεβαίωση κλειδώματος θυρών",
        detail: "Η πίσω-αριστερή θύρα είναι ανοικτή στη στάση. Κλείσιμο πριν την αναχώρηση.",
        status: AssistanceStatus::Warning,
    },
    ChecklistItem {
        id: "check-passengers",
        title: "Καταμέτρηση επιβατών",
        detail: "32 επιβάτες, 4 αναμένονται να αποβιβαστούν.",
        status: AssistanceStatus::Standby,
    },
];

/// Checklist items that still need the driver's attention
pub fn open_checks() -> impl Iterator<Item = &'static ChecklistItem> {
    CHECKLIST
        .iter()
        .filter(|item| item.status != AssistanceStatus::Active)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(SUMMARY.system_status.label(), "Ενεργό");
        assert_eq!(Severity::Critical.label(), "Κρίσιμο");
        assert_eq!(AssistanceStatus::Offline.label(), "Εκτός");
    }

    #[test]
    fn test_tables() {
        assert_eq!(METRICS.len(), 6);
        assert_eq!(ALERTS.len(), 3);
        assert_eq!(ACTIONS.len(), 6);
        assert!(METRICS.iter().any(|m| m.unit.is_none()));
    }

    #[test]
    fn test_open_checks() {
        let open: Vec<_> = open_checks().map(|item| item.id).collect();
        assert_eq!(open, vec!["check-doors", "check-passengers"]);
    }
}
