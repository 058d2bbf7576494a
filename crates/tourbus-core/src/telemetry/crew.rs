//! Crew control: who is on board, which roles are covered, what is due

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StaffStatus {
    OnDuty,
    Break,
    OffDuty,
    Support,
    Training,
}

impl StaffStatus {
    pub fn label(self) -> &'static str {
        match self {
            StaffStatus::OnDuty => "Σε υπηρεσία",
            StaffStatus::Break => "Διάλειμμα",
            StaffStatus::OffDuty => "Εκτός βάρδιας",
            StaffStatus::Support => "Υποστήριξη",
            StaffStatus::Training => "Εκπαίδευση",
        }
    }

    /// Counts towards the crew on board
    pub fn is_onboard(self) -> bool {
        matches!(
            self,
            StaffStatus::OnDuty | StaffStatus::Break | StaffStatus::Training
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverageStatus {
    Ok,
    Thin,
    Critical,
}

impl CoverageStatus {
    /// One short is thin, anything more is critical
    pub fn from_counts(assigned: u8, required: u8) -> Self {
        match required.saturating_sub(assigned) {
            0 => CoverageStatus::Ok,
            1 => CoverageStatus::Thin,
            _ => CoverageStatus::Critical,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CoverageStatus::Ok => "Πλήρης κάλυψη",
            CoverageStatus::Thin => "Οριακή κάλυψη",
            CoverageStatus::Critical => "Ελλιπής κάλυψη",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Info,
    Attention,
    Urgent,
}

impl AlertSeverity {
    pub fn label(self) -> &'static str {
        match self {
            AlertSeverity::Info => "Ενημέρωση",
            AlertSeverity::Attention => "Προσοχή",
            AlertSeverity::Urgent => "Επείγον",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Done,
}

impl TaskStatus {
    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Pending => "Σε αναμονή",
            TaskStatus::InProgress => "Σε εξέλιξη",
            TaskStatus::Done => "Ολοκληρώθηκε",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct RoleCoverage {
    pub id: &'static str,
    pub role: &'static str,
    pub assigned: u8,
    pub required: u8,
}

impl RoleCoverage {
    pub fn status(&self) -> CoverageStatus {
        CoverageStatus::from_counts(self.assigned, self.required)
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct StaffMember {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub status: StaffStatus,
    pub location: &'static str,
    pub shift: &'static str,
    pub contact: &'static str,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct StaffAlert {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub time: &'static str,
    pub severity: AlertSeverity,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct DutyTask {
    pub id: &'static str,
    pub title: &'static str,
    pub area: &'static str,
    pub owner: &'static str,
    pub due: &'static str,
    pub status: TaskStatus,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct CrewInfo {
    pub vehicle_id: &'static str,
    pub route_name: &'static str,
    pub shift_window: &'static str,
    pub last_update: &'static str,
    pub next_changeover: &'static str,
}

pub static INFO: CrewInfo = CrewInfo {
    vehicle_id: "ΛΕΩΦ-204",
    route_name: "Ακρόπολη - Σούνιο",
    shift_window: "06:30 - 14:30",
    last_update: "Πριν από 3 λεπτά",
    next_changeover: "14:30",
};

pub static COVERAGE: &[RoleCoverage] = &[
    RoleCoverage {
        id: "cov-driver",
        role: "Οδηγός",
        assigned: 1,
        required: 1,
    },
    RoleCoverage {
        id: "cov-guide",
        role: "Ξεναγός",
        assigned: 1,
        required: 2,
    },
    RoleCoverage {
        id: "cov-host",
        role: "Συνοδός καμπίνας",
        assigned: 2,
        required: 2,
    },
    RoleCoverage {
        id: "cov-tech",
        role: "Τεχνικός",
        assigned: 0,
        required: 2,
    },
];

pub static ROSTER: &[StaffMember] = &[
    StaffMember {
        id: "staff-1",
        name: "Νίκος Παπαδόπουλος",
        role: "Οδηγός",
        status: StaffStatus::OnDuty,
        location: "Θέση οδηγού",
        shift: "06:30 - 14:30",
        contact: "Κανάλι 1",
    },
    StaffMember {
        id: "staff-2",
        name: "Ελένη Γεωργίου",
        role: "Ξεναγός",
        status: StaffStatus::OnDuty,
        location: "Άνω όροφος",
        shift: "08:00 - 16:00",
        contact: "Κανάλι 2",
    },
    StaffMember {
        id: "staff-3",
        name: "Μαρία Κωνσταντίνου",
        role: "Συνοδός καμπίνας",
        status: StaffStatus::Break,
        location: "Πίσω καμπίνα",
        shift: "07:00 - 15:00",
        contact: "Κανάλι 3",
    },
    StaffMember {
        id: "staff-4",
        name: "Γιώργος Αλεξίου",
        role: "Συνοδός καμπίνας",
        status: StaffStatus::Training,
        location: "Μπροστινή καμπίνα",
        shift: "07:00 - 15:00",
        contact: "Κανάλι 3",
    },
    StaffMember {
        id: "staff-5",
        name: "Δημήτρης Νικολάου",
        role: "Τεχνικός",
        status: StaffStatus::Support,
        location: "Κέντρο λειτουργίας",
        shift: "Εφημερία",
        contact: "Τηλ. 210 000 0000",
    },
    StaffMember {
        id: "staff-6",
        name: "Σοφία Ιωάννου",
        role: "Ξεναγός",
        status: StaffStatus::OffDuty,
        location: "Αμαξοστάσιο",
        shift: "14:30 - 22:30",
        contact: "Κανάλι 2",
    },
];

pub static ALERTS: &[StaffAlert] = &[
    StaffAlert {
        id: "staff-alert-tech",
        title: "Χωρίς τεχνικό στο όχημα",
        description: "Η υποστήριξη γίνεται απομακρυσμένα μέχρι την αλλαγή βάρδιας.",
        time: "Πριν από 5 λεπτά",
        severity: AlertSeverity::Urgent,
    },
    StaffAlert {
        id: "staff-alert-guide",
        title: "Ένας ξεναγός σε υπηρεσία",
        description: "Η ξενάγηση στον άνω όροφο καλύπτεται μόνο εκ περιτροπής.",
        time: "Πριν από 18 λεπτά",
        severity: AlertSeverity::Attention,
    },
    StaffAlert {
        id: "staff-alert-changeover",
        title: "Αλλαγή βάρδιας στις 14:30",
        description: "Η απογευματινή ομάδα αναμένεται στο Σύνταγμα.",
        time: "Πριν από 40 λεπτά",
        severity: AlertSeverity::Info,
    },
];

pub static TASKS: &[DutyTask] = &[
    DutyTask {
        id: "task-cabin",
        title: "Έλεγχος καθαριότητας καμπίνας",
        area: "Κάτω όροφος",
        owner: "Μαρία Κωνσταντίνου",
        due: "11:30",
        status: TaskStatus::InProgress,
    },
    DutyTask {
        id: "task-headsets",
        title: "Διανομή ακουστικών ξενάγησης",
        area: "Άνω όροφος",
        owner: "Ελένη Γεωργίου",
        due: "12:00",
        status: TaskStatus::Pending,
    },
    DutyTask {
        id: "task-ramp",
        title: "Δοκιμή ράμπας ΑμεΑ",
        area: "Μεσαία θύρα",
        owner: "Γιώργος Αλεξίου",
        due: "10:45",
        status: TaskStatus::Done,
    },
];

/// Crew members currently counted on board
pub fn onboard_count() -> usize {
    ROSTER.iter().filter(|member| member.status.is_onboard()).count()
}

pub fn required_count() -> u32 {
    COVERAGE.iter().map(|role| u32::from(role.required)).sum()
}

/// Overall readiness is the worst coverage of any role
pub fn readiness() -> CoverageStatus {
    COVERAGE
        .iter()
        .map(RoleCoverage::status)
        .max()
        .unwrap_or(CoverageStatus::Ok)
}
