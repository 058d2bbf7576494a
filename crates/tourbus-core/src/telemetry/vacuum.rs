//! Cabin cleaning robot
//!
//! Meters, zones, maintenance and alerts are fixed demo tables. The run
//! cycle on top of them ([`RobotVacuum`]) is simulated by the console: its
//! robot timer calls [`RobotVacuum::advance`] and the dashboard keys pause,
//! start or dock the robot. Only the starting 68% and status come from the
//! demo data.

use serde::Serialize;

const CYCLE_STEP: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Cleaning,
    Paused,
    Returning,
    Docked,
    Idle,
}

impl RunStatus {
    pub fn label(self) -> &'static str {
        match self {
            RunStatus::Cleaning => "Σε εξέλιξη",
            RunStatus::Paused => "Σε παύση",
            RunStatus::Returning => "Επιστρέφει στη βάση",
            RunStatus::Docked => "Στη βάση",
            RunStatus::Idle => "Αναμονή",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MeterStatus {
    Good,
    Attention,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZoneStatus {
    Done,
    InProgress,
    Pending,
    Skipped,
}

impl ZoneStatus {
    pub fn label(self) -> &'static str {
        match self {
            ZoneStatus::Done => "Ολοκληρώθηκε",
            ZoneStatus::InProgress => "Σε εξέλιξη",
            ZoneStatus::Pending => "Σε αναμονή",
            ZoneStatus::Skipped => "Παραλείφθηκε",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MaintenanceStatus {
    Ok,
    Soon,
    Overdue,
}

impl MaintenanceStatus {
    pub fn label(self) -> &'static str {
        match self {
            MaintenanceStatus::Ok => "Εντάξει",
            MaintenanceStatus::Soon => "Προσεχώς",
            MaintenanceStatus::Overdue => "Εκτός ορίου",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Critical,
    Warning,
    Info,
}

impl AlertSeverity {
    pub fn label(self) -> &'static str {
        match self {
            AlertSeverity::Critical => "Κρίσιμο",
            AlertSeverity::Warning => "Προσοχή",
            AlertSeverity::Info => "Ενημέρωση",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Meter {
    pub id: &'static str,
    pub label: &'static str,
    pub percent: u8,
    pub hint: &'static str,
    pub status: MeterStatus,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub id: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub helper: &'static str,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct CleaningZone {
    pub id: &'static str,
    pub name: &'static str,
    pub status: ZoneStatus,
    pub last_cleaned: &'static str,
    pub duration: &'static str,
    pub coverage: &'static str,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct MaintenanceItem {
    pub id: &'static str,
    pub title: &'static str,
    pub status: MaintenanceStatus,
    pub detail: &'static str,
    pub next_step: &'static str,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct VacuumAlert {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub severity: AlertSeverity,
    pub time: &'static str,
}

/// Fixed identity of the robot on this bus
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct RobotInfo {
    pub robot_name: &'static str,
    pub model: &'static str,
    pub mode_label: &'static str,
    pub current_zone: &'static str,
    pub estimated_finish: &'static str,
    pub dock_status: &'static str,
    pub shift_window: &'static str,
    pub vehicle_id: &'static str,
    pub route_name: &'static str,
    pub firmware: &'static str,
    pub serial: &'static str,
    pub last_docking: &'static str,
    pub next_run: &'static str,
}

pub static INFO: RobotInfo = RobotInfo {
    robot_name: "Nimbus-07",
    model: "CleanRide XR4",
    mode_label: "Αυτόματο + Ήσυχο",
    current_zone: "Κύριος διάδρομος - Μπροστινό τμήμα",
    estimated_finish: "12:45",
    dock_status: "Σταθμός φόρτισης διαθέσιμος",
    shift_window: "Πρωινή βάρδια 08:00–16:00",
    vehicle_id: "BUS-24",
    route_name: "Ιστορικό Κέντρο",
    firmware: "v3.8.2",
    serial: "STB-RV-2407",
    last_docking: "Σήμερα 07:10",
    next_run: "13:30",
};

pub static METERS: &[Meter] = &[
    Meter {
        id: "battery",
        label: "Μπαταρία",
        percent: 82,
        hint: "Εκτιμώμενη αυτονομία 2ώ 10λ",
        status: MeterStatus::Good,
    },
    Meter {
        id: "dustbin",
        label: "Κάδος συλλογής",
        percent: 65,
        hint: "Αδειάζει στον σταθμό μετά τον κύκλο",
        status: MeterStatus::Attention,
    },
    Meter {
        id: "water",
        label: "Δεξαμενή νερού",
        percent: 48,
        hint: "Γέμισμα πριν τον επόμενο γύρο",
        status: MeterStatus::Attention,
    },
    Meter {
        id: "filter",
        label: "Φίλτρο HEPA",
        percent: 22,
        hint: "Αλλαγή εντός 3 ημερών",
        status: MeterStatus::Critical,
    },
];

pub static METRICS: &[Metric] = &[
    Metric {
        id: "area",
        label: "Επιφάνεια καθαρισμού",
        value: "420 τ.μ.",
        helper: "68% της διαδρομής",
    },
    Metric {
        id: "duration",
        label: "Χρόνος λειτουργίας",
        value: "01:35",
        helper: "Στόχος κύκλου 02:15",
    },
    Metric {
        id: "obstacles",
        label: "Αποφυγές εμποδίων",
        value: "14",
        helper: "2 σημεία χρειάζονται έλεγχο",
    },
    Metric {
        id: "noise",
        label: "Μέσος θόρυβος",
        value: "52 dB",
        helper: "Εντός ορίων άνεσης",
    },
];

pub static ZONES: &[CleaningZone] = &[
    CleaningZone {
        id: "zone-1",
        name: "Μπροστινή είσοδος & ράμπα",
        status: ZoneStatus::Done,
        last_cleaned: "10:25",
        duration: "18 λεπτά",
        coverage: "100%",
    },
    CleaningZone {
        id: "zone-2",
        name: "Κύριος διάδρομος",
        status: ZoneStatus::InProgress,
        last_cleaned: "Σε εξέλιξη",
        duration: "Υπόλοιπο 22 λεπτά",
        coverage: "65%",
    },
    CleaningZone {
        id: "zone-3",
        name: "Πίσω καθίσματα",
        status: ZoneStatus::Pending,
        last_cleaned: "Προγραμματισμένο 12:15",
        duration: "20 λεπτά",
        coverage: "0%",
    },
    CleaningZone {
        id: "zone-4",
        name: "Χώρος αποσκευών",
        status: ZoneStatus::Pending,
        last_cleaned: "Προγραμματισμένο 12:35",
        duration: "12 λεπτά",
        coverage: "0%",
    },
];

pub static MAINTENANCE: &[MaintenanceItem] = &[
    MaintenanceItem {
        id: "maint-1",
        title: "Καθαρισμός αισθητήρων LIDAR",
        status: MaintenanceStatus::Ok,
        detail: "Τελευταίος καθαρισμός πριν 2 ημέρες",
        next_step: "Επόμενος έλεγχος σε 5 ημέρες",
    },
    MaintenanceItem {
        id: "maint-2",
        title: "Αντικατάσταση βούρτσας",
        status: MaintenanceStatus::Soon,
        detail: "Φθορά 72%",
        next_step: "Κλείστε ραντεβού για αύριο",
    },
    MaintenanceItem {
        id: "maint-3",
        title: "Φίλτρο HEPA",
        status: MaintenanceStatus::Overdue,
        detail: "Υπερβαίνει το όριο κατά 1 ημέρα",
        next_step: "Αλλαγή σήμερα πριν την απογευματινή βάρδια",
    },
];

pub static ALERTS: &[VacuumAlert] = &[
    VacuumAlert {
        id: "alert-1",
        title: "Αισθητήρας άκρων",
        description: "Προσωρινή απώλεια σήματος στην ζώνη πίσω καθισμάτων.",
        severity: AlertSeverity::Warning,
        time: "11:18",
    },
    VacuumAlert {
        id: "alert-2",
        title: "Φίλτρο HEPA",
        description: "Η ροή αέρα μειώθηκε στο 78%. Απαιτείται αντικατάσταση.",
        severity: AlertSeverity::Critical,
        time: "10:42",
    },
    VacuumAlert {
        id: "alert-3",
        title: "Σταθμός φόρτισης",
        description: "Η βάση είναι καθαρή και έτοιμη για αυτόματη σύνδεση.",
        severity: AlertSeverity::Info,
        time: "10:05",
    },
];

/// Run state simulated by the console timer
#[derive(Debug, Clone, Serialize)]
pub struct RobotVacuum {
    pub status: RunStatus,
    /// Cycle progress in percent
    pub progress: u8,
}

impl Default for RobotVacuum {
    fn default() -> Self {
        Self {
            status: RunStatus::Cleaning,
            progress: 68,
        }
    }
}

impl RobotVacuum {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one robot tick; docks when the cycle completes
    pub fn advance(&mut self) {
        if self.status != RunStatus::Cleaning {
            return;
        }
        self.progress = self.progress.saturating_add(CYCLE_STEP).min(100);
        if self.progress == 100 {
            self.status = RunStatus::Docked;
            tracing::info!(robot = INFO.robot_name, "Cleaning cycle complete, docked");
        }
    }

    /// Pause a running cycle or resume a paused one
    pub fn toggle_pause(&mut self) {
        self.status = match self.status {
            RunStatus::Cleaning => RunStatus::Paused,
            RunStatus::Paused => RunStatus::Cleaning,
            other => other,
        };
    }

    /// Start a fresh cycle from the dock or idle
    pub fn start_cycle(&mut self) {
        if matches!(self.status, RunStatus::Docked | RunStatus::Idle) {
            self.progress = 0;
            self.status = RunStatus::Cleaning;
        }
    }

    pub fn return_to_dock(&mut self) {
        if matches!(self.status, RunStatus::Cleaning | RunStatus::Paused) {
            self.status = RunStatus::Returning;
        }
    }
}
