//! Online help bundles per role

use serde::Serialize;

use crate::auth::Role;

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct HelpQuickAction {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct HelpContact {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Everything the help screen shows for one role
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct HelpContent {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub quick_actions_title: &'static str,
    pub quick_actions: &'static [HelpQuickAction],
    pub guidance_title: &'static str,
    pub guidance: &'static [&'static str],
    pub contact_title: &'static str,
    pub contacts: &'static [HelpContact],
}

/// Help bundle for a role
pub fn help_for(role: Role) -> &'static HelpContent {
    match role {
        Role::Guest => &GUEST_HELP,
        Role::Driver => &DRIVER_HELP,
        Role::Employee => &EMPLOYEE_HELP,
        Role::Admin => &ADMIN_HELP,
    }
}

const QUICK_ACTIONS_TITLE: &str = "Γρήγορες ενέργειες";
const CONTACT_TITLE: &str = "Επικοινωνία";

static GUEST_HELP: HelpContent = HelpContent {
    title: "Online Βοήθεια",
    subtitle: "Χρήσιμες οδηγίες για επιβάτες και επισκέπτες.",
    quick_actions_title: QUICK_ACTIONS_TITLE,
    quick_actions: &[
        HelpQuickAction {
            id: "guest-route",
            title: "Ζωντανή διαδρομή",
            description: "Παρακολούθησε τη θέση του λεωφορείου.",
            icon: "map-marker-path",
        },
        HelpQuickAction {
            id: "guest-attractions",
            title: "Κοντινά αξιοθέατα",
            description: "Δες σημεία ενδιαφέροντος δίπλα σου.",
            icon: "binoculars",
        },
        HelpQuickAction {
            id: "guest-coffee",
            title: "Παραγγελία ροφήματος",
            description: "Παρήγγειλε πριν την επόμενη στάση.",
            icon: "coffee",
        },
    ],
    guidance_title: "Συχνές οδηγίες",
    guidance: &[
        "Κράτησε το εισιτήριο διαθέσιμο κατά την επιβίβαση.",
        "Χρησιμοποίησε τις ενότητες αξιοθέατων για κοντινές προτάσεις.",
        "Για βοήθεια εντός του λεωφορείου μίλησε με το πλήρωμα.",
    ],
    contact_title: CONTACT_TITLE,
    contacts: &[
        HelpContact {
            id: "guest-staff",
            label: "Πλήρωμα διαδρομής",
            description: "Άμεση βοήθεια για θέσεις, στάσεις και οδηγίες.",
            icon: "account",
        },
        HelpContact {
            id: "guest-lost",
            label: "Απολεσθέντα αντικείμενα",
            description: "Δήλωσε απώλεια στον συνοδό ή στον οδηγό.",
            icon: "briefcase",
        },
    ],
};

static DRIVER_HELP: HelpContent = HelpContent {
    title: "Online Βοήθεια Οδηγού",
    subtitle: "Εργαλεία και οδηγίες για ασφαλή οδήγηση.",
    quick_actions_title: QUICK_ACTIONS_TITLE,
    quick_actions: &[
        HelpQuickAction {
            id: "driver-dashboard",
            title: "Πίνακας Οδηγού",
            description: "Ταχύτητα, λωρίδα, κατάσταση επιβατών.",
            icon: "bus",
        },
        HelpQuickAction {
            id: "driver-assistance",
            title: "Υποβοήθηση οδηγού",
            description: "Alerts, checklist και δείκτες ασφαλείας.",
            icon: "shield-check",
        },
        HelpQuickAction {
            id: "driver-climate",
            title: "Έλεγχος κλίματος",
            description: "Ρύθμισε θερμοκρασία και εξαερισμό.",
            icon: "fan",
        },
    ],
    guidance_title: "Οδηγίες βάρδιας",
    guidance: &[
        "Χρησιμοποίησε την Υποβοήθηση οδηγού για alerts σε πραγματικό χρόνο.",
        "Επιβεβαίωσε την κατάσταση επιβατών πριν την αναχώρηση.",
        "Σε έκτακτη ανάγκη ενημέρωσε άμεσα το κέντρο λειτουργίας.",
    ],
    contact_title: CONTACT_TITLE,
    contacts: &[
        HelpContact {
            id: "driver-ops",
            label: "Κέντρο λειτουργίας",
            description: "Συντονισμός διαδρομών και έκτακτων περιστατικών.",
            icon: "headset",
        },
        HelpContact {
            id: "driver-maintenance",
            label: "Τεχνική υποστήριξη",
            description: "Αναφορές για τεχνικά ή μηχανικά ζητήματα.",
            icon: "tools",
        },
    ],
};

static EMPLOYEE_HELP: HelpContent = HelpContent {
    title: "Online Βοήθεια Προσωπικού",
    subtitle: "Οδηγίες για την ομάδα υποστήριξης.",
    quick_actions_title: QUICK_ACTIONS_TITLE,
    quick_actions: &[
        HelpQuickAction {
            id: "employee-control",
            title: "Έλεγχος προσωπικού",
            description: "Παρακολούθηση βαρδιών και ρόλων.",
            icon: "account-group",
        },
        HelpQuickAction {
            id: "employee-energy",
            title: "Ενέργεια οχήματος",
            description: "Κατανάλωση, φόρτιση και στόχοι.",
            icon: "battery-charging",
        },
        HelpQuickAction {
            id: "employee-robot",
            title: "Ρομπότ καθαρισμού",
            description: "Κατάσταση και προτεραιότητες καθαρισμού.",
            icon: "robot",
        },
    ],
    guidance_title: "Οδηγίες βάρδιας",
    guidance: &[
        "Έλεγξε κάλυψη ρόλων πριν την εκκίνηση της διαδρομής.",
        "Κατέγραψε τυχόν αποκλίσεις κατανάλωσης ή φόρτισης.",
        "Κράτησε ενημερωμένο το checklist καθαρισμού καμπίνας.",
    ],
    contact_title: CONTACT_TITLE,
    contacts: &[
        HelpContact {
            id: "employee-ops",
            label: "Κέντρο λειτουργίας",
            description: "Συντονισμός προσωπικού και αλλαγές βάρδιας.",
            icon: "headset",
        },
        HelpContact {
            id: "employee-stock",
            label: "Υλικά & αναλώσιμα",
            description: "Αιτήματα ανεφοδιασμού και ελλείψεων.",
            icon: "clipboard-check",
        },
    ],
};

static ADMIN_HELP: HelpContent = HelpContent {
    title: "Online Βοήθεια Διαχειριστή",
    subtitle: "Εποπτεία ρόλων, στόλων και υποστήριξης.",
    quick_actions_title: QUICK_ACTIONS_TITLE,
    quick_actions: &[
        HelpQuickAction {
            id: "admin-driver",
            title: "Κονσόλα οδηγού",
            description: "Έλεγχος βασικών λειτουργιών οδήγησης.",
            icon: "bus",
        },
        HelpQuickAction {
            id: "admin-employee",
            title: "Έλεγχος προσωπικού",
            description: "Κάλυψη βαρδιών και κατανομή ομάδων.",
            icon: "account-group",
        },
        HelpQuickAction {
            id: "admin-energy",
            title: "Ενέργεια οχήματος",
            description: "Επισκόπηση κατανάλωσης και φόρτισης.",
            icon: "battery-charging",
        },
    ],
    guidance_title: "Συστάσεις εποπτείας",
    guidance: &[
        "Παρακολούθησε καθημερινά KPI ασφάλειας και ενέργειας.",
        "Επιβεβαίωσε ότι οι βάρδιες έχουν πλήρη κάλυψη.",
        "Συγκέντρωσε αναφορές συμβάντων για τα KPI.",
    ],
    contact_title: CONTACT_TITLE,
    contacts: &[
        HelpContact {
            id: "admin-ops",
            label: "Κέντρο λειτουργίας",
            description: "Επείγοντα θέματα διαδρομών και πόρων.",
            icon: "headset",
        },
        HelpContact {
            id: "admin-support",
            label: "Τεχνική υποστήριξη",
            description: "Διαχείριση τεχνικών αιτημάτων στόλου.",
            icon: "tools",
        },
    ],
};
