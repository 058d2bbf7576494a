//! Energy station: solar roof, cabin loads and the traction battery packs

use rand::{Rng, RngCore};
use serde::Serialize;

use super::{clamp, Simulation};

pub const MAX_SOLAR_W: f64 = 800.0;
pub const SOLAR_PANEL_COUNT: usize = 24;

/// Cabin battery capacity in Wh
const BATTERY_CAPACITY_WH: f64 = 5000.0;
const AC_LOAD_W: u32 = 180;
const LIGHTS_FULL_LOAD_W: f64 = 80.0;
const SYSTEMS_LOAD_W: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    Sunny,
    Cloudy,
}

impl Weather {
    pub fn label(self) -> &'static str {
        match self {
            Weather::Sunny => "Ηλιοφάνεια",
            Weather::Cloudy => "Συννεφιά",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoofStatus {
    Open,
    Closed,
}

impl RoofStatus {
    pub fn label(self) -> &'static str {
        match self {
            RoofStatus::Open => "Ανοικτή",
            RoofStatus::Closed => "Κλειστή",
        }
    }
}

/// Where the cabin power goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadBreakdown {
    pub ac_w: u32,
    pub lights_w: u32,
    pub systems_w: u32,
    /// Power saved by keeping the AC off
    pub saved_w: u32,
}

/// Live state of the staff energy station
#[derive(Debug, Clone, Serialize)]
pub struct EnergyStation {
    pub solar_w: f64,
    pub consumption_w: f64,
    /// Cabin battery state of charge in percent
    pub battery_percent: f64,
    pub weather: Weather,
    pub roof: RoofStatus,
    pub roof_locked: bool,
    pub ac_enabled: bool,
    /// Cabin lighting level in percent
    pub lights_level: u8,
}

impl Default for EnergyStation {
    fn default() -> Self {
        Self {
            solar_w: 450.0,
            consumption_w: 320.0,
            battery_percent: 75.0,
            weather: Weather::Sunny,
            roof: RoofStatus::Open,
            roof_locked: false,
            ac_enabled: true,
            lights_level: 100,
        }
    }
}

impl EnergyStation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn net_w(&self) -> f64 {
        self.solar_w - self.consumption_w
    }

    pub fn is_charging(&self) -> bool {
        self.net_w() > 0.0
    }

    /// Solar output as a share of the array's peak, in percent
    pub fn solar_efficiency(&self) -> f64 {
        clamp(self.solar_w / MAX_SOLAR_W * 100.0, 0.0, 100.0)
    }

    /// Per-panel output levels in percent, spread around the array efficiency
    pub fn panel_levels(&self) -> [f64; SOLAR_PANEL_COUNT] {
        let efficiency = self.solar_efficiency();
        std::array::from_fn(|index| {
            let offset = (index % 6) as f64 * 3.0 - 7.0;
            clamp(efficiency + offset, 15.0, 100.0)
        })
    }

    /// Open roof in the sun, closed under cloud
    pub fn roof_optimal(&self) -> bool {
        matches!(
            (self.weather, self.roof),
            (Weather::Sunny, RoofStatus::Open) | (Weather::Cloudy, RoofStatus::Closed)
        )
    }

    /// Move the roof; ignored while the roof is locked
    pub fn set_roof(&mut self, status: RoofStatus) -> bool {
        if self.roof_locked {
            tracing::debug!(requested = ?status, "Roof is locked, ignoring");
            return false;
        }
        self.roof = status;
        true
    }

    pub fn toggle_roof_lock(&mut self) {
        self.roof_locked = !self.roof_locked;
    }

    pub fn toggle_ac(&mut self) {
        self.ac_enabled = !self.ac_enabled;
    }

    pub fn toggle_weather(&mut self) {
        self.weather = match self.weather {
            Weather::Sunny => Weather::Cloudy,
            Weather::Cloudy => Weather::Sunny,
        };
    }

    pub fn adjust_lights(&mut self, delta: i16) {
        self.lights_level = (i16::from(self.lights_level) + delta).clamp(0, 100) as u8;
    }

    pub fn loads(&self) -> LoadBreakdown {
        LoadBreakdown {
            ac_w: if self.ac_enabled { AC_LOAD_W } else { 0 },
            lights_w: (f64::from(self.lights_level) / 100.0 * LIGHTS_FULL_LOAD_W).round() as u32,
            systems_w: SYSTEMS_LOAD_W,
            saved_w: if self.ac_enabled { 0 } else { AC_LOAD_W },
        }
    }

    pub fn stored_wh(&self) -> u32 {
        (self.battery_percent / 100.0 * BATTERY_CAPACITY_WH).round() as u32
    }

    /// Minutes until full when charging, until empty otherwise
    pub fn minutes_remaining(&self) -> f64 {
        if self.is_charging() {
            (100.0 - self.battery_percent) / 100.0 * 180.0
        } else {
            self.battery_percent / 100.0 * 240.0
        }
    }
}

impl Simulation for EnergyStation {
    fn step(&mut self, rng: &mut dyn RngCore) {
        // Battery follows the balance that held before this tick's drift
        let charging = self.is_charging();

        let solar_change: f64 = rng.gen_range(-25.0..25.0);
        self.solar_w = clamp(self.solar_w + solar_change, 0.0, MAX_SOLAR_W);

        let load_change: f64 = rng.gen_range(-15.0..15.0);
        self.consumption_w = clamp(self.consumption_w + load_change, 100.0, 600.0);

        let battery_change = if charging { 0.5 } else { -0.3 };
        self.battery_percent = clamp(self.battery_percent + battery_change, 0.0, 100.0);

        tracing::debug!(
            solar = self.solar_w,
            consumption = self.consumption_w,
            battery = self.battery_percent,
            "Energy station tick"
        );
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PackStatus {
    Normal,
    Warning,
    Critical,
    Charging,
}

/// One traction battery pack
#[derive(Debug, Clone, Serialize)]
pub struct BatteryPack {
    pub id: &'static str,
    pub name: &'static str,
    pub location: &'static str,
    pub soc_percent: u8,
    pub health_percent: u8,
    pub temperature_c: f64,
    pub voltage: u16,
    pub current_a: u16,
    pub cycle_count: u32,
    pub balance_delta_mv: u16,
    pub status: PackStatus,
    pub status_label: &'static str,
    pub last_service: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Info,
    Warning,
    Critical,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnergyAlert {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub time: &'static str,
    pub severity: AlertSeverity,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChargeWindow {
    pub window: &'static str,
    pub target_soc: u8,
    pub location: &'static str,
    pub note: &'static str,
}

pub fn battery_packs() -> Vec<BatteryPack> {
    vec![
        BatteryPack {
            id: "pack-a",
            name: "Συστοιχία Α",
            location: "Κάτω πάτωμα · αριστερά",
            soc_percent: 82,
            health_percent: 96,
            temperature_c: 27.4,
            voltage: 704,
            current_a: 68,
            cycle_count: 312,
            balance_delta_mv: 18,
            status: PackStatus::Normal,
            status_label: "Σταθερή",
            last_service: "10 Ιαν",
        },
        BatteryPack {
            id: "pack-b",
            name: "Συστοιχία Β",
            location: "Κάτω πάτωμα · δεξιά",
            soc_percent: 74,
            health_percent: 94,
            temperature_c: 30.8,
            voltage: 690,
            current_a: 72,
            cycle_count: 326,
            balance_delta_mv: 26,
            status: PackStatus::Warning,
            status_label: "Ελεγχόμενη",
            last_service: "22 Δεκ",
        },
        BatteryPack {
            id: "pack-c",
            name: "Συστοιχία Γ",
            location: "Οροφή · εμπρός",
            soc_percent: 68,
            health_percent: 89,
            temperature_c: 34.2,
            voltage: 672,
            current_a: 64,
            cycle_count: 358,
            balance_delta_mv: 41,
            status: PackStatus::Critical,
            status_label: "Ασυμμετρία",
            last_service: "05 Νοε",
        },
        BatteryPack {
            id: "pack-d",
            name: "Συστοιχία Δ",
            location: "Οροφή · πίσω",
            soc_percent: 88,
            health_percent: 97,
            temperature_c: 25.6,
            voltage: 716,
            current_a: 54,
            cycle_count: 298,
            balance_delta_mv: 15,
            status: PackStatus::Charging,
            status_label: "Εξισορρόπηση",
            last_service: "18 Ιαν",
        },
    ]
}

pub fn energy_alerts() -> Vec<EnergyAlert> {
    vec![
        EnergyAlert {
            id: "alert-pack-c",
            title: "Υψηλή ασυμμετρία στη Συστοιχία Γ",
            description: "Διαφορά κελιών 41 mV. Προτείνεται εξισορρόπηση στο επόμενο σταθμό.",
            time: "Πριν από 2 λεπτά",
            severity: AlertSeverity::Critical,
        },
        EnergyAlert {
            id: "alert-pack-b",
            title: "Αύξηση θερμοκρασίας στη Συστοιχία Β",
            description: "Θερμοκρασία 30.8°C. Παρακολουθήστε τον αερισμό.",
            time: "Πριν από 7 λεπτά",
            severity: AlertSeverity::Warning,
        },
        EnergyAlert {
            id: "alert-regen",
            title: "Υψηλή ανάκτηση ενέργειας",
            description: "Σημαντική ανάκτηση σε κατηφόρα. Καλή απόδοση φρένων.",
            time: "Πριν από 12 λεπτά",
            severity: AlertSeverity::Info,
        },
    ]
}

pub fn charge_schedule() -> Vec<ChargeWindow> {
    vec![
        ChargeWindow {
            window: "14:10-14:40",
            target_soc: 90,
            location: "Αμαξοστάσιο Κεραμεικός",
            note: "Προτεραιότητα στη Συστοιχία Γ.",
        },
        ChargeWindow {
            window: "18:30-19:00",
            target_soc: 100,
            location: "Σταθμός Σύνταγμα",
            note: "Πλήρης φόρτιση πριν τη νυχτερινή διαδρομή.",
        },
        ChargeWindow {
            window: "23:00-05:00",
            target_soc: 100,
            location: "Κεντρικό depot",
            note: "Βαθιά φόρτιση και έλεγχος θερμοκρασιών.",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_defaults_and_derived_values() {
        let station = EnergyStation::new();
        assert_eq!(station.net_w(), 130.0);
        assert!(station.is_charging());
        assert_eq!(station.stored_wh(), 3750);
        assert!((station.minutes_remaining() - 45.0).abs() < 1e-9);
        assert!(station.roof_optimal());
    }

    #[test]
    fn test_panel_levels_spread_and_floor() {
        let mut station = EnergyStation::new();
        station.solar_w = 400.0;
        let levels = station.panel_levels();
        assert_eq!(levels[0], 43.0);
        assert_eq!(levels[5], 58.0);
        assert_eq!(levels[6], 43.0);

        station.solar_w = 0.0;
        assert!(station.panel_levels().iter().all(|level| *level == 15.0));
    }

    #[test]
    fn test_locked_roof_ignores_toggle() {
        let mut station = EnergyStation::new();
        station.toggle_roof_lock();
        assert!(!station.set_roof(RoofStatus::Closed));
        assert_eq!(station.roof, RoofStatus::Open);

        station.toggle_roof_lock();
        assert!(station.set_roof(RoofStatus::Closed));
        assert_eq!(station.roof, RoofStatus::Closed);
        assert!(!station.roof_optimal());
        station.toggle_weather();
        assert!(station.roof_optimal());
    }

    #[test]
    fn test_loads() {
        let mut station = EnergyStation::new();
        assert_eq!(
            station.loads(),
            LoadBreakdown {
                ac_w: 180,
                lights_w: 80,
                systems_w: 60,
                saved_w: 0
            }
        );
        station.toggle_ac();
        station.adjust_lights(-50);
        let loads = station.loads();
        assert_eq!(loads.ac_w, 0);
        assert_eq!(loads.saved_w, 180);
        assert_eq!(loads.lights_w, 40);
    }

    #[test]
    fn test_lights_clamped() {
        let mut station = EnergyStation::new();
        station.adjust_lights(10);
        assert_eq!(station.lights_level, 100);
        station.adjust_lights(-250);
        assert_eq!(station.lights_level, 0);
    }

    #[test]
    fn test_step_keeps_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut station = EnergyStation::new();
        for _ in 0..2_000 {
            station.step(&mut rng);
            assert!((0.0..=MAX_SOLAR_W).contains(&station.solar_w));
            assert!((100.0..=600.0).contains(&station.consumption_w));
            assert!((0.0..=100.0).contains(&station.battery_percent));
        }
    }

    #[test]
    fn test_battery_follows_balance() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut station = EnergyStation::new();
        station.solar_w = 0.0;
        station.consumption_w = 600.0;
        station.step(&mut rng);
        assert!((station.battery_percent - 74.7).abs() < 1e-9);
    }

    #[test]
    fn test_static_tables() {
        assert_eq!(battery_packs().len(), 4);
        assert_eq!(energy_alerts()[0].severity, AlertSeverity::Critical);
        assert_eq!(charge_schedule().len(), 3);
    }
}
