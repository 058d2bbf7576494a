//! Cabin climate control
//!
//! Shift, metrics and schedule are fixed for the demo route. The operator can
//! switch the system on and off and cycle the mode and fan level; zone status
//! is derived from each zone's temperature against its target.

use serde::Serialize;

/// Half-width of the band around the target that counts as stable, in °C
pub const ZONE_STABLE_BAND: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    Auto,
    Eco,
    Comfort,
    Dry,
    Defrost,
}

impl Mode {
    pub const ALL: [Mode; 5] = [Mode::Auto, Mode::Eco, Mode::Comfort, Mode::Dry, Mode::Defrost];

    pub fn label(self) -> &'static str {
        match self {
            Mode::Auto => "Αυτόματο",
            Mode::Eco => "Eco",
            Mode::Comfort => "Άνεση",
            Mode::Dry => "Ξήρανση",
            Mode::Defrost => "Αποπαγοποίηση",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Mode::Auto => Mode::Eco,
            Mode::Eco => Mode::Comfort,
            Mode::Comfort => Mode::Dry,
            Mode::Dry => Mode::Defrost,
            Mode::Defrost => Mode::Auto,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FanLevel {
    Low,
    Medium,
    High,
    Turbo,
}

impl FanLevel {
    pub const ALL: [FanLevel; 4] = [FanLevel::Low, FanLevel::Medium, FanLevel::High, FanLevel::Turbo];

    pub fn label(self) -> &'static str {
        match self {
            FanLevel::Low => "Χαμηλό",
            FanLevel::Medium => "Μεσαίο",
            FanLevel::High => "Υψηλό",
            FanLevel::Turbo => "Turbo",
        }
    }

    pub fn next(self) -> Self {
        match self {
            FanLevel::Low => FanLevel::Medium,
            FanLevel::Medium => FanLevel::High,
            FanLevel::High => FanLevel::Turbo,
            FanLevel::Turbo => FanLevel::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZoneStatus {
    Stable,
    NeedsCooling,
    NeedsHeating,
}

impl ZoneStatus {
    pub fn from_temps(current: f64, target: f64) -> Self {
        let delta = current - target;
        if delta > ZONE_STABLE_BAND {
            ZoneStatus::NeedsCooling
        } else if delta < -ZONE_STABLE_BAND {
            ZoneStatus::NeedsHeating
        } else {
            ZoneStatus::Stable
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ZoneStatus::Stable => "Σταθερό",
            ZoneStatus::NeedsCooling => "Ανάγκη ψύξης",
            ZoneStatus::NeedsHeating => "Ανάγκη θέρμανσης",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AirFlow {
    Front,
    Feet,
    Roof,
    Mixed,
}

impl AirFlow {
    pub fn label(self) -> &'static str {
        match self {
            AirFlow::Front => "Εμπρός",
            AirFlow::Feet => "Πόδια",
            AirFlow::Roof => "Οροφή",
            AirFlow::Mixed => "Μικτή ροή",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Zone {
    pub id: &'static str,
    pub name: &'static str,
    pub current_temp: f64,
    pub target_temp: f64,
    pub seat_count: u8,
    pub air_flow: AirFlow,
}

impl Zone {
    pub fn status(&self) -> ZoneStatus {
        ZoneStatus::from_temps(self.current_temp, self.target_temp)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DriverShift {
    pub vehicle_id: &'static str,
    pub route_name: &'static str,
    pub time_window: &'static str,
    pub occupancy: &'static str,
    pub driver_name: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClimateMetrics {
    pub cabin_temp: f64,
    pub target_temp: f64,
    pub outside_temp: f64,
    pub humidity: u8,
    pub co2_ppm: u16,
    /// kWh per hour
    pub energy_use: f64,
    pub eco_score: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleItem {
    pub time: &'static str,
    pub action: &'static str,
    pub target_temp: f64,
    pub note: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClimateControl {
    pub powered: bool,
    pub mode: Mode,
    pub fan: FanLevel,
    pub recirculation: &'static str,
    pub defog: &'static str,
    pub filter_health: u8,
    pub air_quality: &'static str,
    pub shift: DriverShift,
    pub metrics: ClimateMetrics,
    pub zones: Vec<Zone>,
    pub schedule: Vec<ScheduleItem>,
}

impl Default for ClimateControl {
    fn default() -> Self {
        Self {
            powered: true,
            mode: Mode::Comfort,
            fan: FanLevel::Medium,
            recirculation: "Κλειστό κύκλωμα",
            defog: "Έτοιμο",
            filter_health: 96,
            air_quality: "Άριστη",
            shift: DriverShift {
                vehicle_id: "ΛΕΩΦ-204",
                route_name: "Ακρόπολη - Σούνιο",
                time_window: "06:30 - 14:30",
                occupancy: "28/45",
                driver_name: "Νίκος Παπαδόπουλος",
            },
            metrics: ClimateMetrics {
                cabin_temp: 22.4,
                target_temp: 22.0,
                outside_temp: 11.0,
                humidity: 46,
                co2_ppm: 610,
                energy_use: 1.8,
                eco_score: 92,
            },
            zones: vec![
                Zone {
                    id: "front",
                    name: "Μπροστινή καμπίνα",
                    current_temp: 22.4,
                    target_temp: 22.0,
                    seat_count: 16,
                    air_flow: AirFlow::Front,
                },
                Zone {
                    id: "middle",
                    name: "Μεσαία ζώνη",
                    current_temp: 23.1,
                    target_temp: 22.0,
                    seat_count: 18,
                    air_flow: AirFlow::Mixed,
                },
                Zone {
                    id: "rear",
                    name: "Πίσω καμπίνα",
                    current_temp: 21.4,
                    target_temp: 22.0,
                    seat_count: 11,
                    air_flow: AirFlow::Feet,
                },
            ],
            schedule: vec![
                ScheduleItem {
                    time: "07:00",
                    action: "Προθέρμανση",
                    target_temp: 21.0,
                    note: "Εκκίνηση δρομολογίου",
                },
                ScheduleItem {
                    time: "10:30",
                    action: "Σταθεροποίηση",
                    target_temp: 22.0,
                    note: "Κορύφωση πληρότητας",
                },
                ScheduleItem {
                    time: "13:00",
                    action: "Eco",
                    target_temp: 21.0,
                    note: "Χαμηλότερη κατανάλωση",
                },
            ],
        }
    }
}

impl ClimateControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn power_label(&self) -> &'static str {
        if self.powered {
            "Ενεργό"
        } else {
            "Ανενεργό"
        }
    }

    pub fn toggle_power(&mut self) {
        self.powered = !self.powered;
        tracing::debug!(powered = self.powered, "Climate power toggled");
    }

    pub fn cycle_mode(&mut self) {
        self.mode = self.mode.next();
    }

    pub fn cycle_fan(&mut self) {
        self.fan = self.fan.next();
    }

    pub fn total_seats(&self) -> u32 {
        self.zones.iter().map(|zone| u32::from(zone.seat_count)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_status_band() {
        assert_eq!(ZoneStatus::from_temps(22.4, 22.0), ZoneStatus::Stable);
        assert_eq!(ZoneStatus::from_temps(22.5, 22.0), ZoneStatus::Stable);
        assert_eq!(ZoneStatus::from_temps(21.5, 22.0), ZoneStatus::Stable);
        assert_eq!(ZoneStatus::from_temps(23.1, 22.0), ZoneStatus::NeedsCooling);
        assert_eq!(ZoneStatus::from_temps(21.4, 22.0), ZoneStatus::NeedsHeating);
    }

    #[test]
    fn test_default_zones() {
        let climate = ClimateControl::new();
        let statuses: Vec<_> = climate.zones.iter().map(Zone::status).collect();
        assert_eq!(
            statuses,
            vec![
                ZoneStatus::Stable,
                ZoneStatus::NeedsCooling,
                ZoneStatus::NeedsHeating
            ]
        );
        assert_eq!(climate.total_seats(), 45);
    }

    #[test]
    fn test_mode_cycle_returns_to_start() {
        let mut climate = ClimateControl::new();
        let start = climate.mode;
        for _ in 0..Mode::ALL.len() {
            climate.cycle_mode();
        }
        assert_eq!(climate.mode, start);
        climate.cycle_mode();
        assert_eq!(climate.mode, Mode::Dry);
    }

    #[test]
    fn test_fan_cycle_wraps() {
        let mut climate = ClimateControl::new();
        climate.cycle_fan();
        climate.cycle_fan();
        assert_eq!(climate.fan, FanLevel::Turbo);
        climate.cycle_fan();
        assert_eq!(climate.fan, FanLevel::Low);
    }

    #[test]
    fn test_power_toggle() {
        let mut climate = ClimateControl::new();
        assert_eq!(climate.power_label(), "Ενεργό");
        climate.toggle_power();
        assert_eq!(climate.power_label(), "Ανενεργό");
    }
}
