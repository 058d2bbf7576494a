//! Driver console model
//!
//! Speed, lane position and fatigue drift every driver tick. The console also
//! carries the small cabin controls the driver can reach from the seat:
//! passengers-exiting flag, climate target, and the cabin cleaning robot.

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use serde::Serialize;

use super::{clamp, Simulation};

pub const MAX_SPEED_KMH: f64 = 120.0;
pub const MIN_TARGET_TEMP: f64 = 16.0;
pub const MAX_TARGET_TEMP: f64 = 30.0;

/// Speed above which the console warns
const SPEED_WARNING_KMH: f64 = 75.0;
/// Speed above which the console raises the alarm
const SPEED_DANGER_KMH: f64 = 80.0;

/// Lane positions drawn each tick; centre is twice as likely
const LANE_DRAW: [LanePosition; 4] = [
    LanePosition::Center,
    LanePosition::Center,
    LanePosition::Left,
    LanePosition::Right,
];

const ROBOT_STEP: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LanePosition {
    Left,
    Center,
    Right,
}

impl LanePosition {
    pub fn label(self) -> &'static str {
        match self {
            LanePosition::Left => "Αριστερά",
            LanePosition::Center => "Κέντρο",
            LanePosition::Right => "Δεξιά",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeedStatus {
    Safe,
    Warning,
    Danger,
}

impl SpeedStatus {
    pub fn from_speed(speed: f64) -> Self {
        if speed > SPEED_DANGER_KMH {
            SpeedStatus::Danger
        } else if speed > SPEED_WARNING_KMH {
            SpeedStatus::Warning
        } else {
            SpeedStatus::Safe
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClimateMode {
    Cooling,
    Heating,
}

impl ClimateMode {
    pub fn label(self) -> &'static str {
        match self {
            ClimateMode::Cooling => "Ψύξη",
            ClimateMode::Heating => "Θέρμανση",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ClimateMode::Cooling => ClimateMode::Heating,
            ClimateMode::Heating => ClimateMode::Cooling,
        }
    }
}

/// Energy draw accent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    Normal,
    Elevated,
    High,
}

/// Live state of the driver console
#[derive(Debug, Clone, Serialize)]
pub struct DriverConsole {
    pub speed_kmh: f64,
    pub lane: LanePosition,
    /// Fatigue estimate, 0 (rested) to 100
    pub fatigue: f64,
    pub passengers_exiting: bool,
    pub climate_auto: bool,
    pub climate_mode: ClimateMode,
    pub target_temp: f64,
    pub cabin_temp: f64,
    pub outside_temp: f64,
    pub robot_active: bool,
    /// Cleaning cycle progress in percent
    pub robot_progress: u8,
    /// Lost item reported by the cleaning robot
    pub found_item: Option<String>,
}

impl Default for DriverConsole {
    fn default() -> Self {
        Self {
            speed_kmh: 65.0,
            lane: LanePosition::Center,
            fatigue: 22.0,
            passengers_exiting: false,
            climate_auto: true,
            climate_mode: ClimateMode::Cooling,
            target_temp: 22.0,
            cabin_temp: 24.0,
            outside_temp: 28.0,
            robot_active: false,
            robot_progress: 65,
            found_item: Some("Διαβατήριο".to_string()),
        }
    }
}

impl DriverConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn speed_status(&self) -> SpeedStatus {
        SpeedStatus::from_speed(self.speed_kmh)
    }

    pub fn lane_off_center(&self) -> bool {
        self.lane != LanePosition::Center
    }

    /// Whether the audible alarm should be sounding
    pub fn should_warn(&self) -> bool {
        self.speed_status() == SpeedStatus::Danger || self.lane_off_center()
    }

    /// Climate energy draw in percent, grows with the gap between target and cabin
    pub fn energy_consumption(&self) -> f64 {
        let gap = (self.target_temp - self.cabin_temp).abs();
        clamp(30.0 + gap * 5.0, 0.0, 100.0)
    }

    pub fn energy_level(&self) -> EnergyLevel {
        let consumption = self.energy_consumption();
        if consumption > 70.0 {
            EnergyLevel::High
        } else if consumption > 50.0 {
            EnergyLevel::Elevated
        } else {
            EnergyLevel::Normal
        }
    }

    /// Position of the target temperature within its range, 0.0 to 1.0
    pub fn target_temp_ratio(&self) -> f64 {
        (self.target_temp - MIN_TARGET_TEMP) / (MAX_TARGET_TEMP - MIN_TARGET_TEMP)
    }

    pub fn speed_ratio(&self) -> f64 {
        (self.speed_kmh / MAX_SPEED_KMH).min(1.0)
    }

    pub fn toggle_passengers_exiting(&mut self) {
        self.passengers_exiting = !self.passengers_exiting;
    }

    /// Driver took a break
    pub fn take_break(&mut self) {
        self.fatigue = 0.0;
    }

    pub fn toggle_climate_auto(&mut self) {
        self.climate_auto = !self.climate_auto;
    }

    pub fn set_climate_mode(&mut self, mode: ClimateMode) {
        self.climate_mode = mode;
    }

    pub fn adjust_target_temp(&mut self, delta: f64) {
        self.target_temp = clamp(self.target_temp + delta, MIN_TARGET_TEMP, MAX_TARGET_TEMP);
    }

    pub fn toggle_robot(&mut self) {
        self.robot_active = !self.robot_active;
    }

    /// Advance the cleaning robot by one robot tick; wraps to 0 after a full cycle
    pub fn advance_robot(&mut self) {
        if !self.robot_active {
            return;
        }
        self.robot_progress = if self.robot_progress >= 100 {
            0
        } else {
            (self.robot_progress + ROBOT_STEP).min(100)
        };
    }

    pub fn dismiss_found_item(&mut self) {
        self.found_item = None;
    }
}

impl Simulation for DriverConsole {
    fn step(&mut self, rng: &mut dyn RngCore) {
        let change: f64 = rng.gen_range(-5.0..5.0);
        self.speed_kmh = clamp(self.speed_kmh + change, 0.0, MAX_SPEED_KMH);

        if let Some(lane) = LANE_DRAW.choose(&mut *rng) {
            self.lane = *lane;
        }

        let fatigue_gain: f64 = rng.gen_range(0.0..2.0);
        self.fatigue = clamp(self.fatigue + fatigue_gain, 0.0, 100.0);

        tracing::debug!(
            speed = self.speed_kmh,
            lane = ?self.lane,
            fatigue = self.fatigue,
            "Driver console tick"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_speed_status_thresholds() {
        assert_eq!(SpeedStatus::from_speed(75.0), SpeedStatus::Safe);
        assert_eq!(SpeedStatus::from_speed(75.1), SpeedStatus::Warning);
        assert_eq!(SpeedStatus::from_speed(80.0), SpeedStatus::Warning);
        assert_eq!(SpeedStatus::from_speed(80.5), SpeedStatus::Danger);
    }

    #[test]
    fn test_should_warn() {
        let mut console = DriverConsole::new();
        assert!(!console.should_warn());
        console.lane = LanePosition::Left;
        assert!(console.should_warn());
        console.lane = LanePosition::Center;
        console.speed_kmh = 90.0;
        assert!(console.should_warn());
        console.speed_kmh = 78.0;
        assert!(!console.should_warn());
    }

    #[test]
    fn test_energy_consumption_follows_temperature_gap() {
        let mut console = DriverConsole::new();
        // target 22, cabin 24
        assert_eq!(console.energy_consumption(), 40.0);
        assert_eq!(console.energy_level(), EnergyLevel::Normal);
        console.adjust_target_temp(6.0);
        assert_eq!(console.energy_consumption(), 50.0);
        console.adjust_target_temp(2.0);
        assert_eq!(console.energy_level(), EnergyLevel::Elevated);
        console.adjust_target_temp(-100.0);
        assert_eq!(console.target_temp, MIN_TARGET_TEMP);
        assert_eq!(console.energy_consumption(), 70.0);
    }

    #[test]
    fn test_target_temp_clamped() {
        let mut console = DriverConsole::new();
        console.adjust_target_temp(100.0);
        assert_eq!(console.target_temp, MAX_TARGET_TEMP);
        assert_eq!(console.target_temp_ratio(), 1.0);
    }

    #[test]
    fn test_robot_wraps_after_full_cycle() {
        let mut console = DriverConsole::new();
        console.advance_robot();
        assert_eq!(console.robot_progress, 65);

        console.toggle_robot();
        for _ in 0..7 {
            console.advance_robot();
        }
        assert_eq!(console.robot_progress, 100);
        console.advance_robot();
        assert_eq!(console.robot_progress, 0);
    }

    #[test]
    fn test_break_resets_fatigue() {
        let mut console = DriverConsole::new();
        console.take_break();
        assert_eq!(console.fatigue, 0.0);
    }

    #[test]
    fn test_step_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut console = DriverConsole::new();
        for _ in 0..1_000 {
            let before = console.fatigue;
            console.step(&mut rng);
            assert!((0.0..=MAX_SPEED_KMH).contains(&console.speed_kmh));
            assert!((0.0..=100.0).contains(&console.fatigue));
            assert!(console.fatigue >= before);
        }
        assert_eq!(console.fatigue, 100.0);
    }
}
