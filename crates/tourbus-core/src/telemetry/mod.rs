//! Simulated telemetry behind the dashboards
//!
//! Nothing here reads a real sensor. Live-looking values are bounded random
//! walks advanced by the UI on fixed intervals; everything else is static
//! mock data for the bus on the demo route.
//!
//! | Module | Dashboard | Live values |
//! |--------|-----------|-------------|
//! | [`driver`] | Driver console | speed, lane, fatigue, robot progress |
//! | [`assistance`] | Driver assistance | none |
//! | [`climate`] | Climate control | none (operator toggles only) |
//! | [`energy`] | Energy station | solar, consumption, battery |
//! | [`crew`] | Crew control | none |
//! | [`vacuum`] | Robot vacuum | cycle progress, simulated over static tables |

pub mod assistance;
pub mod climate;
pub mod crew;
pub mod driver;
pub mod energy;
pub mod vacuum;

use rand::RngCore;

/// A model whose values drift on every tick of its timer
pub trait Simulation {
    /// Advance one tick
    fn step(&mut self, rng: &mut dyn RngCore);
}

/// Clamp `value` into `[min, max]`
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}
