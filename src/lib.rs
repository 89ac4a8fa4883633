//! Gonk - a small procedurally generated solar system
//!
//! Core modules:
//! - `sim`: Deterministic simulation (orbits, planets, ship production)
//! - `player`: Player identities and colours
//! - `config`: Data-driven tuning and generation parameters
//! - `error`: Error type for construction and configuration

pub mod config;
pub mod error;
pub mod player;
pub mod sim;

pub use config::{GenerationParams, SimConfig};
pub use error::SimError;
pub use player::{Color, Player, PlayerId, Roster};

use glam::DVec2;
use std::f64::consts::TAU;

/// Simulation configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f64 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta fed into the accumulator (seconds)
    pub const MAX_FRAME_DT: f64 = 0.25;

    /// Central star
    pub const STAR_RADIUS: f64 = 20.0;

    /// Ship production per second per sqrt(size)
    pub const PRODUCTION_FACTOR: f64 = 0.1;
    /// Angular speed of the ship ring around its planet (radians/s)
    pub const SHIP_LAYOUT_SPEED: f64 = 0.5;
    /// Ship ring radius as a multiple of planet size
    pub const SHIP_DISTANCE_FACTOR: f64 = 2.0;
    /// Per-axis component of a ship's velocity vector
    pub const SHIP_SPEED: f64 = 5.0;
    /// A planet of size `s` starts with `floor(s / GARRISON_DIVISOR)` ships
    pub const GARRISON_DIVISOR: f64 = 3.0;

    /// Orbital gap between consecutive satellites of one planet
    pub const SATELLITE_SPACING: f64 = 20.0;
    /// Planet orbital speed range [min, max)
    pub const MIN_ORBIT_SPEED: f64 = 3.0;
    pub const MAX_ORBIT_SPEED: f64 = 10.0;
}

/// Wrap an angle into [0, 2π)
#[inline]
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Rotate `point` about `anchor` by `angle` radians (counter-clockwise)
#[inline]
pub fn rotate_point(anchor: DVec2, point: DVec2, angle: f64) -> DVec2 {
    anchor + DVec2::from_angle(angle).rotate(point - anchor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_wrap_angle() {
        assert_relative_eq!(wrap_angle(0.0), 0.0);
        assert_relative_eq!(wrap_angle(TAU + 1.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(wrap_angle(-FRAC_PI_2), 1.5 * PI, epsilon = 1e-12);
        assert!(wrap_angle(TAU) < TAU);
    }

    #[test]
    fn test_rotate_point_quarter_turn() {
        let anchor = DVec2::new(10.0, 10.0);
        let p = rotate_point(anchor, DVec2::new(15.0, 10.0), FRAC_PI_2);
        assert_relative_eq!(p.x, 10.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 15.0, epsilon = 1e-12);
    }
}
