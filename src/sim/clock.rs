//! Fixed timestep driver
//!
//! Turns variable frame deltas into a whole number of `SIM_DT` updates.

use super::system::SolarSystem;
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

/// Accumulates wall-clock time and feeds fixed steps to the simulation
#[derive(Debug, Clone)]
pub struct FixedStep {
    pub dt: f64,
    pub max_substeps: u32,
    accumulator: f64,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(SIM_DT)
    }
}

impl FixedStep {
    pub fn new(dt: f64) -> Self {
        Self {
            dt,
            max_substeps: MAX_SUBSTEPS,
            accumulator: 0.0,
        }
    }

    /// Run as many fixed updates as `frame_dt` covers, up to `max_substeps`.
    ///
    /// Returns the number of updates run. Leftover time carries over.
    pub fn advance(&mut self, system: &mut SolarSystem, frame_dt: f64) -> u32 {
        // Negative or NaN deltas contribute nothing
        let frame_dt = if frame_dt > 0.0 {
            frame_dt.min(MAX_FRAME_DT)
        } else {
            0.0
        };
        self.accumulator += frame_dt;

        let mut substeps = 0;
        while self.accumulator >= self.dt && substeps < self.max_substeps {
            system.update(self.dt);
            self.accumulator -= self.dt;
            substeps += 1;
        }

        // Drop the backlog instead of spiralling
        if substeps == self.max_substeps && self.accumulator >= self.dt {
            log::warn!("Simulation falling behind, dropping {:.3}s", self.accumulator);
            self.accumulator = 0.0;
        }

        substeps
    }

    /// Fraction of a step left in the accumulator, for render interpolation
    pub fn alpha(&self) -> f64 {
        self.accumulator / self.dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::player::Roster;

    fn empty() -> SolarSystem {
        SolarSystem::new(SimConfig::default(), Roster::default())
    }

    #[test]
    fn test_whole_steps_and_carry() {
        let mut sys = empty();
        let mut clock = FixedStep::new(0.25);
        assert_eq!(clock.advance(&mut sys, 0.2), 0);
        assert_eq!(clock.advance(&mut sys, 0.2), 1);
        assert!((clock.alpha() - 0.6).abs() < 1e-9);
        assert_eq!(sys.time_ticks, 1);
    }

    #[test]
    fn test_frame_delta_is_clamped() {
        let mut sys = empty();
        let mut clock = FixedStep::new(0.125);
        // 10s is clamped to MAX_FRAME_DT = 0.25 -> 2 steps
        assert_eq!(clock.advance(&mut sys, 10.0), 2);
        assert_eq!(clock.advance(&mut sys, -1.0), 0);
        assert_eq!(clock.advance(&mut sys, f64::NAN), 0);
    }

    #[test]
    fn test_substep_cap_drops_backlog() {
        let mut sys = empty();
        let mut clock = FixedStep::new(0.01);
        clock.max_substeps = 3;
        assert_eq!(clock.advance(&mut sys, 0.2), 3);
        assert_eq!(clock.alpha(), 0.0);
    }
}
