//! Orbiting body primitive
//!
//! A body circles its anchor at a fixed distance. Angular speed is
//! `direction * |velocity| / distance`. The anchor is stored as an id and
//! resolved by the owner of the planet arena each tick.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::planet::PlanetId;
use crate::error::SimError;
use crate::rotate_point;

/// What a body orbits around
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Anchor {
    /// The system origin (the star)
    Origin,
    /// Another planet's current position
    Planet(PlanetId),
}

/// Sense of rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    CounterClockwise,
    Clockwise,
}

impl Direction {
    /// +1 for counter-clockwise, -1 for clockwise
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Direction::CounterClockwise => 1.0,
            Direction::Clockwise => -1.0,
        }
    }
}

/// A body on a circular orbit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Orbit {
    pub anchor: Anchor,
    /// Only the magnitude matters
    pub velocity: DVec2,
    pub direction: Direction,
    /// Radius around the anchor, always > 0
    pub(crate) distance: f64,
    pub position: DVec2,
}

impl Orbit {
    /// Place a body `distance` to the right of `anchor_pos`.
    ///
    /// Fails if `distance` is not a finite positive number, since the
    /// angular speed divides by it.
    pub fn new(
        anchor: Anchor,
        anchor_pos: DVec2,
        distance: f64,
        velocity: DVec2,
        direction: Direction,
    ) -> Result<Self, SimError> {
        if !(distance.is_finite() && distance > 0.0) {
            return Err(SimError::NonPositiveDistance(distance));
        }
        Ok(Self {
            anchor,
            velocity,
            direction,
            distance,
            position: anchor_pos + DVec2::new(distance, 0.0),
        })
    }

    #[inline]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Signed angular speed (radians/s)
    #[inline]
    pub fn angular_speed(&self) -> f64 {
        self.direction.sign() * self.velocity.length() / self.distance
    }

    /// Rotate around `anchor_pos` for `dt` seconds and return the shift
    pub fn rotate(&mut self, anchor_pos: DVec2, dt: f64) -> DVec2 {
        let angle = self.angular_speed() * dt;
        if angle == 0.0 {
            return DVec2::ZERO;
        }
        let old = self.position;
        self.position = rotate_point(anchor_pos, old, angle);
        self.position - old
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use std::f64::consts::PI;

    fn orbit_at(anchor_pos: DVec2, distance: f64, speed: f64, direction: Direction) -> Orbit {
        let velocity = DVec2::new(speed, 0.0);
        Orbit::new(Anchor::Origin, anchor_pos, distance, velocity, direction).unwrap()
    }

    #[test]
    fn test_new_places_body_right_of_anchor() {
        let o = orbit_at(DVec2::new(5.0, -2.0), 10.0, 1.0, Direction::CounterClockwise);
        assert_eq!(o.position, DVec2::new(15.0, -2.0));
    }

    #[test]
    fn test_rejects_non_positive_distance() {
        for d in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let dir = Direction::Clockwise;
            let r = Orbit::new(Anchor::Origin, DVec2::ZERO, d, DVec2::ONE, dir);
            assert!(matches!(r, Err(SimError::NonPositiveDistance(_))));
        }
    }

    #[test]
    fn test_half_turn_counter_clockwise() {
        // |v| / d = PI rad/s
        let mut o = orbit_at(DVec2::ZERO, 10.0, 10.0 * PI, Direction::CounterClockwise);
        o.rotate(DVec2::ZERO, 0.5);
        assert_relative_eq!(o.position.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(o.position.y, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_clockwise_goes_negative_y() {
        let mut o = orbit_at(DVec2::ZERO, 10.0, 10.0 * PI, Direction::Clockwise);
        o.rotate(DVec2::ZERO, 0.5);
        assert_relative_eq!(o.position.y, -10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_shift_is_displacement() {
        let mut o = orbit_at(DVec2::new(1.0, 1.0), 4.0, 3.0, Direction::CounterClockwise);
        let before = o.position;
        let shift = o.rotate(DVec2::new(1.0, 1.0), 0.7);
        assert_relative_eq!((before + shift).x, o.position.x, epsilon = 1e-12);
        assert_relative_eq!((before + shift).y, o.position.y, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_dt_is_exact_noop() {
        let mut o = orbit_at(DVec2::new(3.0, 4.0), 7.5, 6.0, Direction::Clockwise);
        let before = o.position;
        assert_eq!(o.rotate(DVec2::new(3.0, 4.0), 0.0), DVec2::ZERO);
        assert_eq!(o.position, before);
    }

    #[test]
    fn test_direction_sign() {
        assert_eq!(Direction::Clockwise.sign(), -1.0);
        assert_eq!(Direction::CounterClockwise.sign(), 1.0);
    }

    proptest! {
        #[test]
        fn prop_rotate_preserves_distance(
            ax in -500.0f64..500.0,
            ay in -500.0f64..500.0,
            distance in 0.5f64..600.0,
            speed in 0.0f64..20.0,
            clockwise in any::<bool>(),
            dt in 0.0f64..30.0,
        ) {
            let anchor = DVec2::new(ax, ay);
            let dir = if clockwise {
                Direction::Clockwise
            } else {
                Direction::CounterClockwise
            };
            let mut o = orbit_at(anchor, distance, speed, dir);
            o.rotate(anchor, dt);
            let drift = (o.position.distance(anchor) - distance).abs();
            prop_assert!(drift < 1e-7 * distance.max(1.0));
        }
    }
}
