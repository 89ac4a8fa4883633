//! Planets
//!
//! A planet owns its satellites and its ship roster by id. The world arena
//! (`SolarSystem`) resolves those ids.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::orbit::{Anchor, Direction, Orbit};
use super::ship::ShipId;
use crate::error::SimError;
use crate::player::PlayerId;
use crate::wrap_angle;

/// Index of a planet in the world arena.
///
/// Only the arena hands these out; an id is valid for the system that
/// created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlanetId(pub(crate) u32);

impl PlanetId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A planet or satellite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Planet {
    pub id: PlanetId,
    pub orbit: Orbit,
    pub owner: PlayerId,
    /// Radius; also drives production and ship ring size
    pub size: f64,
    /// Satellites orbiting this planet (sorted by creation)
    pub satellites: Vec<PlanetId>,
    /// Ship roster; `None` marks a retired slot awaiting reuse
    pub ships: Vec<Option<ShipId>>,
    /// Fractional ship production carried between ticks
    pub ships_produced: f64,
    /// Phase of the rotating ship ring (radians, [0, 2π))
    pub ship_angle_mod: f64,
}

impl Planet {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        id: PlanetId,
        anchor: Anchor,
        anchor_pos: DVec2,
        distance: f64,
        size: f64,
        direction: Direction,
        velocity: DVec2,
        owner: PlayerId,
    ) -> Result<Self, SimError> {
        if !(size.is_finite() && size > 0.0) {
            return Err(SimError::NonPositiveSize(size));
        }
        Ok(Self {
            id,
            orbit: Orbit::new(anchor, anchor_pos, distance, velocity, direction)?,
            owner,
            size,
            satellites: Vec::new(),
            ships: Vec::new(),
            ships_produced: 0.0,
            ship_angle_mod: 0.0,
        })
    }

    #[inline]
    pub fn position(&self) -> DVec2 {
        self.orbit.position
    }

    /// Whether this planet orbits the star directly
    pub fn is_root(&self) -> bool {
        self.orbit.anchor == Anchor::Origin
    }

    /// Ship production rate (ships/s)
    pub fn production_rate(&self, production_factor: f64) -> f64 {
        self.size.sqrt() * production_factor
    }

    /// Add `dt` worth of production and take out every whole ship now due
    pub fn accrue_production(&mut self, dt: f64, production_factor: f64) -> u32 {
        self.ships_produced += self.production_rate(production_factor) * dt;
        let mut due = 0;
        while self.ships_produced >= 1.0 {
            self.ships_produced -= 1.0;
            due += 1;
        }
        due
    }

    /// Put a ship in the first empty slot, or append one
    pub fn place_ship(&mut self, ship: ShipId) -> usize {
        match self.ships.iter().position(Option::is_none) {
            Some(slot) => {
                self.ships[slot] = Some(ship);
                slot
            }
            None => {
                self.ships.push(Some(ship));
                self.ships.len() - 1
            }
        }
    }

    /// Empty a roster slot, returning the ship that was there
    pub fn take_ship(&mut self, slot: usize) -> Option<ShipId> {
        self.ships.get_mut(slot).and_then(Option::take)
    }

    /// Stationed ships in slot order
    pub fn stationed(&self) -> impl Iterator<Item = ShipId> + '_ {
        self.ships.iter().flatten().copied()
    }

    pub fn ship_count(&self) -> usize {
        self.ships.iter().flatten().count()
    }

    /// Advance the ring phase, wrapping into [0, 2π)
    pub fn advance_ship_phase(&mut self, dt: f64, layout_speed: f64) -> f64 {
        self.ship_angle_mod = wrap_angle(self.ship_angle_mod + dt * layout_speed);
        self.ship_angle_mod
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planet(size: f64) -> Planet {
        Planet::new(
            PlanetId(0),
            Anchor::Origin,
            DVec2::ZERO,
            100.0,
            size,
            Direction::CounterClockwise,
            DVec2::splat(5.0),
            PlayerId::UNOCCUPIED,
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_bad_size_and_distance() {
        let bad_size = Planet::new(
            PlanetId(0),
            Anchor::Origin,
            DVec2::ZERO,
            100.0,
            0.0,
            Direction::Clockwise,
            DVec2::ONE,
            PlayerId::UNOCCUPIED,
        );
        assert!(matches!(bad_size, Err(SimError::NonPositiveSize(_))));

        let bad_distance = Planet::new(
            PlanetId(0),
            Anchor::Origin,
            DVec2::ZERO,
            0.0,
            4.0,
            Direction::Clockwise,
            DVec2::ONE,
            PlayerId::UNOCCUPIED,
        );
        assert!(matches!(bad_distance, Err(SimError::NonPositiveDistance(_))));
    }

    #[test]
    fn test_accrue_production_carries_fraction() {
        // sqrt(4) * 0.1 = 0.2 ships/s
        let mut p = planet(4.0);
        assert_eq!(p.accrue_production(4.0, 0.1), 0);
        assert!((p.ships_produced - 0.8).abs() < 1e-12);
        assert_eq!(p.accrue_production(7.0, 0.1), 2);
        assert!((p.ships_produced - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_accrue_production_zero_dt() {
        let mut p = planet(9.0);
        p.ships_produced = 0.25;
        assert_eq!(p.accrue_production(0.0, 0.1), 0);
        assert_eq!(p.ships_produced, 0.25);
    }

    #[test]
    fn test_place_ship_fills_holes_first() {
        let mut p = planet(9.0);
        assert_eq!(p.place_ship(ShipId(10)), 0);
        assert_eq!(p.place_ship(ShipId(11)), 1);
        assert_eq!(p.place_ship(ShipId(12)), 2);

        assert_eq!(p.take_ship(1), Some(ShipId(11)));
        assert_eq!(p.take_ship(1), None);
        assert_eq!(p.ship_count(), 2);

        assert_eq!(p.place_ship(ShipId(13)), 1);
        assert_eq!(p.place_ship(ShipId(14)), 3);
        let ids: Vec<_> = p.stationed().collect();
        assert_eq!(ids, vec![ShipId(10), ShipId(13), ShipId(12), ShipId(14)]);
    }

    #[test]
    fn test_ship_phase_wraps() {
        let mut p = planet(9.0);
        p.advance_ship_phase(13.0, 0.5);
        assert!(p.ship_angle_mod >= 0.0 && p.ship_angle_mod < std::f64::consts::TAU);
        assert!((p.ship_angle_mod - (6.5 - std::f64::consts::TAU)).abs() < 1e-12);
    }
}
