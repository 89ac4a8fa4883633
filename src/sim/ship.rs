//! Ships and the ship recycling pool
//!
//! Ships live in one contiguous arena. Retired ships go on a free list and
//! are handed out again before the arena grows.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::orbit::{Anchor, Direction, Orbit};
use super::planet::PlanetId;
use crate::player::PlayerId;

/// Index of a ship in the pool arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShipId(pub u32);

impl ShipId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A ship stationed at a planet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    /// Identity tag, assigned on fresh allocation and kept across reuse
    pub serial: u64,
    pub orbit: Orbit,
    pub owner: PlayerId,
    /// Planet whose roster holds this ship
    pub planet: PlanetId,
}

impl Ship {
    /// Re-station this ship at a planet
    pub(crate) fn station(
        &mut self,
        planet: PlanetId,
        planet_pos: DVec2,
        distance: f64,
        speed: f64,
        owner: PlayerId,
    ) {
        self.planet = planet;
        self.owner = owner;
        self.orbit.anchor = Anchor::Planet(planet);
        self.orbit.distance = distance;
        self.orbit.velocity = DVec2::splat(speed);
        self.orbit.direction = Direction::CounterClockwise;
        self.orbit.position = planet_pos + DVec2::new(distance, 0.0);
    }

    #[inline]
    pub fn position(&self) -> DVec2 {
        self.orbit.position
    }
}

/// Arena of ships with a free list of retired ones
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShipPool {
    ships: Vec<Ship>,
    free: Vec<ShipId>,
    next_serial: u64,
}

impl ShipPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out a retired ship if there is one, else grow the arena.
    ///
    /// Returns the id and whether it was reused. The caller must
    /// re-station the ship before use.
    pub(crate) fn allocate(&mut self) -> (ShipId, bool) {
        if let Some(id) = self.free.pop() {
            return (id, true);
        }

        let id = ShipId(self.ships.len() as u32);
        let serial = self.next_serial;
        self.next_serial += 1;
        self.ships.push(Ship {
            serial,
            orbit: Orbit {
                anchor: Anchor::Origin,
                velocity: DVec2::ZERO,
                direction: Direction::CounterClockwise,
                distance: 1.0,
                position: DVec2::ZERO,
            },
            owner: PlayerId::UNOCCUPIED,
            planet: PlanetId(0),
        });
        (id, false)
    }

    /// Return a ship to the pool. Ids already free are ignored.
    pub fn recycle(&mut self, id: ShipId) -> bool {
        if id.index() >= self.ships.len() || self.free.contains(&id) {
            return false;
        }
        self.free.push(id);
        true
    }

    pub fn get(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id.index())
    }

    pub(crate) fn get_mut(&mut self, id: ShipId) -> Option<&mut Ship> {
        self.ships.get_mut(id.index())
    }

    pub fn is_free(&self, id: ShipId) -> bool {
        self.free.contains(&id)
    }

    /// Ships ever allocated (active plus pooled)
    pub fn capacity(&self) -> usize {
        self.ships.len()
    }

    /// Ships waiting for reuse
    pub fn free_count(&self) -> usize {
        self.free.len()
    }
}
