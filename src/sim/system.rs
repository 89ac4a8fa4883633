//! The solar system world
//!
//! Owns every planet (in a stable arena), the ship pool, the player roster
//! and the run's counters. All cross-body references are ids into this
//! struct, so one `&mut SolarSystem` serialises every mutation.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use super::generate;
use super::orbit::{Anchor, Direction};
use super::planet::{Planet, PlanetId};
use super::ship::{Ship, ShipId, ShipPool};
use crate::config::{GenerationParams, SimConfig};
use crate::consts::STAR_RADIUS;
use crate::error::SimError;
use crate::player::{Color, PlayerId, Roster};
use crate::rotate_point;

/// The central star. Purely informational; nothing orbits it but roots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub position: DVec2,
    pub radius: f64,
    pub color: Color,
}

impl Default for Star {
    fn default() -> Self {
        Self {
            position: DVec2::ZERO,
            radius: STAR_RADIUS,
            color: Color::GOLD,
        }
    }
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolarSystem {
    config: SimConfig,
    roster: Roster,
    star: Star,
    /// Arena; a planet's id is its index. Roots precede their satellites.
    planets: Vec<Planet>,
    roots: Vec<PlanetId>,
    pool: ShipPool,
    /// Planets created plus ships handed out (fresh or reused)
    object_count: u64,
    /// Number of `update` calls
    pub time_ticks: u64,
    /// Simulated seconds
    pub elapsed: f64,
}

impl SolarSystem {
    /// An empty system with no planets
    pub fn new(config: SimConfig, roster: Roster) -> Self {
        Self {
            config,
            roster,
            star: Star::default(),
            planets: Vec::new(),
            roots: Vec::new(),
            pool: ShipPool::new(),
            object_count: 0,
            time_ticks: 0,
            elapsed: 0.0,
        }
    }

    /// Procedurally generate a system using the caller's RNG
    pub fn generate<R: Rng + ?Sized>(
        params: &GenerationParams,
        config: SimConfig,
        roster: Roster,
        rng: &mut R,
    ) -> Result<Self, SimError> {
        generate::generate(params, config, roster, rng)
    }

    /// Generate from `config.generation` with a seeded PCG stream
    pub fn from_seed(config: SimConfig, roster: Roster, seed: u64) -> Result<Self, SimError> {
        let mut rng = Pcg32::seed_from_u64(seed);
        let params = config.generation.clone();
        Self::generate(&params, config, roster, &mut rng)
    }

    // === Construction ===

    /// Add a planet orbiting `anchor`, together with its starting garrison.
    ///
    /// # Panics
    /// If `anchor` names a planet not in this system.
    pub fn add_planet(
        &mut self,
        anchor: Anchor,
        distance: f64,
        size: f64,
        direction: Direction,
        velocity: DVec2,
        owner: PlayerId,
    ) -> Result<PlanetId, SimError> {
        let id = PlanetId(self.planets.len() as u32);
        let anchor_pos = self.anchor_position(anchor);
        let planet = Planet::new(
            id,
            anchor,
            anchor_pos,
            distance,
            size,
            direction,
            velocity,
            owner,
        )?;
        self.planets.push(planet);

        match anchor {
            Anchor::Origin => self.roots.push(id),
            Anchor::Planet(parent) => self.planets[parent.index()].satellites.push(id),
        }
        self.object_count += 1;

        let garrison = (size / self.config.garrison_divisor).floor() as u32;
        for _ in 0..garrison {
            let ship = self.new_ship(id, owner);
            self.planets[id.index()].place_ship(ship);
        }
        self.layout_ships(id, 0.0);

        Ok(id)
    }

    // === Orbital motion ===

    /// Current position of an anchor
    ///
    /// # Panics
    /// If `anchor` names a planet not in this system.
    pub fn anchor_position(&self, anchor: Anchor) -> DVec2 {
        match anchor {
            Anchor::Origin => self.star.position,
            Anchor::Planet(id) => self.planets[id.index()].position(),
        }
    }

    /// Rotate a single planet about its anchor, returning its shift
    ///
    /// # Panics
    /// If `id` names a planet not in this system.
    pub fn rotate_body(&mut self, id: PlanetId, dt: f64) -> DVec2 {
        let anchor_pos = self.anchor_position(self.planets[id.index()].orbit.anchor);
        self.planets[id.index()].orbit.rotate(anchor_pos, dt)
    }

    /// Rotate a planet and carry its satellites along by the same shift.
    ///
    /// Satellites are translated, not rotated; each one then rotates about
    /// the planet's new position in its own update.
    ///
    /// # Panics
    /// If `id` names a planet not in this system.
    pub fn rotate_group(&mut self, id: PlanetId, dt: f64) {
        let shift = self.rotate_body(id, dt);
        if shift == DVec2::ZERO {
            return;
        }
        for k in 0..self.planets[id.index()].satellites.len() {
            let sat = self.planets[id.index()].satellites[k];
            self.planets[sat.index()].orbit.position += shift;
        }
    }

    // === Ships ===

    /// Station a ship at `planet`, reusing a pooled one when available.
    ///
    /// The ship is not placed in the planet's roster; see `update_planet`.
    ///
    /// # Panics
    /// If `planet` names a planet not in this system.
    pub fn new_ship(&mut self, planet: PlanetId, owner: PlayerId) -> ShipId {
        let (planet_pos, size) = {
            let p = &self.planets[planet.index()];
            (p.position(), p.size)
        };
        let distance = size * self.config.ship_distance_factor;
        let speed = self.config.ship_speed;

        let (id, reused) = self.pool.allocate();
        if let Some(ship) = self.pool.get_mut(id) {
            ship.station(planet, planet_pos, distance, speed, owner);
        }
        if reused {
            log::trace!("Reused pooled ship {:?} at planet {:?}", id, planet);
        }

        self.object_count += 1;
        id
    }

    /// Take a ship out of a planet's roster and return it to the pool
    pub fn retire_ship(&mut self, planet: PlanetId, slot: usize) -> Option<ShipId> {
        let ship = self.planets.get_mut(planet.index())?.take_ship(slot)?;
        self.pool.recycle(ship);
        Some(ship)
    }

    /// Spread the planet's ships evenly on a ring and advance the ring phase
    ///
    /// # Panics
    /// If `id` names a planet not in this system.
    pub fn layout_ships(&mut self, id: PlanetId, dt: f64) {
        let layout_speed = self.config.ship_layout_speed;
        let planet = &mut self.planets[id.index()];
        let phase = planet.advance_ship_phase(dt, layout_speed);

        let count = planet.ship_count();
        if count == 0 {
            return;
        }
        let step = TAU / count as f64;
        let center = planet.position();

        let planet = &self.planets[id.index()];
        for (k, ship_id) in planet.stationed().enumerate() {
            if let Some(ship) = self.pool.get_mut(ship_id) {
                let start = center + DVec2::new(ship.orbit.distance(), 0.0);
                ship.orbit.position = rotate_point(center, start, k as f64 * step + phase);
            }
        }
    }

    // === Tick ===

    /// Advance one planet: orbit, production, ring layout
    ///
    /// # Panics
    /// If `id` names a planet not in this system.
    pub fn update_planet(&mut self, id: PlanetId, dt: f64) {
        self.rotate_group(id, dt);

        let production_factor = self.config.production_factor;
        let due = self.planets[id.index()].accrue_production(dt, production_factor);
        if due > 0 {
            let owner = self.planets[id.index()].owner;
            for _ in 0..due {
                let ship = self.new_ship(id, owner);
                self.planets[id.index()].place_ship(ship);
            }
            log::debug!(
                "Planet {:?} produced {} ship(s), now {}",
                id,
                due,
                self.planets[id.index()].ship_count()
            );
        }

        self.layout_ships(id, dt);
    }

    /// Advance every planet by `dt` seconds in arena order
    pub fn update(&mut self, dt: f64) {
        for i in 0..self.planets.len() {
            self.update_planet(PlanetId(i as u32), dt);
        }
        self.time_ticks += 1;
        self.elapsed += dt;
    }

    // === Read-only access ===

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn star(&self) -> &Star {
        &self.star
    }

    /// Every planet and satellite, in arena order
    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn planet(&self, id: PlanetId) -> Option<&Planet> {
        self.planets.get(id.index())
    }

    /// Planets orbiting the star directly
    pub fn roots(&self) -> impl Iterator<Item = &Planet> {
        self.roots.iter().map(move |id| &self.planets[id.index()])
    }

    pub fn root_ids(&self) -> &[PlanetId] {
        &self.roots
    }

    pub fn satellites_of(&self, id: PlanetId) -> impl Iterator<Item = &Planet> {
        self.planet(id)
            .into_iter()
            .flat_map(move |p| p.satellites.iter().map(move |s| &self.planets[s.index()]))
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.pool.get(id)
    }

    /// Ships stationed at a planet, in roster order
    pub fn ships_of(&self, id: PlanetId) -> impl Iterator<Item = &Ship> {
        self.planet(id)
            .into_iter()
            .flat_map(move |p| p.stationed().filter_map(move |s| self.pool.get(s)))
    }

    pub fn pool(&self) -> &ShipPool {
        &self.pool
    }

    /// Display colour for anything owned by `player`
    pub fn owner_color(&self, player: PlayerId) -> Color {
        self.roster.color_of(player)
    }

    pub fn object_count(&self) -> u64 {
        self.object_count
    }

    /// Ships currently stationed anywhere
    pub fn total_ships(&self) -> usize {
        self.planets.iter().map(Planet::ship_count).sum()
    }
}
