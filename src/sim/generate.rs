//! Procedural solar system generation
//!
//! Planets are spread over equal radial bands between `min_distance` and
//! `max_distance`, each with up to `max_satellites` moons. Every draw comes
//! from the caller's RNG so a seed fully determines the system.

use glam::DVec2;
use rand::Rng;

use super::orbit::{Anchor, Direction};
use super::planet::PlanetId;
use super::system::SolarSystem;
use crate::config::{GenerationParams, SimConfig};
use crate::error::SimError;
use crate::player::{PlayerId, Roster};

/// Randomised body parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyParams {
    pub size: f64,
    pub speed: f64,
    pub direction: Direction,
}

impl BodyParams {
    /// Orbital velocity vector; both axes carry `speed`
    pub fn velocity(&self) -> DVec2 {
        DVec2::splat(self.speed)
    }
}

/// Draw a size from `sizes`, a speed in [min_speed, max_speed) and a direction
pub fn roll_body<R: Rng + ?Sized>(rng: &mut R, sizes: &[f64], config: &SimConfig) -> BodyParams {
    let size = sizes[rng.random_range(0..sizes.len())];
    let speed = rng.random_range(config.min_speed..config.max_speed);
    let direction = if rng.random_bool(0.5) {
        Direction::CounterClockwise
    } else {
        Direction::Clockwise
    };
    BodyParams {
        size,
        speed,
        direction,
    }
}

/// Build a new system
pub fn generate<R: Rng + ?Sized>(
    params: &GenerationParams,
    config: SimConfig,
    roster: Roster,
    rng: &mut R,
) -> Result<SolarSystem, SimError> {
    config.validate()?;
    params.validate()?;

    let mut system = SolarSystem::new(config.clone(), roster);
    let step = params.step();
    let jitter = step / 3.0;

    for i in 0..params.planet_amount {
        let body = roll_body(rng, &config.planet_sizes, &config);

        // Nudge off the band centre so orbits don't look gridded; the inner
        // bound stays within half the band base so the distance stays > 0
        let base = params.min_distance + i as f64 * step;
        let nudge = if jitter > 0.0 {
            rng.random_range(-jitter.min(base / 2.0)..=jitter)
        } else {
            0.0
        };
        let distance = base + nudge;

        let planet = system.add_planet(
            Anchor::Origin,
            distance,
            body.size,
            body.direction,
            body.velocity(),
            PlayerId::UNOCCUPIED,
        )?;

        let satellites = rng.random_range(0..=params.max_satellites);
        for s in 0..satellites {
            let moon = roll_body(rng, &config.satellite_sizes, &config);
            let sat_distance = (s + 1) as f64 * config.satellite_spacing;
            let sat = system.add_planet(
                Anchor::Planet(planet),
                sat_distance,
                moon.size,
                moon.direction,
                moon.velocity(),
                PlayerId::UNOCCUPIED,
            )?;
            system.rotate_body(sat, rng.random::<f64>() * sat_distance);
        }

        // Spread the group around the clock
        system.rotate_group(planet, rng.random::<f64>() * distance);
    }

    // Ships were laid out before their planets moved
    for i in 0..system.planets().len() {
        system.layout_ships(PlanetId(i as u32), 0.0);
    }

    log::info!(
        "Generated {} planets ({} satellites), {} ships",
        system.root_ids().len(),
        system.planets().len() - system.root_ids().len(),
        system.total_ships()
    );

    Ok(system)
}
