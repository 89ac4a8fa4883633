//! Read-only view of the system for renderers
//!
//! Flat, serialisable and free of ids that need resolving.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::planet::PlanetId;
use super::system::{SolarSystem, Star};
use crate::player::{Color, PlayerId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipView {
    pub position: DVec2,
    pub owner: PlayerId,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetView {
    pub id: PlanetId,
    pub position: DVec2,
    pub size: f64,
    pub owner: PlayerId,
    pub color: Color,
    pub satellites: Vec<PlanetId>,
    pub ships: Vec<ShipView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemSnapshot {
    pub time_ticks: u64,
    pub elapsed: f64,
    pub star: Star,
    pub planets: Vec<PlanetView>,
}

impl SolarSystem {
    pub fn snapshot(&self) -> SystemSnapshot {
        let planets = self
            .planets()
            .iter()
            .map(|p| PlanetView {
                id: p.id,
                position: p.position(),
                size: p.size,
                owner: p.owner,
                color: self.owner_color(p.owner),
                satellites: p.satellites.clone(),
                ships: self
                    .ships_of(p.id)
                    .map(|s| ShipView {
                        position: s.position(),
                        owner: s.owner,
                        color: self.owner_color(s.owner),
                    })
                    .collect(),
            })
            .collect();

        SystemSnapshot {
            time_ticks: self.time_ticks,
            elapsed: self.elapsed,
            star: *self.star(),
            planets,
        }
    }
}
