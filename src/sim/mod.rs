//! Deterministic simulation module
//!
//! All orbital and production logic lives here. This module must be pure
//! and deterministic:
//! - Seeded RNG only, and only during generation
//! - Stable iteration order (arena order: each root, then its satellites)
//! - No rendering or platform dependencies

pub mod clock;
pub mod generate;
pub mod orbit;
pub mod planet;
pub mod ship;
pub mod snapshot;
pub mod system;

pub use clock::FixedStep;
pub use generate::{BodyParams, generate, roll_body};
pub use orbit::{Anchor, Direction, Orbit};
pub use planet::{Planet, PlanetId};
pub use ship::{Ship, ShipId, ShipPool};
pub use snapshot::{PlanetView, ShipView, SystemSnapshot};
pub use system::{SolarSystem, Star};
