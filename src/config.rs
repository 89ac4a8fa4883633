//! Simulation tuning and generation parameters
//!
//! Loaded from JSON on native builds; every field falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SimError;

/// Parameters for procedural system generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    /// Number of root planets
    pub planet_amount: u32,
    /// Upper bound (inclusive) of satellites per planet
    pub max_satellites: u32,
    /// Inner edge of the planet band
    pub min_distance: f64,
    /// Outer edge of the planet band
    pub max_distance: f64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            planet_amount: 12,
            max_satellites: 3,
            min_distance: 100.0,
            max_distance: 400.0,
        }
    }
}

impl GenerationParams {
    pub fn new(
        planet_amount: u32,
        max_satellites: u32,
        min_distance: f64,
        max_distance: f64,
    ) -> Self {
        Self {
            planet_amount,
            max_satellites,
            min_distance,
            max_distance,
        }
    }

    /// Radial width of each planet's band
    pub fn step(&self) -> f64 {
        if self.planet_amount == 0 {
            0.0
        } else {
            (self.max_distance - self.min_distance) / self.planet_amount as f64
        }
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if self.planet_amount == 0 {
            return Ok(());
        }
        let ordered = self.min_distance > 0.0 && self.max_distance > self.min_distance;
        if !ordered || !self.max_distance.is_finite() {
            return Err(SimError::InvalidDistanceRange {
                min: self.min_distance,
                max: self.max_distance,
            });
        }
        Ok(())
    }
}

/// Simulation tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Production ===
    /// Ships per second per sqrt(size)
    pub production_factor: f64,
    /// A new planet starts with `floor(size / garrison_divisor)` ships
    pub garrison_divisor: f64,

    // === Ship ring ===
    /// Angular speed of the ring formation (radians/s)
    pub ship_layout_speed: f64,
    /// Ring radius as a multiple of planet size
    pub ship_distance_factor: f64,
    /// Per-axis component of a fresh ship's velocity
    pub ship_speed: f64,

    // === Bodies ===
    /// Sizes a root planet may be drawn from
    pub planet_sizes: Vec<f64>,
    /// Sizes a satellite may be drawn from
    pub satellite_sizes: Vec<f64>,
    /// Orbital gap between consecutive satellites
    pub satellite_spacing: f64,
    /// Orbital speed range [min, max)
    pub min_speed: f64,
    pub max_speed: f64,

    /// Layout of the generated system
    pub generation: GenerationParams,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            production_factor: PRODUCTION_FACTOR,
            garrison_divisor: GARRISON_DIVISOR,

            ship_layout_speed: SHIP_LAYOUT_SPEED,
            ship_distance_factor: SHIP_DISTANCE_FACTOR,
            ship_speed: SHIP_SPEED,

            planet_sizes: vec![7.0, 8.0, 9.0],
            satellite_sizes: vec![3.0, 4.0, 5.0],
            satellite_spacing: SATELLITE_SPACING,
            min_speed: MIN_ORBIT_SPEED,
            max_speed: MAX_ORBIT_SPEED,

            generation: GenerationParams::default(),
        }
    }
}

impl SimConfig {
    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded sim config from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SimError> {
        let non_negative = [
            ("production_factor", self.production_factor),
            ("ship_layout_speed", self.ship_layout_speed),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(SimError::InvalidConfig(format!(
                    "{name} must be >= 0, got {value}"
                )));
            }
        }

        let positive = [
            ("garrison_divisor", self.garrison_divisor),
            ("ship_distance_factor", self.ship_distance_factor),
            ("satellite_spacing", self.satellite_spacing),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SimError::InvalidConfig(format!(
                    "{name} must be > 0, got {value}"
                )));
            }
        }

        let size_tables = [
            ("planet_sizes", &self.planet_sizes),
            ("satellite_sizes", &self.satellite_sizes),
        ];
        for (name, sizes) in size_tables {
            if sizes.is_empty() {
                return Err(SimError::InvalidConfig(format!("{name} is empty")));
            }
            if let Some(bad) = sizes.iter().find(|s| !(s.is_finite() && **s > 0.0)) {
                return Err(SimError::NonPositiveSize(*bad));
            }
        }

        let speed_range_ok = self.min_speed >= 0.0
            && self.max_speed > self.min_speed
            && self.max_speed.is_finite();
        if !speed_range_ok {
            return Err(SimError::InvalidConfig(format!(
                "speed range {}..{} is empty",
                self.min_speed, self.max_speed
            )));
        }

        self.generation.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SimConfig::from_json(r#"{ "production_factor": 0.5 }"#).unwrap();
        assert_eq!(config.production_factor, 0.5);
        assert_eq!(config.planet_sizes, vec![7.0, 8.0, 9.0]);
        assert_eq!(config.generation.planet_amount, 12);
    }

    #[test]
    fn test_json_roundtrip_preserves_generation() {
        let mut config = SimConfig::default();
        config.generation = GenerationParams::new(3, 0, 100.0, 400.0);
        let parsed = SimConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_rejects_bad_values() {
        let empty_sizes = SimConfig {
            satellite_sizes: Vec::new(),
            ..Default::default()
        };
        assert!(matches!(
            empty_sizes.validate(),
            Err(SimError::InvalidConfig(_))
        ));

        let zero_size = SimConfig {
            planet_sizes: vec![7.0, 0.0],
            ..Default::default()
        };
        assert!(matches!(
            zero_size.validate(),
            Err(SimError::NonPositiveSize(_))
        ));

        let negative_production = SimConfig {
            production_factor: -1.0,
            ..Default::default()
        };
        assert!(negative_production.validate().is_err());

        assert!(matches!(
            SimConfig::from_json("{ not json"),
            Err(SimError::Json(_))
        ));
    }

    #[test]
    fn test_generation_range() {
        assert!(GenerationParams::new(3, 0, 100.0, 400.0).validate().is_ok());
        assert!(GenerationParams::new(0, 0, 0.0, 0.0).validate().is_ok());
        assert!(matches!(
            GenerationParams::new(3, 0, 400.0, 100.0).validate(),
            Err(SimError::InvalidDistanceRange { .. })
        ));
        assert!(GenerationParams::new(3, 0, 0.0, 100.0).validate().is_err());
        assert_eq!(GenerationParams::new(3, 0, 100.0, 400.0).step(), 100.0);
    }
}
