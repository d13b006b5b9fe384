//! Map selection configuration

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::types::{Coordinate, CoordinateSpan, MapRegion};

/// Initial map region and area selection limits
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MapConfig {
    /// Region shown when the map screen opens
    #[serde(default = "default_initial_region")]
    pub initial_region: MapRegion,

    /// Minimum number of points an area needs before it can be confirmed
    #[serde(default = "default_min_area_points")]
    pub min_area_points: usize,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            initial_region: default_initial_region(),
            min_area_points: default_min_area_points(),
        }
    }
}

impl MapConfig {
    pub fn from_env() -> Self {
        let min_area_points = std::env::var("CAMS_MIN_AREA_POINTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_min_area_points);

        Self {
            min_area_points,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.initial_region.center.is_valid() {
            return Err(ConfigError::InvalidValue {
                key: "initial_region".to_string(),
                message: "center is outside valid latitude/longitude ranges".to_string(),
            });
        }
        if self.min_area_points == 0 {
            return Err(ConfigError::InvalidValue {
                key: "min_area_points".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

fn default_initial_region() -> MapRegion {
    // San Francisco
    MapRegion::new(
        Coordinate::new(37.7749, -122.4194),
        CoordinateSpan::new(0.1, 0.1),
    )
}

fn default_min_area_points() -> usize {
    3
}
