//! Common type definitions and utilities

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coordinate for location-based features
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Whether latitude lies in [-90, 90] and longitude in [-180, 180]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Calculate distance to another coordinate (in meters)
    /// Using Haversine formula
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        const EARTH_RADIUS_M: f64 = 6_371_000.0;

        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let delta_lat = (other.latitude - self.latitude).to_radians();
        let delta_lon = (other.longitude - self.longitude).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_M * c
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.5}, {:.5})", self.latitude, self.longitude)
    }
}

/// Extent of a map region in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateSpan {
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl CoordinateSpan {
    pub fn new(latitude_delta: f64, longitude_delta: f64) -> Self {
        Self {
            latitude_delta,
            longitude_delta,
        }
    }
}

/// Visible portion of the map: a centre plus a span
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapRegion {
    pub center: Coordinate,
    pub span: CoordinateSpan,
}

impl MapRegion {
    pub fn new(center: Coordinate, span: CoordinateSpan) -> Self {
        Self { center, span }
    }

    /// Check if a coordinate falls inside the visible region
    pub fn contains(&self, point: &Coordinate) -> bool {
        let half_lat = self.span.latitude_delta / 2.0;
        let half_lon = self.span.longitude_delta / 2.0;
        (point.latitude - self.center.latitude).abs() <= half_lat
            && (point.longitude - self.center.longitude).abs() <= half_lon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_distance() {
        // San Francisco to Los Angeles (approximately 559 km)
        let sf = Coordinate::new(37.7749, -122.4194);
        let la = Coordinate::new(34.0522, -118.2437);

        let distance_km = sf.distance_to(&la) / 1000.0;

        assert!((distance_km - 559.0).abs() < 10.0);
    }

    #[test]
    fn test_coordinate_validity() {
        assert!(Coordinate::new(90.0, 180.0).is_valid());
        assert!(Coordinate::new(-90.0, -180.0).is_valid());
        assert!(!Coordinate::new(90.5, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, -180.1).is_valid());
    }

    #[test]
    fn test_region_contains() {
        let region = MapRegion::new(
            Coordinate::new(37.7749, -122.4194),
            CoordinateSpan::new(0.1, 0.1),
        );
        assert!(region.contains(&Coordinate::new(37.80, -122.40)));
        assert!(!region.contains(&Coordinate::new(38.0, -122.4194)));
    }
}
