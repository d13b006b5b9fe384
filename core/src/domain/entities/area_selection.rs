//! User-drawn area on the map.

use cams_shared::Coordinate;
use serde::{Deserialize, Serialize};

/// Ordered sequence of coordinates outlining a region
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AreaSelection {
    points: Vec<Coordinate>,
}

impl AreaSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point. Out-of-range coordinates are rejected and `false` is returned.
    pub fn add_point(&mut self, point: Coordinate) -> bool {
        if !point.is_valid() {
            return false;
        }
        self.points.push(point);
        true
    }

    pub fn undo_last_point(&mut self) -> Option<Coordinate> {
        self.points.pop()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Total length of the outline when closed back to its first point, in meters
    pub fn perimeter_m(&self) -> f64 {
        if self.points.len() < 2 {
            return 0.0;
        }
        let closing = std::iter::once((&self.points[self.points.len() - 1], &self.points[0]));
        self.points
            .windows(2)
            .map(|pair| (&pair[0], &pair[1]))
            .chain(closing)
            .map(|(a, b)| a.distance_to(b))
            .sum()
    }
}
