use serde::{Deserialize, Serialize};

use crate::traits::PointMath;

/// Represents a geographic coordinate with longitude and latitude.
///
/// This is the authoritative representation stored for trees and for the
/// drone's reference center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lng: f64,
    pub lat: f64,
}

impl GeoPoint {
    /// Creates a new GeoPoint coordinate
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Validates that the coordinates are finite and within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lng.is_finite()
            && self.lat.is_finite()
            && self.lat >= -90.0
            && self.lat <= 90.0
            && self.lng >= -180.0
            && self.lng <= 180.0
    }
}

impl Default for GeoPoint {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// A 2D zone center in scene space. `z` is the depth axis of the scene
/// canvas, not an elevation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZonePosition {
    pub x: f64,
    pub z: f64,
}

impl ZonePosition {
    pub fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    /// Lifts the 2D position into scene space at the given elevation
    pub fn at_elevation(&self, y: f64) -> ScenePoint {
        ScenePoint::new(self.x, y, self.z)
    }
}

impl Default for ZonePosition {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl PointMath for ZonePosition {
    fn add(&self, other: &Self) -> Self {
        Self::new(self.x + other.x, self.z + other.z)
    }

    fn subtract(&self, other: &Self) -> Self {
        Self::new(self.x - other.x, self.z - other.z)
    }

    fn multiply(&self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.z * scalar)
    }

    fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dz = self.z - other.z;
        (dx * dx + dz * dz).sqrt()
    }
}

/// A point in scene space: `x`/`z` span the canvas, `y` is elevation.
/// Used uniformly for trees, hotspots, coverage cells, and drone-path points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenePoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl ScenePoint {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The fail-soft default used when geometry is missing or malformed
    pub fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// The ground-plane projection of this point
    pub fn footprint(&self) -> ZonePosition {
        ZonePosition::new(self.x, self.z)
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl Default for ScenePoint {
    fn default() -> Self {
        Self::origin()
    }
}

impl From<[f64; 3]> for ScenePoint {
    fn from(p: [f64; 3]) -> Self {
        Self::new(p[0], p[1], p[2])
    }
}
