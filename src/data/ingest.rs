//! Boundary ingestion helpers
//!
//! The zone store hands over whatever geometry it has. Some records carry a
//! precomputed center, some only a polygon ring, many carry nothing. Before
//! layout runs, records with a ring but no usable center get one derived
//! from the ring centroid; everything else is left untouched and falls back
//! to index-based placement downstream.

use geo::Centroid;
use geo_types::{Coord, LineString, Polygon};

use crate::data::model::ZoneRecord;

/// Fills in missing boundary centers from polygon ring centroids, in place.
/// Records without a boundary, or whose ring is degenerate, are untouched.
pub fn derive_boundary_centers(zones: &mut [ZoneRecord]) {
    for zone in zones.iter_mut() {
        let Some(boundary) = zone.boundary.as_mut() else {
            continue;
        };
        if boundary.valid_center().is_some() {
            continue;
        }
        let Some(ring) = boundary.ring.as_deref() else {
            continue;
        };
        if let Some((x, z)) = ring_centroid(ring) {
            boundary.center = Some(vec![x, z]);
        }
    }
}

/// Centroid of a polygon ring, if the ring has at least three finite points
pub fn ring_centroid(ring: &[[f64; 2]]) -> Option<(f64, f64)> {
    let coords: Vec<Coord<f64>> = ring
        .iter()
        .filter(|p| p[0].is_finite() && p[1].is_finite())
        .map(|p| Coord { x: p[0], y: p[1] })
        .collect();
    if coords.len() < 3 {
        return None;
    }

    let polygon = Polygon::new(LineString::from(coords), vec![]);
    polygon.centroid().map(|c| (c.x(), c.y()))
}
