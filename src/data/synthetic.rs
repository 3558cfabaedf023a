//! Deterministic synthetic fallback dataset
//!
//! Substituted whenever the upstream stores return nothing or fail, so the
//! response shape stays fully populated. Content is fixed — no randomness,
//! no wall clock — which keeps fallback layouts cacheable and testable like
//! live ones.

use crate::core::geo::GeoPoint;
use crate::data::model::{
    DroneRecord, FlightPath, RiskCondition, TreeRecord, ZoneBoundary, ZoneRecord,
};

/// The full synthetic dataset: zones, trees, and one active drone
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticDataset {
    pub zones: Vec<ZoneRecord>,
    pub trees: Vec<TreeRecord>,
    pub drone: DroneRecord,
}

/// Builds the synthetic dataset. Same call, same content, always.
pub fn synthetic_dataset() -> SyntheticDataset {
    SyntheticDataset {
        zones: synthetic_zones(),
        trees: synthetic_trees(),
        drone: synthetic_drone(),
    }
}

fn zone(
    id: &str,
    name: &str,
    crop: &str,
    risk: Option<RiskCondition>,
    center: Option<(f64, f64)>,
    area_rai: f64,
) -> ZoneRecord {
    ZoneRecord {
        id: id.to_string(),
        name: Some(name.to_string()),
        crop: Some(crop.to_string()),
        risk,
        boundary: center.map(|(x, z)| ZoneBoundary {
            ring: None,
            center: Some(vec![x, z]),
            area_rai: Some(area_rai),
        }),
    }
}

fn synthetic_zones() -> Vec<ZoneRecord> {
    // Two of the six carry no geometry on purpose, exercising the same
    // mixed-batch path live data takes.
    vec![
        zone(
            "zone-1",
            "North Paddock",
            "oil palm",
            None,
            Some((118.0, 412.0)),
            22.5,
        ),
        zone(
            "zone-2",
            "East Terrace",
            "durian",
            Some(RiskCondition::Lodging),
            Some((364.0, 385.0)),
            14.0,
        ),
        zone(
            "zone-3",
            "River Strip",
            "rubber",
            None,
            Some((240.0, 188.0)),
            31.2,
        ),
        zone("zone-4", "South Flat", "oil palm", None, None, 18.0),
        zone(
            "zone-5",
            "West Slope",
            "durian",
            Some(RiskCondition::Disease),
            Some((96.0, 145.0)),
            9.6,
        ),
        zone("zone-6", "Nursery Block", "seedlings", None, None, 4.8),
    ]
}

fn tree(id: &str, lng: f64, lat: f64, health: &str, carbon: f64, age: u32) -> TreeRecord {
    TreeRecord {
        id: id.to_string(),
        geo_location: Some(GeoPoint::new(lng, lat)),
        health: health.to_string(),
        carbon_stock: carbon,
        age,
        last_scanned: Some("2026-07-28T06:40:00Z".to_string()),
    }
}

fn synthetic_trees() -> Vec<TreeRecord> {
    vec![
        tree("tree-1", 99.3401, 9.1172, "healthy", 38.4, 11),
        tree("tree-2", 99.3422, 9.1180, "healthy", 41.0, 12),
        tree("tree-3", 99.3447, 9.1166, "stressed", 27.9, 9),
        tree("tree-4", 99.3468, 9.1191, "healthy", 44.6, 14),
        tree("tree-5", 99.3489, 9.1205, "critical", 12.3, 6),
        tree("tree-6", 99.3510, 9.1213, "healthy", 39.8, 12),
        tree("tree-7", 99.3531, 9.1228, "stressed", 22.5, 8),
        tree("tree-8", 99.3552, 9.1241, "healthy", 47.1, 15),
    ]
}

fn synthetic_drone() -> DroneRecord {
    DroneRecord {
        id: "drone-alpha".to_string(),
        status: "in-flight".to_string(),
        flight_path: Some(FlightPath {
            points: vec![
                [-60.0, 12.0, -60.0],
                [60.0, 12.0, -60.0],
                [60.0, 12.0, -20.0],
                [-60.0, 12.0, -20.0],
                [-60.0, 12.0, 20.0],
                [60.0, 12.0, 20.0],
                [60.0, 12.0, 60.0],
                [-60.0, 12.0, 60.0],
            ],
        }),
    }
}
