//! Input descriptors supplied by the zone/tree/drone data collaborators
//!
//! These mirror the upstream JSON contracts. Every geometry field is
//! optional and defensively typed: a center with the wrong arity or a
//! non-finite component is treated the same as a missing one, never as an
//! error.

use serde::{Deserialize, Serialize};

use crate::core::geo::GeoPoint;

/// A farm zone (plot) as supplied by the zone data store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk: Option<RiskCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boundary: Option<ZoneBoundary>,
}

impl ZoneRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            crop: None,
            risk: None,
            boundary: None,
        }
    }

    pub fn with_boundary(mut self, boundary: ZoneBoundary) -> Self {
        self.boundary = Some(boundary);
        self
    }

    /// The zone's authoritative center, if the record carries a usable one
    pub fn geo_center(&self) -> Option<(f64, f64)> {
        self.boundary.as_ref().and_then(ZoneBoundary::valid_center)
    }

    /// Whether an active risk condition is flagged on this zone
    pub fn has_active_risk(&self) -> bool {
        self.risk.is_some()
    }
}

/// Authoritative geographic geometry of a zone. Many records in the dataset
/// carry no boundary at all; those fall back to index-based placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneBoundary {
    /// Polygon ring as `[lng, lat]` pairs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ring: Option<Vec<[f64; 2]>>,
    /// Precomputed center `(x, z)` in arbitrary real-world units. Kept as a
    /// free-length vector so malformed arities deserialize instead of
    /// failing the whole record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_rai: Option<f64>,
}

impl ZoneBoundary {
    /// Returns the center only if it has exactly two finite components
    pub fn valid_center(&self) -> Option<(f64, f64)> {
        match self.center.as_deref() {
            Some([x, z]) if x.is_finite() && z.is_finite() => Some((*x, *z)),
            _ => None,
        }
    }
}

/// Active risk conditions a zone can be flagged with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskCondition {
    Lodging,
    Disease,
    Drought,
}

/// A surveyed tree as supplied by the tree data store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo_location: Option<GeoPoint>,
    pub health: String,
    pub carbon_stock: f64,
    pub age: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_scanned: Option<String>,
}

impl TreeRecord {
    /// The tree's geographic location, dropped if non-finite or out of range
    pub fn valid_location(&self) -> Option<GeoPoint> {
        self.geo_location.filter(GeoPoint::is_valid)
    }
}

/// The active drone flight as supplied by the drone data store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DroneRecord {
    pub id: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_path: Option<FlightPath>,
}

/// An ordered scene-space waypoint list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightPath {
    pub points: Vec<[f64; 3]>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_center_requires_exact_arity() {
        let mut boundary = ZoneBoundary {
            ring: None,
            center: Some(vec![10.0, -4.5]),
            area_rai: None,
        };
        assert_eq!(boundary.valid_center(), Some((10.0, -4.5)));

        boundary.center = Some(vec![10.0]);
        assert_eq!(boundary.valid_center(), None);

        boundary.center = Some(vec![10.0, -4.5, 1.0]);
        assert_eq!(boundary.valid_center(), None);

        boundary.center = Some(vec![f64::NAN, -4.5]);
        assert_eq!(boundary.valid_center(), None);

        boundary.center = None;
        assert_eq!(boundary.valid_center(), None);
    }

    #[test]
    fn test_zone_record_deserializes_camel_case_contract() {
        let zone: ZoneRecord = serde_json::from_str(
            r#"{
                "id": "zone-7",
                "name": "East Paddock",
                "risk": "lodging",
                "boundary": { "center": [812.3, -44.0], "areaRai": 18.5 }
            }"#,
        )
        .unwrap();
        assert_eq!(zone.geo_center(), Some((812.3, -44.0)));
        assert_eq!(zone.boundary.as_ref().unwrap().area_rai, Some(18.5));
        assert_eq!(zone.risk, Some(RiskCondition::Lodging));
    }

    #[test]
    fn test_null_boundary_deserializes() {
        let zone: ZoneRecord =
            serde_json::from_str(r#"{ "id": "zone-9", "boundary": null }"#).unwrap();
        assert_eq!(zone.boundary, None);
        assert_eq!(zone.geo_center(), None);
    }

    #[test]
    fn test_tree_record_contract() {
        let tree: TreeRecord = serde_json::from_str(
            r#"{
                "id": "tree-1",
                "geoLocation": { "lng": 99.35, "lat": 9.12 },
                "health": "healthy",
                "carbonStock": 41.7,
                "age": 12,
                "lastScanned": "2026-07-30T08:15:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(tree.valid_location(), Some(GeoPoint::new(99.35, 9.12)));
        assert_eq!(tree.carbon_stock, 41.7);
    }

    #[test]
    fn test_drone_record_contract() {
        let drone: DroneRecord = serde_json::from_str(
            r#"{
                "id": "drone-1",
                "status": "in-flight",
                "flightPath": { "points": [[0.0, 12.0, 0.0], [10.0, 12.0, -6.0]] }
            }"#,
        )
        .unwrap();
        assert_eq!(drone.flight_path.unwrap().points.len(), 2);
    }
}
