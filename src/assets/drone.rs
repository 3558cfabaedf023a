//! Drone flight-path projection
//!
//! The flight path arrives as ordered scene-space waypoints. The global map
//! projects them about the fixed map center; the per-zone detail view
//! projects the same points about the zone's own geographic center, with
//! the same degrees-per-unit scale. Both views therefore pan and zoom
//! consistently with the zones underneath.

use serde::{Deserialize, Serialize};

use crate::core::config::LayoutConfig;
use crate::core::geo::{GeoPoint, ScenePoint};
use crate::data::model::DroneRecord;
use crate::transform::{scene_to_geo, scene_to_geo_about};

/// The active drone flight as rendered on the map widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DronePathFeature {
    pub id: String,
    pub status: String,
    /// Scene-space waypoints, passed through verbatim
    pub points: Vec<[f64; 3]>,
    /// The same waypoints on the geographic map, about the map center
    pub geo_track: Vec<GeoPoint>,
}

/// Builds the rendered drone feature. A record without a flight path
/// yields an empty track rather than an error.
pub fn drone_path_feature(config: &LayoutConfig, record: &DroneRecord) -> DronePathFeature {
    let points: Vec<[f64; 3]> = record
        .flight_path
        .as_ref()
        .map(|path| path.points.clone())
        .unwrap_or_default();
    let geo_track = points
        .iter()
        .map(|&p| scene_to_geo(config, ScenePoint::from(p)))
        .collect();

    DronePathFeature {
        id: record.id.clone(),
        status: record.status.clone(),
        points,
        geo_track,
    }
}

/// Projects scene-space waypoints about a per-zone geographic center, for
/// the zone detail view
pub fn project_track_about(
    config: &LayoutConfig,
    anchor: GeoPoint,
    points: &[[f64; 3]],
) -> Vec<GeoPoint> {
    points
        .iter()
        .map(|&p| scene_to_geo_about(anchor, config.degrees_per_unit, ScenePoint::from(p)))
        .collect()
}
