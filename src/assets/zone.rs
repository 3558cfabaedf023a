//! Zone footprint features

use serde::{Deserialize, Serialize};

use crate::core::constants::ZONE_FOOTPRINT_ELEVATION;
use crate::core::geo::ZonePosition;
use crate::data::model::{RiskCondition, ZoneRecord};
use crate::transform::round2;

/// Footprint side length per square root of a rai of area
const SIZE_PER_SQRT_RAI: f64 = 6.0;
const SIZE_MIN: f64 = 8.0;
const SIZE_MAX: f64 = 36.0;
/// Footprint side length for zones with no recorded area
const SIZE_DEFAULT: f64 = 18.0;

/// A zone as rendered on the map widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneFeature {
    pub id: String,
    pub name: String,
    /// `[x, elevation, z]` — zone footprints render at a fixed elevation
    pub position: [f64; 3],
    /// `[width, depth]` of the rendered footprint
    pub size: [f64; 2],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk: Option<RiskCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_rai: Option<f64>,
}

/// Builds the rendered feature for a zone at its final layout position
pub fn zone_feature(record: &ZoneRecord, position: ZonePosition) -> ZoneFeature {
    let area_rai = record.boundary.as_ref().and_then(|b| b.area_rai);
    let side = footprint_side(area_rai);
    ZoneFeature {
        id: record.id.clone(),
        name: record
            .name
            .clone()
            .unwrap_or_else(|| record.id.clone()),
        position: position.at_elevation(ZONE_FOOTPRINT_ELEVATION).to_array(),
        size: [side, side],
        crop: record.crop.clone(),
        risk: record.risk,
        area_rai,
    }
}

/// Square footprint side from the recorded area, in scene units.
/// Square-root scaling keeps large plots from swallowing the canvas.
fn footprint_side(area_rai: Option<f64>) -> f64 {
    match area_rai {
        Some(area) if area.is_finite() && area > 0.0 => {
            round2((area.sqrt() * SIZE_PER_SQRT_RAI).clamp(SIZE_MIN, SIZE_MAX))
        }
        _ => SIZE_DEFAULT,
    }
}
