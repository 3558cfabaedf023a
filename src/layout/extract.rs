//! Raw center extraction
//!
//! First pipeline stage: every zone gets a raw 2D center, either verbatim
//! from its boundary geometry or from a deterministic index-based grid.

use serde::{Deserialize, Serialize};

use crate::core::config::LayoutConfig;
use crate::data::model::ZoneRecord;

/// A zone center before any normalization. `has_geo` records whether it
/// came from real geometry or from the fallback grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawZoneCenter {
    pub x: f64,
    pub z: f64,
    pub has_geo: bool,
}

impl RawZoneCenter {
    pub fn geo(x: f64, z: f64) -> Self {
        Self {
            x,
            z,
            has_geo: true,
        }
    }

    pub fn fallback(x: f64, z: f64) -> Self {
        Self {
            x,
            z,
            has_geo: false,
        }
    }
}

/// Derives the raw center of the zone at list position `index`.
///
/// A usable boundary center (exactly two finite components) is taken
/// verbatim. Anything else — no boundary, no center, wrong arity,
/// non-finite values — lands on the unit fallback grid
/// `(index % columns - 1, index / columns)`. The index is an explicit
/// parameter: fallback placement follows list position, not zone identity.
pub fn raw_center(config: &LayoutConfig, zone: &ZoneRecord, index: usize) -> RawZoneCenter {
    if let Some((x, z)) = zone.geo_center() {
        return RawZoneCenter::geo(x, z);
    }
    let (x, z) = fallback_cell(config, index);
    RawZoneCenter::fallback(x, z)
}

/// The unit fallback grid cell for a list position
pub fn fallback_cell(config: &LayoutConfig, index: usize) -> (f64, f64) {
    let columns = config.grid_columns.max(1);
    let x = (index % columns) as f64 - 1.0;
    let z = (index / columns) as f64;
    (x, z)
}

/// Derives raw centers for the whole ordered batch
pub fn extract_raw_centers(config: &LayoutConfig, zones: &[ZoneRecord]) -> Vec<RawZoneCenter> {
    zones
        .iter()
        .enumerate()
        .map(|(index, zone)| raw_center(config, zone, index))
        .collect()
}
