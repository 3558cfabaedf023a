//! Coordinate transforms between geographic space and scene space
//!
//! Two independent transforms exist and are deliberately kept distinct:
//!
//! - [`geo_to_storage_position`] is the **storage ingestion** convention. It
//!   places records that only carry raw longitude/latitude (trees) into the
//!   scene space that zone layout math runs in.
//! - [`scene_to_geo`] is the **interactive map** convention. It projects
//!   scene-space assets back onto a geographic map, anchored at the fixed
//!   map center.
//!
//! The two are *not* mathematical inverses: they use different scales and
//! origin conventions, inherited from the deployed backend. Persisted and
//! cached layouts depend on both sets of constants, so each function keeps
//! its own convention and its own subsystem; unifying them is a deliberate,
//! breaking decision, not a refactor.
//!
//! Both functions are pure and total. Missing or malformed geometry maps to
//! the scene origin rather than an error.

use crate::core::config::LayoutConfig;
use crate::core::constants::{
    STORAGE_LAT_OFFSET, STORAGE_LNG_OFFSET, STORAGE_UNITS_PER_DEGREE,
};
use crate::core::geo::{GeoPoint, ScenePoint};

/// Rounds a coordinate to the 2-decimal render-safe precision used for
/// every value that leaves the engine.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Places a stored geographic coordinate into scene space.
///
/// Storage-ingestion convention: `x = lng*100 - 9900`, `y = 0`,
/// `z = lat*100 - 900`, rounded to 2 decimals. A missing or non-finite
/// coordinate yields the scene origin (fail-soft, never an error).
pub fn geo_to_storage_position(geo: Option<GeoPoint>) -> ScenePoint {
    let Some(geo) = geo else {
        return ScenePoint::origin();
    };
    if !geo.is_valid() {
        return ScenePoint::origin();
    }

    ScenePoint::new(
        round2(geo.lng * STORAGE_UNITS_PER_DEGREE - STORAGE_LNG_OFFSET),
        0.0,
        round2(geo.lat * STORAGE_UNITS_PER_DEGREE - STORAGE_LAT_OFFSET),
    )
}

/// Projects a scene-space point onto the geographic map about an arbitrary
/// anchor: `lat = anchor.lat - z*scale`, `lng = anchor.lng + x*scale`.
///
/// The per-zone detail view uses this directly with the zone's own
/// geographic center as the anchor.
pub fn scene_to_geo_about(anchor: GeoPoint, degrees_per_unit: f64, point: ScenePoint) -> GeoPoint {
    GeoPoint::new(
        anchor.lng + point.x * degrees_per_unit,
        anchor.lat - point.z * degrees_per_unit,
    )
}

/// Projects a scene-space point onto the geographic map about the fixed map
/// center carried by the configuration.
pub fn scene_to_geo(config: &LayoutConfig, point: ScenePoint) -> GeoPoint {
    scene_to_geo_about(config.map_center, config.degrees_per_unit, point)
}
