//! Configuration for the zone layout engine and its coordinate transforms
//!
//! Every magic number the layout pipeline depends on lives in one immutable
//! struct passed to the engine at construction, so tests can exercise
//! alternate canvases, scales, and separation policies deterministically.

use crate::core::bounds::CanvasBounds;
use crate::core::constants::{
    CENTER_LAT, CENTER_LNG, DEGREES_PER_SCENE_UNIT, FALLBACK_GRID_COLUMNS, FALLBACK_GRID_SPACING,
    MIN_SEPARATION, SPAN_FLOOR,
};
use crate::core::geo::GeoPoint;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// The scene canvas every final zone position must lie on.
    pub canvas: CanvasBounds,
    /// Minimum rendering distance between two zone centers.
    pub min_separation: f64,
    /// How many times the pairwise repulsion pass runs. The default of 1
    /// accepts residual violations in exchange for bounded, predictable
    /// cost; raise it for a stricter (but still not guaranteed) layout.
    pub separation_passes: u32,
    /// Column count of the index-based fallback grid.
    pub grid_columns: usize,
    /// Cell spacing of the fallback grid when no zone has real geometry.
    pub grid_spacing: f64,
    /// Smallest per-axis span tolerated during min-max normalization.
    pub span_floor: f64,
    /// Geographic anchor of the interactive map projection.
    pub map_center: GeoPoint,
    /// Degrees per scene unit for the map and drone-track projections.
    pub degrees_per_unit: f64,
}

impl LayoutConfig {
    /// A stricter preset that re-runs the repulsion pass a few times.
    /// Still a heuristic: collision freedom is not guaranteed.
    pub fn strict() -> Self {
        Self {
            separation_passes: 4,
            ..Self::default()
        }
    }

    /// Half the canvas width, useful for sizing offsets relative to scale
    pub fn canvas_half_extent(&self) -> f64 {
        self.canvas.width() / 2.0
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasBounds::default(),
            min_separation: MIN_SEPARATION,
            separation_passes: 1,
            grid_columns: FALLBACK_GRID_COLUMNS,
            grid_spacing: FALLBACK_GRID_SPACING,
            span_floor: SPAN_FLOOR,
            map_center: GeoPoint::new(CENTER_LNG, CENTER_LAT),
            degrees_per_unit: DEGREES_PER_SCENE_UNIT,
        }
    }
}
