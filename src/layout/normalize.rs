//! Batch normalization into the scene canvas
//!
//! Second pipeline stage. Two mutually exclusive paths:
//!
//! - **No zone has real geometry**: normalization is skipped entirely and
//!   every zone takes a cell on a fixed grid centered at the origin. The
//!   grid is already bounded and spaced, so nothing downstream has to move
//!   it.
//! - **At least one zone has real geometry**: all raw centers — fallback
//!   cells included — are min-max scaled per axis into the canvas, using
//!   the min/max of the current batch. The output is batch-relative and
//!   must be recomputed whenever the zone set changes.

use crate::core::config::LayoutConfig;
use crate::core::geo::ZonePosition;
use crate::layout::extract::RawZoneCenter;
use crate::traits::Lerp;

/// Rescales a batch of raw centers into canvas positions
pub fn normalize_centers(config: &LayoutConfig, raw: &[RawZoneCenter]) -> Vec<ZonePosition> {
    if raw.is_empty() {
        return Vec::new();
    }
    if !raw.iter().any(|center| center.has_geo) {
        return grid_positions(config, raw.len());
    }
    scale_into_canvas(config, raw)
}

/// Fixed grid placement for an all-geometry-less batch:
/// `x = (i % columns - 1) * spacing`, `z = (i / columns - 1) * spacing`
fn grid_positions(config: &LayoutConfig, count: usize) -> Vec<ZonePosition> {
    let columns = config.grid_columns.max(1);
    let spacing = config.grid_spacing;
    (0..count)
        .map(|index| {
            ZonePosition::new(
                ((index % columns) as f64 - 1.0) * spacing,
                ((index / columns) as f64 - 1.0) * spacing,
            )
        })
        .collect()
}

/// Independent per-axis min-max scaling over the whole batch. Spans are
/// floored to keep the division finite when all values coincide on an axis.
fn scale_into_canvas(config: &LayoutConfig, raw: &[RawZoneCenter]) -> Vec<ZonePosition> {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_z = f64::INFINITY;
    let mut max_z = f64::NEG_INFINITY;
    for center in raw {
        min_x = min_x.min(center.x);
        max_x = max_x.max(center.x);
        min_z = min_z.min(center.z);
        max_z = max_z.max(center.z);
    }

    let span_x = (max_x - min_x).max(config.span_floor);
    let span_z = (max_z - min_z).max(config.span_floor);
    let canvas = &config.canvas;

    raw.iter()
        .map(|center| {
            ZonePosition::new(
                canvas.min.x.lerp(&canvas.max.x, (center.x - min_x) / span_x),
                canvas.min.z.lerp(&canvas.max.z, (center.z - min_z) / span_z),
            )
        })
        .collect()
}
