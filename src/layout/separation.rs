//! Pairwise separation resolution
//!
//! Third pipeline stage: a bounded O(n²) repulsion sweep that pushes apart
//! zone centers closer than the minimum rendering distance. Each violating
//! pair is split symmetrically along its connecting axis, and the array is
//! updated immediately, so later pairs see already-adjusted positions.
//!
//! Known limitation, by contract: the sweep is not iterated to a fixed
//! point. A pair pushed apart early can be pushed back into violation by a
//! later adjustment to the same points, and clamping at the canvas edge can
//! reintroduce closeness. The default single pass trades global collision
//! freedom for bounded, predictable cost; `separation_passes` raises the
//! sweep count for callers that want a stricter (still unguaranteed)
//! layout.

use crate::core::config::LayoutConfig;
use crate::core::geo::ZonePosition;
use crate::traits::PointMath;

/// Runs the repulsion sweep `config.separation_passes` times, in place
pub fn resolve_separation(config: &LayoutConfig, positions: &mut [ZonePosition]) {
    for _ in 0..config.separation_passes {
        separation_pass(config.min_separation, positions);
    }
}

/// One full sweep over all unordered pairs
fn separation_pass(min_separation: f64, positions: &mut [ZonePosition]) {
    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            let distance = positions[i].distance_to(&positions[j]);
            // Fully coincident pairs have no connecting axis to push
            // along; they are skipped rather than given an arbitrary one.
            if distance <= 0.0 || distance >= min_separation {
                continue;
            }

            let push = (min_separation - distance) / 2.0;
            let direction = positions[j]
                .subtract(&positions[i])
                .multiply(1.0 / distance);
            positions[i] = positions[i].subtract(&direction.multiply(push));
            positions[j] = positions[j].add(&direction.multiply(push));
        }
    }
}
