//! Final bounds clamping and rounding
//!
//! Fourth pipeline stage. Runs after separation so that repulsion pushes
//! near the canvas edge are not silently lost, then rounds exactly once —
//! rounding before clamping can nudge an edge value back out of bounds, so
//! the order here is part of the contract.
//!
//! A clamp can pull two zones pushed toward the same edge back under the
//! minimum separation. Accepted interaction; nothing downstream re-runs
//! the repulsion sweep.

use crate::core::config::LayoutConfig;
use crate::core::geo::ZonePosition;
use crate::transform::round2;

/// Clamps every position onto the canvas and rounds to render-safe
/// precision, in place
pub fn clamp_positions(config: &LayoutConfig, positions: &mut [ZonePosition]) {
    for position in positions.iter_mut() {
        let clamped = config.canvas.clamp(position);
        *position = ZonePosition::new(round2(clamped.x), round2(clamped.z));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> LayoutConfig {
        LayoutConfig::default()
    }

    #[test]
    fn test_out_of_bounds_positions_are_pinned_to_the_edge() {
        let mut positions = vec![
            ZonePosition::new(-140.0, 250.0),
            ZonePosition::new(100.0001, -100.0001),
        ];
        clamp_positions(&config(), &mut positions);
        assert_eq!(positions[0], ZonePosition::new(-100.0, 100.0));
        assert_eq!(positions[1], ZonePosition::new(100.0, -100.0));
    }

    #[test]
    fn test_rounding_happens_after_clamping() {
        let mut positions = vec![ZonePosition::new(99.996, -99.996)];
        clamp_positions(&config(), &mut positions);
        // rounds to the edge value, never past it
        assert_eq!(positions[0], ZonePosition::new(100.0, -100.0));
    }

    #[test]
    fn test_in_bounds_values_are_only_rounded() {
        let mut positions = vec![ZonePosition::new(12.345, -67.891)];
        clamp_positions(&config(), &mut positions);
        assert_eq!(positions[0], ZonePosition::new(12.35, -67.89));
    }

    #[test]
    fn test_reclamping_is_a_noop() {
        let mut positions = vec![
            ZonePosition::new(-100.0, 100.0),
            ZonePosition::new(0.0, -70.0),
            ZonePosition::new(99.99, 0.01),
        ];
        let once = {
            let mut p = positions.clone();
            clamp_positions(&config(), &mut p);
            p
        };
        clamp_positions(&config(), &mut positions);
        clamp_positions(&config(), &mut positions);
        assert_eq!(positions, once);
    }
}
