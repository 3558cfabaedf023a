//! Disease hotspots and scan-coverage cells
//!
//! These positions are a presentation heuristic, not measured data: each
//! asset sits at a fixed offset from its owning zone's final position.
//! Zones flagged with an active risk condition get more assets in a tighter
//! spread than healthy zones, so risk reads visually at a glance. Offsets
//! are constant tables — the layout stays deterministic per zone.

use serde::{Deserialize, Serialize};

use crate::core::constants::{COVERAGE_CELL_ELEVATION, HOTSPOT_ELEVATION};
use crate::core::geo::ZonePosition;
use crate::data::model::ZoneRecord;
use crate::traits::PointMath;

/// Tight spread around flagged zones
const HOTSPOT_OFFSETS_RISK: [(f64, f64); 3] = [(6.0, -6.0), (-6.0, 6.5), (7.0, 6.0)];
/// Wider, sparser spread around healthy zones
const HOTSPOT_OFFSETS_BASE: [(f64, f64); 1] = [(8.0, -7.5)];

const COVERAGE_OFFSETS_RISK: [(f64, f64); 6] = [
    (-6.0, -6.0),
    (0.0, -6.5),
    (6.0, -6.0),
    (-6.5, 6.0),
    (0.0, 6.5),
    (6.5, 6.0),
];
const COVERAGE_OFFSETS_BASE: [(f64, f64); 4] =
    [(-8.0, -7.5), (8.0, -7.5), (-7.5, 8.0), (8.0, 8.0)];

/// Severity bands surfaced on the map widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    High,
}

/// A disease hotspot marker anchored to a zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotspotFeature {
    pub id: String,
    pub zone_id: String,
    pub position: [f64; 3],
    pub severity: Severity,
}

/// One cell of the drone scan-coverage overlay, anchored to a zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageCellFeature {
    pub id: String,
    pub zone_id: String,
    pub position: [f64; 3],
    pub scanned: bool,
}

/// Hotspot markers for a zone at its final position
pub fn zone_hotspots(record: &ZoneRecord, position: ZonePosition) -> Vec<HotspotFeature> {
    let (offsets, severity): (&[(f64, f64)], Severity) = if record.has_active_risk() {
        (&HOTSPOT_OFFSETS_RISK, Severity::High)
    } else {
        (&HOTSPOT_OFFSETS_BASE, Severity::Low)
    };

    offsets
        .iter()
        .enumerate()
        .map(|(index, &(dx, dz))| HotspotFeature {
            id: format!("{}-hotspot-{}", record.id, index),
            zone_id: record.id.clone(),
            position: position
                .add(&ZonePosition::new(dx, dz))
                .at_elevation(HOTSPOT_ELEVATION)
                .to_array(),
            severity,
        })
        .collect()
}

/// Scan-coverage cells for a zone at its final position. Flagged zones are
/// treated as fully scanned; healthy zones show a sparser, partial sweep.
pub fn zone_coverage(record: &ZoneRecord, position: ZonePosition) -> Vec<CoverageCellFeature> {
    let risk = record.has_active_risk();
    let offsets: &[(f64, f64)] = if risk {
        &COVERAGE_OFFSETS_RISK
    } else {
        &COVERAGE_OFFSETS_BASE
    };

    offsets
        .iter()
        .enumerate()
        .map(|(index, &(dx, dz))| CoverageCellFeature {
            id: format!("{}-cell-{}", record.id, index),
            zone_id: record.id.clone(),
            position: position
                .add(&ZonePosition::new(dx, dz))
                .at_elevation(COVERAGE_CELL_ELEVATION)
                .to_array(),
            scanned: risk || index % 2 == 0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::RiskCondition;

    fn flagged() -> ZoneRecord {
        let mut zone = ZoneRecord::new("zone-2");
        zone.risk = Some(RiskCondition::Lodging);
        zone
    }

    #[test]
    fn test_flagged_zones_get_more_tighter_hotspots() {
        let position = ZonePosition::new(10.0, -20.0);
        let risky = zone_hotspots(&flagged(), position);
        let healthy = zone_hotspots(&ZoneRecord::new("zone-1"), position);

        assert!(risky.len() > healthy.len());
        let max_offset = |features: &[HotspotFeature]| {
            features
                .iter()
                .map(|f| {
                    (f.position[0] - position.x)
                        .abs()
                        .max((f.position[2] - position.z).abs())
                })
                .fold(0.0, f64::max)
        };
        assert!(max_offset(&risky) < max_offset(&healthy));
        assert!(risky.iter().all(|f| f.severity == Severity::High));
        assert!(healthy.iter().all(|f| f.severity == Severity::Low));
    }

    #[test]
    fn test_assets_are_anchored_to_the_zone() {
        let position = ZonePosition::new(-55.0, 70.0);
        for hotspot in zone_hotspots(&flagged(), position) {
            assert!((hotspot.position[0] - position.x).abs() <= 8.0);
            assert!((hotspot.position[2] - position.z).abs() <= 8.0);
            assert_eq!(hotspot.position[1], HOTSPOT_ELEVATION);
            assert_eq!(hotspot.zone_id, "zone-2");
        }
        for cell in zone_coverage(&flagged(), position) {
            assert_eq!(cell.position[1], COVERAGE_CELL_ELEVATION);
            assert!(cell.scanned);
        }
    }

    #[test]
    fn test_healthy_zone_coverage_is_partial() {
        let cells = zone_coverage(&ZoneRecord::new("zone-1"), ZonePosition::default());
        assert_eq!(cells.len(), 4);
        assert!(cells.iter().any(|c| c.scanned));
        assert!(cells.iter().any(|c| !c.scanned));
    }

    #[test]
    fn test_ids_are_stable_per_zone() {
        let cells = zone_coverage(&flagged(), ZonePosition::default());
        assert_eq!(cells[0].id, "zone-2-cell-0");
        assert_eq!(cells[5].id, "zone-2-cell-5");
    }
}
