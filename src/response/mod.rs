//! Map-data response assembly
//!
//! The single place where the engine meets its collaborators. Stores are
//! fetched once per request; any upstream failure or empty result is
//! swallowed here — logged, then replaced by the synthetic dataset — so the
//! response shape is always fully populated and no partial-failure state
//! reaches the caller.

use fxhash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::assets::{
    drone::{self, DronePathFeature},
    risk::{self, CoverageCellFeature, HotspotFeature},
    tree::{self, TreeFeature},
    zone::{self, ZoneFeature},
};
use crate::core::config::LayoutConfig;
use crate::core::geo::{GeoPoint, ScenePoint, ZonePosition};
use crate::data::ingest;
use crate::data::model::{DroneRecord, TreeRecord, ZoneRecord};
use crate::data::synthetic::synthetic_dataset;
use crate::layout::ZoneLayoutEngine;
use crate::traits::PointMath;
use crate::transform::scene_to_geo;
use crate::{PlotError, Result};

/// How far outside a zone's footprint a tree may sit and still appear in
/// that zone's detail view (scene units)
const TREE_ATTACH_MARGIN: f64 = 8.0;

/// Supplies zone records for one layout request
pub trait ZoneStore {
    fn zones(&self) -> anyhow::Result<Vec<ZoneRecord>>;
}

/// Supplies surveyed tree records
pub trait TreeStore {
    fn trees(&self) -> anyhow::Result<Vec<TreeRecord>>;
}

/// Supplies the active drone flight, if any
pub trait DroneStore {
    fn active_flight(&self) -> anyhow::Result<Option<DroneRecord>>;
}

/// Everything the map widget needs for one render, fully populated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmMapResponse {
    pub zones: Vec<ZoneFeature>,
    pub trees: Vec<TreeFeature>,
    pub hotspots: Vec<HotspotFeature>,
    pub coverage: Vec<CoverageCellFeature>,
    pub drone: DronePathFeature,
}

/// The per-zone detail page payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneDetail {
    pub zone: ZoneFeature,
    pub trees: Vec<TreeFeature>,
    pub hotspots: Vec<HotspotFeature>,
    pub coverage: Vec<CoverageCellFeature>,
    /// The drone track projected about this zone's geographic center
    pub drone_track: Vec<GeoPoint>,
}

/// Assembles the full map response for one request.
///
/// Never fails: upstream errors and empty collections both resolve to the
/// deterministic synthetic dataset.
pub fn assemble_farm_map(
    engine: &ZoneLayoutEngine,
    zone_store: &dyn ZoneStore,
    tree_store: &dyn TreeStore,
    drone_store: &dyn DroneStore,
) -> FarmMapResponse {
    let (mut zone_records, tree_records, drone_record) =
        fetch_or_fallback(zone_store, tree_store, drone_store);

    warn_on_duplicate_ids(&zone_records);
    ingest::derive_boundary_centers(&mut zone_records);
    let positions = engine.layout(&zone_records);

    let mut zones = Vec::with_capacity(zone_records.len());
    let mut hotspots = Vec::new();
    let mut coverage = Vec::new();
    for (record, position) in zone_records.iter().zip(&positions) {
        zones.push(zone::zone_feature(record, *position));
        hotspots.extend(risk::zone_hotspots(record, *position));
        coverage.extend(risk::zone_coverage(record, *position));
    }

    FarmMapResponse {
        zones,
        trees: tree_records.iter().map(tree::tree_feature).collect(),
        hotspots,
        coverage,
        drone: drone::drone_path_feature(engine.config(), &drone_record),
    }
}

/// Builds the detail payload for one zone out of an assembled response
pub fn zone_detail(
    config: &LayoutConfig,
    response: &FarmMapResponse,
    zone_id: &str,
) -> Result<ZoneDetail> {
    let zone = response
        .zones
        .iter()
        .find(|z| z.id == zone_id)
        .cloned()
        .ok_or_else(|| PlotError::UnknownZone(zone_id.to_string()))?;

    let center = ZonePosition::new(zone.position[0], zone.position[2]);
    let radius = zone.size[0] / 2.0 + TREE_ATTACH_MARGIN;
    let trees = response
        .trees
        .iter()
        .filter(|t| {
            let at = ZonePosition::new(t.position[0], t.position[2]);
            center.distance_to(&at) <= radius
        })
        .cloned()
        .collect();

    let anchor = scene_to_geo(config, ScenePoint::new(center.x, 0.0, center.z));
    Ok(ZoneDetail {
        zone,
        trees,
        hotspots: response
            .hotspots
            .iter()
            .filter(|h| h.zone_id == zone_id)
            .cloned()
            .collect(),
        coverage: response
            .coverage
            .iter()
            .filter(|c| c.zone_id == zone_id)
            .cloned()
            .collect(),
        drone_track: drone::project_track_about(config, anchor, &response.drone.points),
    })
}

/// Fetches all three collections, falling back to the synthetic dataset on
/// any failure or absence. Logged for operability, never surfaced.
fn fetch_or_fallback(
    zone_store: &dyn ZoneStore,
    tree_store: &dyn TreeStore,
    drone_store: &dyn DroneStore,
) -> (Vec<ZoneRecord>, Vec<TreeRecord>, DroneRecord) {
    let zones = match zone_store.zones() {
        Ok(zones) if !zones.is_empty() => Some(zones),
        Ok(_) => {
            log::warn!("zone store returned no zones, using synthetic dataset");
            None
        }
        Err(error) => {
            log::warn!("zone store failed: {:#}, using synthetic dataset", error);
            None
        }
    };
    let trees = match tree_store.trees() {
        Ok(trees) if !trees.is_empty() => Some(trees),
        Ok(_) => {
            log::warn!("tree store returned no trees, using synthetic dataset");
            None
        }
        Err(error) => {
            log::warn!("tree store failed: {:#}, using synthetic dataset", error);
            None
        }
    };
    let drone = match drone_store.active_flight() {
        Ok(Some(drone)) => Some(drone),
        Ok(None) => {
            log::warn!("no active drone flight, using synthetic dataset");
            None
        }
        Err(error) => {
            log::warn!("drone store failed: {:#}, using synthetic dataset", error);
            None
        }
    };

    match (zones, trees, drone) {
        (Some(zones), Some(trees), Some(drone)) => (zones, trees, drone),
        _ => {
            let fallback = synthetic_dataset();
            (fallback.zones, fallback.trees, fallback.drone)
        }
    }
}

fn warn_on_duplicate_ids(zones: &[ZoneRecord]) {
    let mut seen = FxHashSet::default();
    for zone in zones {
        if !seen.insert(zone.id.as_str()) {
            // cached layouts are keyed by input identity, duplicates break that
            log::warn!("duplicate zone id in batch: {}", zone.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::ZoneBoundary;

    struct FixedZones(Vec<ZoneRecord>);
    struct FixedTrees(Vec<TreeRecord>);
    struct FixedDrone(Option<DroneRecord>);
    struct Failing;

    impl ZoneStore for FixedZones {
        fn zones(&self) -> anyhow::Result<Vec<ZoneRecord>> {
            Ok(self.0.clone())
        }
    }
    impl TreeStore for FixedTrees {
        fn trees(&self) -> anyhow::Result<Vec<TreeRecord>> {
            Ok(self.0.clone())
        }
    }
    impl DroneStore for FixedDrone {
        fn active_flight(&self) -> anyhow::Result<Option<DroneRecord>> {
            Ok(self.0.clone())
        }
    }
    impl ZoneStore for Failing {
        fn zones(&self) -> anyhow::Result<Vec<ZoneRecord>> {
            anyhow::bail!("connection reset")
        }
    }
    impl TreeStore for Failing {
        fn trees(&self) -> anyhow::Result<Vec<TreeRecord>> {
            anyhow::bail!("connection reset")
        }
    }
    impl DroneStore for Failing {
        fn active_flight(&self) -> anyhow::Result<Option<DroneRecord>> {
            anyhow::bail!("connection reset")
        }
    }

    fn live_dataset() -> (FixedZones, FixedTrees, FixedDrone) {
        let data = synthetic_dataset();
        (
            FixedZones(data.zones),
            FixedTrees(data.trees),
            FixedDrone(Some(data.drone)),
        )
    }

    #[test]
    fn test_empty_zone_store_yields_synthetic_response() {
        let engine = ZoneLayoutEngine::default();
        let (_, trees, drone) = live_dataset();
        let response = assemble_farm_map(&engine, &FixedZones(Vec::new()), &trees, &drone);
        assert!(!response.zones.is_empty());
        assert!(!response.trees.is_empty());
        assert!(!response.drone.points.is_empty());
    }

    #[test]
    fn test_failing_stores_yield_synthetic_response() {
        let engine = ZoneLayoutEngine::default();
        let response = assemble_farm_map(&engine, &Failing, &Failing, &Failing);
        let from_empty = assemble_farm_map(
            &engine,
            &FixedZones(Vec::new()),
            &FixedTrees(Vec::new()),
            &FixedDrone(None),
        );
        // UpstreamFailure and DataAbsent resolve to the same dataset
        assert_eq!(response, from_empty);
    }

    #[test]
    fn test_zone_positions_are_bounded_and_rounded() {
        let engine = ZoneLayoutEngine::default();
        let (zones, trees, drone) = live_dataset();
        let response = assemble_farm_map(&engine, &zones, &trees, &drone);
        for zone in &response.zones {
            assert!(zone.position[0] >= -100.0 && zone.position[0] <= 100.0);
            assert!(zone.position[2] >= -100.0 && zone.position[2] <= 100.0);
            assert_eq!(zone.position[1], 0.1);
        }
    }

    #[test]
    fn test_assembly_is_deterministic() {
        let engine = ZoneLayoutEngine::default();
        let (zones, trees, drone) = live_dataset();
        let first = assemble_farm_map(&engine, &zones, &trees, &drone);
        let second = assemble_farm_map(&engine, &zones, &trees, &drone);
        assert_eq!(first, second);
    }

    #[test]
    fn test_hotspots_follow_their_zone() {
        let engine = ZoneLayoutEngine::default();
        let (zones, trees, drone) = live_dataset();
        let response = assemble_farm_map(&engine, &zones, &trees, &drone);
        for hotspot in &response.hotspots {
            let owner = response
                .zones
                .iter()
                .find(|z| z.id == hotspot.zone_id)
                .expect("hotspot references a zone in the response");
            assert!((hotspot.position[0] - owner.position[0]).abs() <= 8.0);
            assert!((hotspot.position[2] - owner.position[2]).abs() <= 8.0);
        }
    }

    #[test]
    fn test_zone_detail_for_known_zone() {
        let engine = ZoneLayoutEngine::default();
        let (zones, trees, drone) = live_dataset();
        let response = assemble_farm_map(&engine, &zones, &trees, &drone);
        let detail = zone_detail(engine.config(), &response, "zone-2").unwrap();
        assert_eq!(detail.zone.id, "zone-2");
        assert!(detail.hotspots.iter().all(|h| h.zone_id == "zone-2"));
        assert_eq!(detail.drone_track.len(), response.drone.points.len());
    }

    #[test]
    fn test_zone_detail_for_unknown_zone_is_an_error() {
        let engine = ZoneLayoutEngine::default();
        let (zones, trees, drone) = live_dataset();
        let response = assemble_farm_map(&engine, &zones, &trees, &drone);
        assert!(matches!(
            zone_detail(engine.config(), &response, "zone-999"),
            Err(PlotError::UnknownZone(_))
        ));
    }

    #[test]
    fn test_ring_only_boundary_is_centered_before_layout() {
        let engine = ZoneLayoutEngine::default();
        let ring_zone = ZoneRecord::new("ringed").with_boundary(ZoneBoundary {
            ring: Some(vec![
                [99.30, 9.10],
                [99.34, 9.10],
                [99.34, 9.14],
                [99.30, 9.14],
                [99.30, 9.10],
            ]),
            center: None,
            area_rai: Some(12.0),
        });
        let spread_zone = ZoneRecord::new("anchored").with_boundary(ZoneBoundary {
            ring: None,
            center: Some(vec![99.90, 9.90]),
            area_rai: None,
        });
        let (_, trees, drone) = live_dataset();
        let response = assemble_farm_map(
            &engine,
            &FixedZones(vec![ring_zone, spread_zone]),
            &trees,
            &drone,
        );
        // with a derived center the ringed zone is a geo zone: both map to
        // canvas extremes instead of the fallback grid
        let ringed = &response.zones[0];
        assert_eq!(ringed.position[0], -100.0);
    }
}
