//! Prelude module for common plotscape types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use plotscape::prelude::*;`

pub use crate::core::{
    bounds::CanvasBounds,
    config::LayoutConfig,
    geo::{GeoPoint, ScenePoint, ZonePosition},
};

pub use crate::layout::{
    clamp::clamp_positions, extract::RawZoneCenter, normalize::normalize_centers,
    separation::resolve_separation, ZoneLayoutEngine,
};

pub use crate::transform::{geo_to_storage_position, scene_to_geo, scene_to_geo_about};

pub use crate::data::{
    model::{DroneRecord, FlightPath, RiskCondition, TreeRecord, ZoneBoundary, ZoneRecord},
    synthetic::synthetic_dataset,
};

pub use crate::assets::{
    drone::DronePathFeature,
    risk::{CoverageCellFeature, HotspotFeature},
    tree::TreeFeature,
    zone::ZoneFeature,
};

pub use crate::response::{
    assemble_farm_map, zone_detail, DroneStore, FarmMapResponse, TreeStore, ZoneDetail, ZoneStore,
};

pub use crate::traits::{Lerp, PointMath};

pub use crate::{Error as PlotError, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
