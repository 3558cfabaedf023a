//! The zone spatial layout pipeline
//!
//! Turns an ordered batch of zone records — some geo-anchored, some with no
//! geometry at all — into a complete, bounded, visually separated set of 2D
//! scene positions:
//!
//! 1. [`extract`] derives a raw center per zone (real geometry or the
//!    index-based fallback grid),
//! 2. [`normalize`] rescales the whole batch into the canvas, or places the
//!    batch on a fixed grid when no zone has geometry,
//! 3. [`separation`] pushes apart centers closer than the minimum distance,
//! 4. [`clamp`] pins everything inside the canvas and rounds once.
//!
//! The pipeline is batch-relative: min-max normalization depends on the
//! whole current batch, so adding or removing a single zone means
//! recomputing the whole layout. It is also order-dependent: fallback grid
//! cells are assigned by list index. Callers own index stability.

pub mod clamp;
pub mod extract;
pub mod normalize;
pub mod separation;

use crate::core::config::LayoutConfig;
use crate::core::geo::ZonePosition;
use crate::data::model::ZoneRecord;

pub use extract::RawZoneCenter;

/// The zone layout engine: a pure function of its configuration and input.
///
/// For a fixed ordered batch the output is bit-for-bit reproducible, so
/// callers may cache results keyed by input identity (zone order included).
#[derive(Debug, Clone, Default)]
pub struct ZoneLayoutEngine {
    config: LayoutConfig,
}

impl ZoneLayoutEngine {
    /// Creates an engine with the given configuration
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Get the current configuration
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Computes final canvas positions for an ordered batch of zones.
    ///
    /// Never fails: zones with missing or malformed geometry take the
    /// deterministic fallback path inside the pipeline.
    pub fn layout(&self, zones: &[ZoneRecord]) -> Vec<ZonePosition> {
        let raw = extract::extract_raw_centers(&self.config, zones);
        log::debug!(
            "layout: {} zones, {} with real geometry",
            raw.len(),
            raw.iter().filter(|c| c.has_geo).count()
        );

        let mut positions = normalize::normalize_centers(&self.config, &raw);
        separation::resolve_separation(&self.config, &mut positions);
        clamp::clamp_positions(&self.config, &mut positions);
        positions
    }
}
