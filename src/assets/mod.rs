//! Asset projection into scene space
//!
//! Zones get their positions from the layout pipeline; everything else on
//! the map — trees, disease hotspots, scan-coverage cells, the drone track
//! — is placed here, reusing the same coordinate mappers so all assets stay
//! consistent relative to the zones in both the global map and the per-zone
//! detail view.

pub mod drone;
pub mod risk;
pub mod tree;
pub mod zone;
