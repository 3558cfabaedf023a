//! # Plotscape
//!
//! A deterministic spatial layout engine for farm-zone maps.
//!
//! This library turns a heterogeneous batch of zone records (some carrying
//! real geographic geometry, some carrying none) into a complete, bounded,
//! visually separated 2D layout on a fixed virtual canvas, and provides the
//! paired coordinate transforms that let geographic space, scene space, and
//! the map widget's native space interoperate for zones, trees, and drone
//! flight paths.
//!
//! The engine is a pure function of its inputs: no I/O, no randomness, no
//! shared state. The same ordered batch always produces the same layout.

pub mod assets;
pub mod core;
pub mod data;
pub mod layout;
pub mod prelude;
pub mod response;
pub mod traits;
pub mod transform;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    bounds::CanvasBounds,
    config::LayoutConfig,
    geo::{GeoPoint, ScenePoint, ZonePosition},
};

pub use layout::{extract::RawZoneCenter, ZoneLayoutEngine};

pub use data::{
    model::{DroneRecord, FlightPath, RiskCondition, TreeRecord, ZoneBoundary, ZoneRecord},
    synthetic::synthetic_dataset,
};

pub use response::{assemble_farm_map, FarmMapResponse, ZoneDetail};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, PlotError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Unknown zone: {0}")]
    UnknownZone(String),
}

/// Error type alias for convenience
pub type Error = PlotError;

/// Initializes env_logger for demos and tests. Safe to call more than once.
#[cfg(feature = "debug")]
pub fn init_debug_logging() {
    let _ = env_logger::Builder::from_default_env().try_init();
}
