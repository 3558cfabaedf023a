//! Engine-wide constants inherited from the deployed map backend.
//! Keeping them in a single place makes it easier to tweak engine-wide magic
//! numbers, and keeps persisted/cached layouts compatible across releases.

/// Lower edge of the virtual scene canvas, per axis.
pub const CANVAS_MIN: f64 = -100.0;

/// Upper edge of the virtual scene canvas, per axis.
pub const CANVAS_MAX: f64 = 100.0;

/// Minimum rendering distance between two zone centers (map units).
pub const MIN_SEPARATION: f64 = 42.0;

/// Column count of the fallback grid used for zones without geometry.
pub const FALLBACK_GRID_COLUMNS: usize = 3;

/// Cell spacing of the fallback grid when no zone in the batch has geometry.
pub const FALLBACK_GRID_SPACING: f64 = 70.0;

/// Smallest per-axis span allowed during batch normalization.
/// Guards the min-max division when all raw values coincide on an axis.
pub const SPAN_FLOOR: f64 = 0.0001;

/// Latitude of the fixed geographic anchor of the interactive map.
pub const CENTER_LAT: f64 = 9.1234;

/// Longitude of the fixed geographic anchor of the interactive map.
pub const CENTER_LNG: f64 = 99.3456;

/// Degrees of latitude/longitude per scene unit. Shared by the interactive
/// map projection and the per-zone drone track projection; the two reuse the
/// same constant by convention, so it must exist exactly once.
pub const DEGREES_PER_SCENE_UNIT: f64 = 0.00025;

/// Scene units per degree in the storage-ingestion transform.
/// NOTE: deliberately not the reciprocal of [`DEGREES_PER_SCENE_UNIT`] — the
/// storage transform and the interactive-map projection are two different
/// conventions inherited from the source system. See `transform`.
pub const STORAGE_UNITS_PER_DEGREE: f64 = 100.0;

/// Longitude offset of the storage-ingestion transform.
pub const STORAGE_LNG_OFFSET: f64 = 9900.0;

/// Latitude offset of the storage-ingestion transform.
pub const STORAGE_LAT_OFFSET: f64 = 900.0;

/// Fixed render elevation of a zone footprint.
pub const ZONE_FOOTPRINT_ELEVATION: f64 = 0.1;

/// Fixed render elevation of a disease hotspot marker.
pub const HOTSPOT_ELEVATION: f64 = 0.4;

/// Fixed render elevation of a scan-coverage cell.
pub const COVERAGE_CELL_ELEVATION: f64 = 0.2;
