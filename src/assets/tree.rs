//! Tree projection
//!
//! Trees carry authoritative geographic coordinates; the storage transform
//! places them into scene space. Health, carbon, and age fields are owned
//! by the survey collaborator and pass through untouched.

use serde::{Deserialize, Serialize};

use crate::data::model::TreeRecord;
use crate::transform::geo_to_storage_position;

/// A surveyed tree as rendered on the map widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeFeature {
    pub id: String,
    /// `[x, 0, z]` — trees sit on the ground plane
    pub position: [f64; 3],
    pub health: String,
    pub carbon_stock: f64,
    pub age: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_scanned: Option<String>,
}

/// Projects a tree record into scene space. A tree without a usable
/// location lands at the scene origin rather than being dropped.
pub fn tree_feature(record: &TreeRecord) -> TreeFeature {
    TreeFeature {
        id: record.id.clone(),
        position: geo_to_storage_position(record.valid_location()).to_array(),
        health: record.health.clone(),
        carbon_stock: record.carbon_stock,
        age: record.age,
        last_scanned: record.last_scanned.clone(),
    }
}
