//! Overlap check data types
//!
//! Contains the prepared per-entity geometry and the overlap output record.

use serde::{Deserialize, Serialize};

use crate::board::Layer;
use crate::geometry::Shape;

/// A record reduced to its id, logical side, and shape
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedShape {
    pub id: String,
    pub layer: Layer,
    pub shape: Shape,
}

/// A subject/object pair whose outlines intersect
///
/// `distance` is always strictly negative.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OverlapRecord {
    pub subject_id: String,
    pub object_id: String,
    pub layer: Layer,
    pub distance: f64,
}

/// Candidate generation for the matcher
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// Every subject against every object
    Naive,
    /// R-tree broad phase over object bounds
    #[default]
    Indexed,
}

/// Per-table preparation counts, for logging
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PrepareStats {
    pub total: usize,
    pub undefined_geometry: usize,
    pub unmapped_layer: usize,
}

impl PrepareStats {
    pub fn dropped(&self) -> usize {
        self.undefined_geometry + self.unmapped_layer
    }
}
