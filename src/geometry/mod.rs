//! Geometry module for board feature overlap analysis
//!
//! # Submodules
//! - `types` - Point, bounding box, and the closed `Shape` enum
//! - `distance` - Point/segment/rectangle primitives and shape-pair dispatch
//! - `spatial` - R-tree broad phase over shape bounds

mod types;
mod distance;
mod spatial;

pub use types::{Bounds, Point, Shape};

pub use distance::{
    point_segment_distance,
    segment_distance,
    shape_distance,
    signed_distance_point_to_rect,
};

pub use spatial::{build_shape_index, candidate_slots, query_margin, IndexedShape, BROAD_PHASE_TOLERANCE};
