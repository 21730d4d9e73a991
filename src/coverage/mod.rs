//! Test point overlap and coverage checking
//!
//! Uses R-tree spatial indexing for candidate pruning and Rayon for
//! parallel per-side matching.
//!
//! # Submodules
//! - `types` - Overlap records, prepared shapes, match strategy
//! - `checks` - Record preparation and per-layer matchers
//! - `runners` - Entry points over whole tables

mod types;
mod checks;
mod runners;

pub use types::{MatchStrategy, OverlapRecord, PlacedShape, PrepareStats};

pub use checks::{check_pair, match_layer_indexed, match_layer_naive, prepare_shapes, should_check_pair};

pub use runners::{
    check_test_point_component_coverage,
    check_test_point_pad_overlaps,
    run_overlap_check,
};
