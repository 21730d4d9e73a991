//! Board data: normalized records, layer normalization, and shape construction
//!
//! # Submodules
//! - `types` - Entity and net member records
//! - `layers` - TOP/BOTTOM normalization and partitioning
//! - `shapes` - Per-table shape rules (record to `Shape`)
//! - `outline` - Placement outline to bounding-box aggregation
//! - `tables` - Whole-board snapshot shared across analyses

mod types;
mod layers;
mod shapes;
mod outline;
mod tables;

pub use types::{EntityRecord, NetMember};

pub use layers::{partition_by_layer, Layer, LayerMap, LayerPartition};

pub use shapes::{ShapeKind, ShapeRule};

pub use outline::{aggregate_outline_bounds, OutlineRow, DEFAULT_EXCLUDED_SHAPES};

pub use tables::BoardTables;
