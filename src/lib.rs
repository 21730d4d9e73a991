//! Test point placement checks for PCB designs
//!
//! Takes normalized board tables (test points, pads, component bounds, net
//! membership), reduces geometric records to circles, rectangles and
//! segments, and reports every same-side test point / feature pair whose
//! outlines intersect. A separate join pairs members that share a net.
//!
//! # Example
//! ```
//! use testability::{AnalysisConfig, EntityRecord, check_test_point_pad_overlaps};
//!
//! let test_points = vec![
//!     EntityRecord::new("TP1", "SOLDERMASK_TOP", "CIRCLE").with_geometry(0.0, 0.0, 10.0, 10.0),
//! ];
//! let pads = vec![
//!     EntityRecord::new("U1_1", "TOP", "RECT").with_geometry(3.0, 0.0, 4.0, 4.0),
//! ];
//! let overlaps = check_test_point_pad_overlaps(&test_points, &pads, &AnalysisConfig::default());
//! assert_eq!(overlaps.len(), 1);
//! assert!((overlaps[0].distance + 4.0).abs() < 1e-9);
//! ```

pub mod board;
pub mod config;
pub mod coverage;
pub mod crossref;
pub mod error;
pub mod geometry;

pub use board::{BoardTables, EntityRecord, Layer, LayerMap, NetMember, ShapeKind, ShapeRule};
pub use config::{AnalysisConfig, TableProfile};
pub use coverage::{
    check_test_point_component_coverage,
    check_test_point_pad_overlaps,
    run_overlap_check,
    MatchStrategy,
    OverlapRecord,
};
pub use crossref::{join_by_net, NetMatch};
pub use error::{CoverageError, Result};
