//! Analysis configuration
//!
//! Layer naming and shape-name conventions differ between source tables, so
//! they live here as data rather than in the matcher.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::board::{LayerMap, ShapeKind, ShapeRule};
use crate::coverage::MatchStrategy;
use crate::error::Result;

/// Shape name of the line-type pad pattern in the source CAD library
pub const LINE_PAD_SHAPE: &str = "FIG_SHAPE SHAPE1_5X2_4";

/// How one source table maps layers and shapes
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableProfile {
    pub layers: LayerMap,
    #[serde(default)]
    pub shapes: ShapeRule,
}

impl TableProfile {
    pub fn new(layers: LayerMap, shapes: ShapeRule) -> Self {
        Self { layers, shapes }
    }

    /// Test points: soldermask layers, always circular
    pub fn test_point() -> Self {
        Self::new(LayerMap::soldermask(), ShapeRule::always(ShapeKind::Circle))
    }

    /// Pads: etch layers, `CIRCLE` circles, the line pad pattern as segments
    pub fn pad() -> Self {
        Self::new(LayerMap::etch(), ShapeRule::with_markers(["CIRCLE"], [LINE_PAD_SHAPE]))
    }

    /// Components: placement bounds, always their bounding rectangle
    pub fn component() -> Self {
        Self::new(LayerMap::place_bound(), ShapeRule::always(ShapeKind::Rect))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub test_point: TableProfile,
    pub pad: TableProfile,
    pub component: TableProfile,
    /// Joins the two ids of a net match label
    pub label_separator: String,
    pub strategy: MatchStrategy,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            test_point: TableProfile::test_point(),
            pad: TableProfile::pad(),
            component: TableProfile::component(),
            label_separator: " - ".to_string(),
            strategy: MatchStrategy::Indexed,
        }
    }
}

impl AnalysisConfig {
    /// Load overrides from JSON; absent keys keep their defaults
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
