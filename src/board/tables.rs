//! In-memory snapshot of every normalized board table
//!
//! Loaded once per process and shared by the overlap runners and the net
//! joins so both see the same data.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::outline::{aggregate_outline_bounds, OutlineRow, DEFAULT_EXCLUDED_SHAPES};
use super::types::{EntityRecord, NetMember};
use crate::error::{CoverageError, Result};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardTables {
    pub test_points: Vec<EntityRecord>,
    pub pads: Vec<EntityRecord>,
    /// Component bounding boxes already reduced to one record each
    pub components: Vec<EntityRecord>,
    /// Raw placement outline rows, aggregated on demand
    pub outlines: Vec<OutlineRow>,
    pub connectors: Vec<NetMember>,
    pub connector_pins: Vec<NetMember>,
    pub net_pins: Vec<NetMember>,
    pub mounting_holes: Vec<NetMember>,
}

impl BoardTables {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let tables: BoardTables = serde_json::from_reader(BufReader::new(file))?;

        tracing::info!(
            test_points = tables.test_points.len(),
            pads = tables.pads.len(),
            components = tables.components.len(),
            outlines = tables.outlines.len(),
            "[Tables] Loaded board snapshot"
        );

        Ok(tables)
    }

    /// Component records plus the bounding boxes aggregated from `outlines`
    pub fn components_with_outlines(&self) -> Vec<EntityRecord> {
        let mut all = self.components.clone();
        all.extend(aggregate_outline_bounds(&self.outlines, DEFAULT_EXCLUDED_SHAPES));
        all
    }

    pub fn test_point_members(&self) -> Vec<NetMember> {
        self.test_points.iter().map(EntityRecord::as_net_member).collect()
    }

    /// Fail with `MissingInput` when `table` is empty
    pub fn require<'a, T>(name: &str, table: &'a [T]) -> Result<&'a [T]> {
        if table.is_empty() {
            return Err(CoverageError::MissingInput(name.to_string()));
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_snapshot_defaults_missing_tables() {
        let json = r#"{
            "test_points": [{"id": "TP1", "layer": "SOLDERMASK_TOP", "x": 0.0, "y": 0.0, "width": 1.0, "height": 1.0, "net_name": "GND"}],
            "outlines": [{"refdes": "U1", "layer": "PLACE_BOUND_TOP", "shape_name": "RECTANGLE", "x1": 0.0, "y1": 0.0, "x2": 2.0, "y2": 2.0}]
        }"#;
        let tables = BoardTables::from_json_str(json).unwrap();
        assert_eq!(tables.test_points.len(), 1);
        assert!(tables.pads.is_empty());
        assert_eq!(tables.components_with_outlines().len(), 1);
        assert_eq!(tables.test_point_members()[0].net_name.as_deref(), Some("GND"));
    }

    #[test]
    fn test_require_empty_table() {
        let empty: Vec<EntityRecord> = Vec::new();
        assert!(matches!(
            BoardTables::require("pads", &empty),
            Err(CoverageError::MissingInput(ref name)) if name == "pads"
        ));
    }
}
