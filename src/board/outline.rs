//! Placement outline aggregation
//!
//! Component and connector placement bounds arrive as outline rows: one row
//! per RECTANGLE (two opposite corners) or one row per edge for LINE
//! outlines. Rows are grouped per `(refdes, layer)` into a single bounding
//! box record.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::types::EntityRecord;

/// Shape names never contributing to placement bounds
pub const DEFAULT_EXCLUDED_SHAPES: &[&str] = &["TEXT"];

/// One outline primitive of a placement boundary
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutlineRow {
    pub refdes: String,
    pub layer: String,
    #[serde(default)]
    pub shape_name: String,
    #[serde(default)]
    pub x1: Option<f64>,
    #[serde(default)]
    pub y1: Option<f64>,
    #[serde(default)]
    pub x2: Option<f64>,
    #[serde(default)]
    pub y2: Option<f64>,
}

#[derive(Default)]
struct Extent {
    min: Option<f64>,
    max: Option<f64>,
}

impl Extent {
    fn add(&mut self, v: Option<f64>) {
        let Some(v) = v.filter(|v| v.is_finite()) else {
            return;
        };
        self.min = Some(self.min.map_or(v, |m| m.min(v)));
        self.max = Some(self.max.map_or(v, |m| m.max(v)));
    }
}

struct Group {
    shape_name: String,
    x: Extent,
    y: Extent,
}

/// Aggregate outline rows into one bounding-box record per `(refdes, layer)`
///
/// Groups keep first-appearance order and take the shape name of their
/// first row. Non-finite coordinates are skipped; an axis with no finite
/// coordinate leaves the record's geometry undefined.
pub fn aggregate_outline_bounds(rows: &[OutlineRow], excluded_shapes: &[&str]) -> Vec<EntityRecord> {
    let mut groups: IndexMap<(&str, &str), Group> = IndexMap::new();

    for row in rows {
        if excluded_shapes.contains(&row.shape_name.as_str()) {
            continue;
        }
        let group = groups
            .entry((row.refdes.as_str(), row.layer.as_str()))
            .or_insert_with(|| Group {
                shape_name: row.shape_name.clone(),
                x: Extent::default(),
                y: Extent::default(),
            });
        group.x.add(row.x1);
        group.x.add(row.x2);
        group.y.add(row.y1);
        group.y.add(row.y2);
    }

    groups
        .into_iter()
        .map(|((refdes, layer), g)| {
            EntityRecord::from_bounds(refdes, layer, g.shape_name, [g.x.min, g.y.min, g.x.max, g.y.max])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(refdes: &str, layer: &str, shape: &str, c: [f64; 4]) -> OutlineRow {
        OutlineRow {
            refdes: refdes.to_string(),
            layer: layer.to_string(),
            shape_name: shape.to_string(),
            x1: Some(c[0]),
            y1: Some(c[1]),
            x2: Some(c[2]),
            y2: Some(c[3]),
        }
    }

    #[test]
    fn test_rectangle_corners_any_order() {
        let rows = vec![row("U1", "PLACE_BOUND_TOP", "RECTANGLE", [4.0, 3.0, 0.0, -1.0])];
        let out = aggregate_outline_bounds(&rows, DEFAULT_EXCLUDED_SHAPES);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].x, Some(2.0));
        assert_eq!(out[0].y, Some(1.0));
        assert_eq!(out[0].width, Some(4.0));
        assert_eq!(out[0].height, Some(4.0));
    }

    #[test]
    fn test_line_edges_grouped_per_layer() {
        let rows = vec![
            row("XP1", "PLACE_BOUND_TOP", "LINE", [0.0, 0.0, 10.0, 0.0]),
            row("XP1", "PLACE_BOUND_TOP", "LINE", [10.0, 0.0, 10.0, 5.0]),
            row("XP1", "PLACE_BOUND_BOTTOM", "LINE", [0.0, 0.0, 1.0, 1.0]),
            row("XP1", "PLACE_BOUND_TOP", "LINE", [10.0, 5.0, 0.0, 5.0]),
            row("XP1", "PLACE_BOUND_TOP", "TEXT", [100.0, 100.0, 100.0, 100.0]),
        ];
        let out = aggregate_outline_bounds(&rows, DEFAULT_EXCLUDED_SHAPES);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].layer, "PLACE_BOUND_TOP");
        assert_eq!(out[0].shape_name, "LINE");
        assert_eq!(out[0].width, Some(10.0));
        assert_eq!(out[0].height, Some(5.0));
        assert_eq!(out[1].layer, "PLACE_BOUND_BOTTOM");
    }

    #[test]
    fn test_axis_without_values_is_undefined() {
        let mut r = row("U9", "PLACE_BOUND_TOP", "RECTANGLE", [0.0, 0.0, 1.0, 1.0]);
        r.y1 = None;
        r.y2 = Some(f64::NAN);
        let out = aggregate_outline_bounds(&[r], DEFAULT_EXCLUDED_SHAPES);
        assert_eq!(out[0].width, Some(1.0));
        assert_eq!(out[0].y, None);
    }
}
