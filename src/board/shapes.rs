//! Shape construction from normalized records
//!
//! Each source table declares which shape names denote circles and which
//! denote line-type features; everything else is a rectangle.

use serde::{Deserialize, Serialize};

use super::types::EntityRecord;
use crate::error::{CoverageError, Result};
use crate::geometry::Shape;

/// Shape family a record is built as
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Circle,
    Rect,
    Line,
}

/// Per-table shape construction rule
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeRule {
    /// Build every record as this kind regardless of its shape name
    pub fixed: Option<ShapeKind>,
    pub circle_markers: Vec<String>,
    pub line_markers: Vec<String>,
}

impl ShapeRule {
    /// Build every record as `kind`
    pub fn always(kind: ShapeKind) -> Self {
        Self {
            fixed: Some(kind),
            ..Default::default()
        }
    }

    pub fn with_markers<C, L>(circle_markers: C, line_markers: L) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        L: IntoIterator,
        L::Item: Into<String>,
    {
        Self {
            fixed: None,
            circle_markers: circle_markers.into_iter().map(Into::into).collect(),
            line_markers: line_markers.into_iter().map(Into::into).collect(),
        }
    }

    /// Resolve a shape name to its kind
    pub fn kind_for(&self, shape_name: &str) -> ShapeKind {
        if let Some(kind) = self.fixed {
            return kind;
        }
        if self.circle_markers.iter().any(|m| m == shape_name) {
            ShapeKind::Circle
        } else if self.line_markers.iter().any(|m| m == shape_name) {
            ShapeKind::Line
        } else {
            ShapeKind::Rect
        }
    }

    /// Build the record's shape
    ///
    /// Fails with `UndefinedGeometry` when a field the kind needs is missing
    /// or non-finite, or when a circle/rectangle extent is negative.
    pub fn build(&self, record: &EntityRecord) -> Result<Shape> {
        let kind = self.kind_for(&record.shape_name);
        let field = |name: &str, value: Option<f64>| -> Result<f64> {
            match value {
                Some(v) if v.is_finite() => Ok(v),
                Some(v) => Err(undefined(record, format!("{} is {}", name, v))),
                None => Err(undefined(record, format!("{} is missing", name))),
            }
        };

        let x = field("x", record.x)?;
        let y = field("y", record.y)?;

        let shape = match kind {
            ShapeKind::Circle => Shape::circle([x, y], field("width", record.width)?),
            ShapeKind::Rect => Shape::rect([x, y], field("width", record.width)?, field("height", record.height)?),
            ShapeKind::Line => Shape::segment([x, y], [field("width", record.width)?, field("height", record.height)?]),
        };

        if !shape.is_well_formed() {
            return Err(undefined(record, format!("negative extent for {}", shape.kind_name())));
        }

        Ok(shape)
    }
}

fn undefined(record: &EntityRecord, reason: String) -> CoverageError {
    CoverageError::UndefinedGeometry {
        id: record.id.clone(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pad_rule() -> ShapeRule {
        ShapeRule::with_markers(["CIRCLE"], ["FIG_SHAPE SHAPE1_5X2_4"])
    }

    #[test]
    fn test_kind_for_markers() {
        let rule = pad_rule();
        assert_eq!(rule.kind_for("CIRCLE"), ShapeKind::Circle);
        assert_eq!(rule.kind_for("FIG_SHAPE SHAPE1_5X2_4"), ShapeKind::Line);
        assert_eq!(rule.kind_for("RECT 1.2X0.8"), ShapeKind::Rect);
        assert_eq!(rule.kind_for("circle"), ShapeKind::Rect);
    }

    #[test]
    fn test_fixed_kind_ignores_name() {
        let rule = ShapeRule::always(ShapeKind::Circle);
        assert_eq!(rule.kind_for("RECTANGLE"), ShapeKind::Circle);
    }

    #[test]
    fn test_build_circle_uses_width_as_diameter() {
        let r = EntityRecord::new("TP1", "SOLDERMASK_TOP", "CIRCLE").with_geometry(1.0, 2.0, 1.0, f64::NAN);
        let shape = pad_rule().build(&r).unwrap();
        assert_eq!(shape, Shape::Circle { center: [1.0, 2.0], radius: 0.5 });
    }

    #[test]
    fn test_build_line_reuses_extents_as_endpoint() {
        let r = EntityRecord::new("J1_1", "TOP", "FIG_SHAPE SHAPE1_5X2_4").with_geometry(0.0, 0.0, 3.0, 4.0);
        let shape = pad_rule().build(&r).unwrap();
        assert_eq!(shape, Shape::Segment { a: [0.0, 0.0], b: [3.0, 4.0] });
    }

    #[test]
    fn test_build_rect_halves_extents() {
        let r = EntityRecord::new("U1_1", "TOP", "RECT").with_geometry(0.0, 0.0, 3.0, 4.0);
        let shape = pad_rule().build(&r).unwrap();
        assert_eq!(shape, Shape::Rect { center: [0.0, 0.0], half_width: 1.5, half_height: 2.0 });
    }

    #[test]
    fn test_build_missing_field_is_undefined() {
        let mut r = EntityRecord::new("U1_1", "TOP", "RECT").with_geometry(0.0, 0.0, 3.0, 4.0);
        r.height = None;
        let err = pad_rule().build(&r).unwrap_err();
        assert!(matches!(err, CoverageError::UndefinedGeometry { ref id, .. } if id == "U1_1"));
    }

    #[test]
    fn test_build_nan_is_undefined() {
        let r = EntityRecord::new("TP2", "SOLDERMASK_TOP", "CIRCLE").with_geometry(f64::NAN, 0.0, 1.0, 1.0);
        assert!(ShapeRule::always(ShapeKind::Circle).build(&r).is_err());
    }

    #[test]
    fn test_build_negative_extent_is_undefined() {
        let r = EntityRecord::new("U2", "TOP", "RECT").with_geometry(0.0, 0.0, -1.0, 1.0);
        assert!(pad_rule().build(&r).is_err());
    }
}
