//! Core geometric primitives for board features
//!
//! Every entity taking part in overlap matching is reduced to one of three
//! shapes: a circle, an axis-aligned rectangle, or a line segment.

use serde::Serialize;

/// A 2D point `[x, y]`
pub type Point = [f64; 2];

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min: [a[0].min(b[0]), a[1].min(b[1])],
            max: [a[0].max(b[0]), a[1].max(b[1])],
        }
    }

    /// Grow the box by `margin` on every side
    pub fn inflated(&self, margin: f64) -> Self {
        Self {
            min: [self.min[0] - margin, self.min[1] - margin],
            max: [self.max[0] + margin, self.max[1] + margin],
        }
    }

    /// Largest absolute coordinate of either corner
    pub fn magnitude(&self) -> f64 {
        self.min.iter().chain(self.max.iter()).fold(0.0, |m, v| m.max(v.abs()))
    }

    /// Inclusive intersection test (touching boxes intersect)
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.min[0] <= other.max[0]
            && other.min[0] <= self.max[0]
            && self.min[1] <= other.max[1]
            && other.min[1] <= self.max[1]
    }
}

/// Closed set of shapes the distance dispatch understands
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Circle { center: Point, radius: f64 },
    Rect { center: Point, half_width: f64, half_height: f64 },
    Segment { a: Point, b: Point },
}

impl Shape {
    /// Circle from a center and a diameter
    pub fn circle(center: Point, diameter: f64) -> Self {
        Shape::Circle { center, radius: diameter / 2.0 }
    }

    /// Rectangle from a center and full extents
    pub fn rect(center: Point, width: f64, height: f64) -> Self {
        Shape::Rect {
            center,
            half_width: width / 2.0,
            half_height: height / 2.0,
        }
    }

    pub fn segment(a: Point, b: Point) -> Self {
        Shape::Segment { a, b }
    }

    pub fn bounds(&self) -> Bounds {
        match *self {
            Shape::Circle { center, radius } => Bounds {
                min: [center[0] - radius, center[1] - radius],
                max: [center[0] + radius, center[1] + radius],
            },
            Shape::Rect { center, half_width, half_height } => Bounds {
                min: [center[0] - half_width, center[1] - half_height],
                max: [center[0] + half_width, center[1] + half_height],
            },
            Shape::Segment { a, b } => Bounds::from_corners(a, b),
        }
    }

    /// True when every coordinate and extent is finite and no extent is negative
    pub fn is_well_formed(&self) -> bool {
        let finite = |v: &[f64]| v.iter().all(|c| c.is_finite());
        match *self {
            Shape::Circle { center, radius } => finite(&center) && radius.is_finite() && radius >= 0.0,
            Shape::Rect { center, half_width, half_height } => {
                finite(&center)
                    && half_width.is_finite()
                    && half_height.is_finite()
                    && half_width >= 0.0
                    && half_height >= 0.0
            }
            Shape::Segment { a, b } => finite(&a) && finite(&b),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::Circle { .. } => "circle",
            Shape::Rect { .. } => "rect",
            Shape::Segment { .. } => "segment",
        }
    }
}
