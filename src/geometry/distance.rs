//! Distance calculation algorithms for overlap checking
//!
//! Contains point, segment, and rectangle distance primitives plus the
//! shape-pair dispatch. Negative results mean penetration; the penetration
//! depth for rectangles is the largest per-axis overlap, not the exact
//! Euclidean depth.

use super::types::{Point, Shape};

/// Point-to-segment minimum distance
///
/// The projection parameter is clamped to `[0, 1]`; a degenerate segment
/// (`a == b`) falls back to point-to-point distance.
pub fn point_segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let ab = [b[0] - a[0], b[1] - a[1]];
    let ap = [p[0] - a[0], p[1] - a[1]];
    let ab_len2 = ab[0] * ab[0] + ab[1] * ab[1];

    if ab_len2 == 0.0 {
        return point_distance(p, a);
    }

    let t = ((ap[0] * ab[0] + ap[1] * ab[1]) / ab_len2).clamp(0.0, 1.0);
    let closest = [a[0] + t * ab[0], a[1] + t * ab[1]];
    point_distance(p, closest)
}

/// Signed distance from a point to an axis-aligned rectangle
///
/// Inside (or on the edge): the maximum per-axis excess, which is `<= 0`.
/// Outside: Euclidean distance to the nearest boundary point.
pub fn signed_distance_point_to_rect(p: Point, center: Point, half_w: f64, half_h: f64) -> f64 {
    let dx = (p[0] - center[0]).abs() - half_w;
    let dy = (p[1] - center[1]).abs() - half_h;

    if dx <= 0.0 && dy <= 0.0 {
        return dx.max(dy);
    }

    dx.max(0.0).hypot(dy.max(0.0))
}

/// Segment-to-segment minimum distance (unsigned, zero when they cross)
pub fn segment_distance(a1: Point, a2: Point, b1: Point, b2: Point) -> f64 {
    if segments_intersect(a1, a2, b1, b2) {
        return 0.0;
    }

    point_segment_distance(a1, b1, b2)
        .min(point_segment_distance(a2, b1, b2))
        .min(point_segment_distance(b1, a1, a2))
        .min(point_segment_distance(b2, a1, a2))
}

/// Signed distance between two shapes
///
/// The pair overlaps iff the result is strictly negative.
pub fn shape_distance(subject: &Shape, object: &Shape) -> f64 {
    match (*subject, *object) {
        (
            Shape::Rect { center: c1, half_width: w1, half_height: h1 },
            Shape::Rect { center: c2, half_width: w2, half_height: h2 },
        ) => rect_rect_distance(c1, w1, h1, c2, w2, h2),

        (Shape::Rect { center, half_width, half_height }, Shape::Circle { center: cc, radius })
        | (Shape::Circle { center: cc, radius }, Shape::Rect { center, half_width, half_height }) => {
            signed_distance_point_to_rect(cc, center, half_width, half_height) - radius
        }

        (Shape::Circle { center: c1, radius: r1 }, Shape::Circle { center: c2, radius: r2 }) => {
            point_distance(c1, c2) - (r1 + r2)
        }

        (Shape::Segment { a, b }, Shape::Rect { center, half_width, half_height })
        | (Shape::Rect { center, half_width, half_height }, Shape::Segment { a, b }) => {
            segment_rect_distance(a, b, center, half_width, half_height)
        }

        (Shape::Segment { a, b }, Shape::Circle { center, radius })
        | (Shape::Circle { center, radius }, Shape::Segment { a, b }) => {
            point_segment_distance(center, a, b) - radius
        }

        (Shape::Segment { a: a1, b: a2 }, Shape::Segment { a: b1, b: b2 }) => {
            segment_distance(a1, a2, b1, b2)
        }
    }
}

/// Rectangle-to-rectangle gap using per-axis separation
fn rect_rect_distance(c1: Point, w1: f64, h1: f64, c2: Point, w2: f64, h2: f64) -> f64 {
    let gap_x = (c1[0] - c2[0]).abs() - (w1 + w2);
    let gap_y = (c1[1] - c2[1]).abs() - (h1 + h2);

    match (gap_x <= 0.0, gap_y <= 0.0) {
        (true, true) => gap_x.max(gap_y),
        (false, true) => gap_x,
        (true, false) => gap_y,
        (false, false) => gap_x.hypot(gap_y),
    }
}

/// Segment-to-rectangle distance
///
/// An endpoint inside the rectangle short-circuits with its (negative)
/// signed distance. Otherwise the minimum over both endpoint distances and
/// the four corner-to-segment distances.
fn segment_rect_distance(a: Point, b: Point, center: Point, half_w: f64, half_h: f64) -> f64 {
    let dist_a = signed_distance_point_to_rect(a, center, half_w, half_h);
    let dist_b = signed_distance_point_to_rect(b, center, half_w, half_h);
    let endpoint_min = dist_a.min(dist_b);
    if endpoint_min < 0.0 {
        return endpoint_min;
    }

    let corners = [
        [center[0] - half_w, center[1] - half_h],
        [center[0] + half_w, center[1] - half_h],
        [center[0] + half_w, center[1] + half_h],
        [center[0] - half_w, center[1] + half_h],
    ];

    corners
        .iter()
        .map(|&corner| point_segment_distance(corner, a, b))
        .fold(endpoint_min, f64::min)
}

fn point_distance(a: Point, b: Point) -> f64 {
    (a[0] - b[0]).hypot(a[1] - b[1])
}

fn cross(o: Point, a: Point, b: Point) -> f64 {
    (a[0] - o[0]) * (b[1] - o[1]) - (a[1] - o[1]) * (b[0] - o[0])
}

fn on_segment(p: Point, a: Point, b: Point) -> bool {
    p[0] >= a[0].min(b[0]) && p[0] <= a[0].max(b[0]) && p[1] >= a[1].min(b[1]) && p[1] <= a[1].max(b[1])
}

fn segments_intersect(a1: Point, a2: Point, b1: Point, b2: Point) -> bool {
    let d1 = cross(b1, b2, a1);
    let d2 = cross(b1, b2, a2);
    let d3 = cross(a1, a2, b1);
    let d4 = cross(a1, a2, b2);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    (d1 == 0.0 && on_segment(a1, b1, b2))
        || (d2 == 0.0 && on_segment(a2, b1, b2))
        || (d3 == 0.0 && on_segment(b1, a1, a2))
        || (d4 == 0.0 && on_segment(b2, a1, a2))
}
