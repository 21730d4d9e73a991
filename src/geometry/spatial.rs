//! Spatial indexing types for broad-phase overlap candidates
//!
//! Wraps shapes in an R-tree keyed on their bounding boxes. Two shapes whose
//! boxes are disjoint cannot have a negative distance, so the index only ever
//! discards pairs that would not have matched. Queries are widened by a small
//! tolerance: near tangency the distance can round below zero while the
//! float boxes come out just apart.

use rstar::{RTree, RTreeObject, AABB};

use super::types::{Bounds, Shape};

/// Shape wrapper for R-tree spatial indexing
///
/// `slot` is the position of the shape in the slice the index was built
/// from, so callers can recover the owning record and its original order.
#[derive(Clone, Debug)]
pub struct IndexedShape {
    pub slot: usize,
    pub envelope: AABB<[f64; 2]>,
}

impl IndexedShape {
    pub fn new(slot: usize, shape: &Shape) -> Self {
        let Bounds { min, max } = shape.bounds();
        Self {
            slot,
            envelope: AABB::from_corners(min, max),
        }
    }
}

impl RTreeObject for IndexedShape {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

/// Bulk-load an R-tree over a sequence of shapes
pub fn build_shape_index<'a, I>(shapes: I) -> RTree<IndexedShape>
where
    I: IntoIterator<Item = &'a Shape>,
{
    let items: Vec<IndexedShape> = shapes
        .into_iter()
        .enumerate()
        .map(|(slot, shape)| IndexedShape::new(slot, shape))
        .collect();
    RTree::bulk_load(items)
}

/// Relative slack applied to broad-phase queries
pub const BROAD_PHASE_TOLERANCE: f64 = 1e-9;

/// Query margin for `bounds`, scaled to its coordinate magnitude
pub fn query_margin(bounds: &Bounds) -> f64 {
    BROAD_PHASE_TOLERANCE * (1.0 + bounds.magnitude())
}

/// Slots of every indexed shape whose box intersects `bounds`, ascending
///
/// `bounds` is widened by [`query_margin`] first, so candidates may include
/// shapes a hair outside it. The exact distance test decides the result.
pub fn candidate_slots(index: &RTree<IndexedShape>, bounds: &Bounds) -> Vec<usize> {
    let widened = bounds.inflated(query_margin(bounds));
    let search = AABB::from_corners(widened.min, widened.max);
    let mut slots: Vec<usize> = index
        .locate_in_envelope_intersecting(&search)
        .map(|item| item.slot)
        .collect();
    slots.sort_unstable();
    slots
}
