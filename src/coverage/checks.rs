//! Layer overlap checking logic
//!
//! Contains record preparation and the per-layer pairwise matchers.

use rayon::prelude::*;

use super::types::{OverlapRecord, PlacedShape, PrepareStats};
use crate::board::{partition_by_layer, EntityRecord, Layer, LayerPartition};
use crate::config::TableProfile;
use crate::geometry::{build_shape_index, candidate_slots, shape_distance};

/// Build shapes for a table and split them by side
///
/// Records with an unmapped layer or undefined geometry are dropped and
/// counted; neither stops the remaining records from being prepared.
pub fn prepare_shapes(records: &[EntityRecord], profile: &TableProfile) -> (LayerPartition<PlacedShape>, PrepareStats) {
    let (by_layer, unmapped_layer) =
        partition_by_layer(records.iter(), &profile.layers, |r| (r.id.as_str(), r.layer.as_str()));

    let mut stats = PrepareStats {
        total: records.len(),
        unmapped_layer,
        ..Default::default()
    };
    let mut partition = LayerPartition::default();

    for layer in Layer::ALL {
        for record in by_layer.get(layer) {
            match profile.shapes.build(record) {
                Ok(shape) => partition.push(
                    layer,
                    PlacedShape {
                        id: record.id.clone(),
                        layer,
                        shape,
                    },
                ),
                Err(e) => {
                    stats.undefined_geometry += 1;
                    tracing::debug!("[Coverage] Skipping record: {}", e);
                }
            }
        }
    }

    (partition, stats)
}

/// Check if two shapes should be distance-checked against each other
pub fn should_check_pair(a: &PlacedShape, b: &PlacedShape) -> bool {
    // Different sides never interact
    if a.layer != b.layer {
        return false;
    }

    // Self-pair
    a.id != b.id
}

/// Overlap record for a pair, if its distance is strictly negative
pub fn check_pair(subject: &PlacedShape, object: &PlacedShape) -> Option<OverlapRecord> {
    if !should_check_pair(subject, object) {
        return None;
    }

    let distance = shape_distance(&subject.shape, &object.shape);
    if distance < 0.0 {
        Some(OverlapRecord {
            subject_id: subject.id.clone(),
            object_id: object.id.clone(),
            layer: subject.layer,
            distance,
        })
    } else {
        None
    }
}

/// Every subject against every object on one side
///
/// Both slices hold shapes from the same side of a [`LayerPartition`].
/// Results follow nested iteration order: subject order, then object order.
pub fn match_layer_naive(subjects: &[PlacedShape], objects: &[PlacedShape]) -> Vec<OverlapRecord> {
    if subjects.is_empty() || objects.is_empty() {
        return vec![];
    }

    subjects
        .par_iter()
        .flat_map_iter(|subject| objects.iter().filter_map(move |object| check_pair(subject, object)))
        .collect()
}

/// Same result as [`match_layer_naive`], pruning objects with an R-tree first
///
/// Candidates are visited in original object order so the output order
/// matches the naive matcher exactly.
pub fn match_layer_indexed(subjects: &[PlacedShape], objects: &[PlacedShape]) -> Vec<OverlapRecord> {
    if subjects.is_empty() || objects.is_empty() {
        return vec![];
    }

    let spatial_index = build_shape_index(objects.iter().map(|o| &o.shape));

    subjects
        .par_iter()
        .flat_map_iter(|subject| {
            let bounds = subject.shape.bounds();
            candidate_slots(&spatial_index, &bounds)
                .into_iter()
                .filter_map(move |slot| check_pair(subject, &objects[slot]))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Shape;

    fn placed(id: &str, layer: Layer, shape: Shape) -> PlacedShape {
        PlacedShape { id: id.to_string(), layer, shape }
    }

    #[test]
    fn test_should_check_pair() {
        let a = placed("A", Layer::Top, Shape::circle([0.0, 0.0], 1.0));
        let b = placed("B", Layer::Bottom, Shape::circle([0.0, 0.0], 1.0));
        let a2 = placed("A", Layer::Top, Shape::circle([0.0, 0.0], 1.0));
        assert!(!should_check_pair(&a, &b));
        assert!(!should_check_pair(&a, &a2));
    }

    #[test]
    fn test_touching_is_not_overlap() {
        let a = placed("TP1", Layer::Top, Shape::circle([0.0, 0.0], 2.0));
        let b = placed("C1", Layer::Top, Shape::rect([2.0, 0.0], 2.0, 2.0));
        assert!(check_pair(&a, &b).is_none());
    }

    #[test]
    fn test_naive_order_is_nested_iteration() {
        let subjects = vec![
            placed("TP1", Layer::Top, Shape::circle([0.0, 0.0], 2.0)),
            placed("TP2", Layer::Top, Shape::circle([10.0, 0.0], 2.0)),
        ];
        let objects = vec![
            placed("P2", Layer::Top, Shape::rect([10.0, 0.0], 1.0, 1.0)),
            placed("P1", Layer::Top, Shape::rect([0.5, 0.0], 1.0, 1.0)),
            placed("P3", Layer::Top, Shape::rect([0.0, 0.5], 1.0, 1.0)),
        ];
        let ids: Vec<(String, String)> = match_layer_naive(&subjects, &objects)
            .into_iter()
            .map(|r| (r.subject_id, r.object_id))
            .collect();
        assert_eq!(
            ids,
            vec![
                ("TP1".to_string(), "P1".to_string()),
                ("TP1".to_string(), "P3".to_string()),
                ("TP2".to_string(), "P2".to_string()),
            ]
        );
    }

    #[test]
    fn test_indexed_matches_naive() {
        let subjects = vec![
            placed("TP1", Layer::Top, Shape::circle([0.0, 0.0], 2.0)),
            placed("TP2", Layer::Top, Shape::circle([3.0, 3.0], 1.0)),
        ];
        let objects = vec![
            placed("P1", Layer::Top, Shape::rect([0.5, 0.0], 1.0, 1.0)),
            placed("P2", Layer::Top, Shape::segment([2.5, 3.0], [9.0, 3.0])),
            placed("P3", Layer::Top, Shape::circle([40.0, 0.0], 1.0)),
        ];
        assert_eq!(
            match_layer_indexed(&subjects, &objects),
            match_layer_naive(&subjects, &objects)
        );
    }

    #[test]
    fn test_empty_sides_yield_nothing() {
        let subjects = vec![placed("TP1", Layer::Top, Shape::circle([0.0, 0.0], 2.0))];
        assert!(match_layer_naive(&subjects, &[]).is_empty());
        assert!(match_layer_indexed(&[], &subjects).is_empty());
    }
}
