//! Overlap runner functions
//!
//! Contains the main entry points for overlap checks:
//! - Generic subject/object check over both board sides
//! - Test point vs pad overlaps
//! - Test point vs component bounding box coverage

use rayon::prelude::*;

use super::checks::{match_layer_indexed, match_layer_naive, prepare_shapes};
use super::types::{MatchStrategy, OverlapRecord, PrepareStats};
use crate::board::{EntityRecord, Layer};
use crate::config::{AnalysisConfig, TableProfile};

/// Run an overlap check between two tables
///
/// Each side (TOP, BOTTOM) is matched independently; results are TOP first,
/// then BOTTOM. An empty table yields an empty result, never an error.
pub fn run_overlap_check(
    subjects: &[EntityRecord],
    subject_profile: &TableProfile,
    objects: &[EntityRecord],
    object_profile: &TableProfile,
    strategy: MatchStrategy,
) -> Vec<OverlapRecord> {
    let start = std::time::Instant::now();

    if subjects.is_empty() || objects.is_empty() {
        tracing::warn!(
            subjects = subjects.len(),
            objects = objects.len(),
            "[Coverage] One of the input tables is empty, no analysis performed"
        );
        return vec![];
    }

    let (subject_parts, subject_stats) = prepare_shapes(subjects, subject_profile);
    let (object_parts, object_stats) = prepare_shapes(objects, object_profile);
    log_dropped("subject", &subject_stats);
    log_dropped("object", &object_stats);

    if subject_parts.is_empty() || object_parts.is_empty() {
        tracing::warn!(
            subjects = subject_parts.len(),
            objects = object_parts.len(),
            "[Coverage] No usable records left after preparation, no analysis performed"
        );
        return vec![];
    }

    // Parallel per-side matching, collected in TOP, BOTTOM order
    let per_layer: Vec<Vec<OverlapRecord>> = Layer::ALL
        .par_iter()
        .map(|&layer| {
            let layer_subjects = subject_parts.get(layer);
            let layer_objects = object_parts.get(layer);
            match strategy {
                MatchStrategy::Naive => match_layer_naive(layer_subjects, layer_objects),
                MatchStrategy::Indexed => match_layer_indexed(layer_subjects, layer_objects),
            }
        })
        .collect();

    let overlaps: Vec<OverlapRecord> = per_layer.into_iter().flatten().collect();

    tracing::info!(
        "[Coverage] {:?} check completed: {} subjects x {} objects, {} overlaps found in {:?}",
        strategy,
        subject_parts.len(),
        object_parts.len(),
        overlaps.len(),
        start.elapsed()
    );

    overlaps
}

/// Find test points whose outline overlaps a component pad on the same side
pub fn check_test_point_pad_overlaps(
    test_points: &[EntityRecord],
    pads: &[EntityRecord],
    config: &AnalysisConfig,
) -> Vec<OverlapRecord> {
    run_overlap_check(test_points, &config.test_point, pads, &config.pad, config.strategy)
}

/// Find test points covered by a component's placement bounds on the same side
pub fn check_test_point_component_coverage(
    test_points: &[EntityRecord],
    components: &[EntityRecord],
    config: &AnalysisConfig,
) -> Vec<OverlapRecord> {
    run_overlap_check(test_points, &config.test_point, components, &config.component, config.strategy)
}

fn log_dropped(role: &str, stats: &PrepareStats) {
    if stats.dropped() > 0 {
        tracing::warn!(
            "[Coverage] Dropped {} of {} {} records ({} undefined geometry, {} unmapped layer)",
            stats.dropped(),
            stats.total,
            role,
            stats.undefined_geometry,
            stats.unmapped_layer
        );
    }
}
