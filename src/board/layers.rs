//! Logical board sides and per-table layer normalization

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoverageError, Result};

/// Physical board side
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Layer {
    Top,
    Bottom,
}

impl Layer {
    pub const ALL: [Layer; 2] = [Layer::Top, Layer::Bottom];

    pub fn as_str(&self) -> &'static str {
        match self {
            Layer::Top => "TOP",
            Layer::Bottom => "BOTTOM",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw layer tag to logical side, declared per source table
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerMap(IndexMap<String, Layer>);

impl LayerMap {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Layer)>,
        S: Into<String>,
    {
        Self(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Test point tables: soldermask openings
    pub fn soldermask() -> Self {
        Self::new([("SOLDERMASK_TOP", Layer::Top), ("SOLDERMASK_BOTTOM", Layer::Bottom)])
    }

    /// Pad tables: etch sides
    pub fn etch() -> Self {
        Self::new([("TOP", Layer::Top), ("BOTTOM", Layer::Bottom)])
    }

    /// Component tables: placement bounds
    pub fn place_bound() -> Self {
        Self::new([("PLACE_BOUND_TOP", Layer::Top), ("PLACE_BOUND_BOTTOM", Layer::Bottom)])
    }

    pub fn lookup(&self, raw: &str) -> Option<Layer> {
        self.0.get(raw.trim()).copied()
    }

    /// Normalize a record's raw layer, failing with `UnmappedLayer`
    pub fn normalize(&self, id: &str, raw: &str) -> Result<Layer> {
        self.lookup(raw).ok_or_else(|| CoverageError::UnmappedLayer {
            id: id.to_string(),
            layer: raw.to_string(),
        })
    }
}

/// Items split by logical side
#[derive(Clone, Debug)]
pub struct LayerPartition<T> {
    pub top: Vec<T>,
    pub bottom: Vec<T>,
}

impl<T> Default for LayerPartition<T> {
    fn default() -> Self {
        Self { top: Vec::new(), bottom: Vec::new() }
    }
}

impl<T> LayerPartition<T> {
    pub fn push(&mut self, layer: Layer, item: T) {
        match layer {
            Layer::Top => self.top.push(item),
            Layer::Bottom => self.bottom.push(item),
        }
    }

    pub fn get(&self, layer: Layer) -> &[T] {
        match layer {
            Layer::Top => &self.top,
            Layer::Bottom => &self.bottom,
        }
    }

    pub fn len(&self) -> usize {
        self.top.len() + self.bottom.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Split items by the side their raw layer maps to
///
/// Items whose layer is not in `map` are dropped; the count of dropped items
/// is returned alongside the partition.
pub fn partition_by_layer<T, F>(items: impl IntoIterator<Item = T>, map: &LayerMap, raw_layer: F) -> (LayerPartition<T>, usize)
where
    F: Fn(&T) -> (&str, &str),
{
    let mut partition = LayerPartition::default();
    let mut dropped = 0usize;

    for item in items {
        let normalized = {
            let (id, raw) = raw_layer(&item);
            map.normalize(id, raw)
        };
        match normalized {
            Ok(layer) => partition.push(layer, item),
            Err(e) => {
                tracing::debug!("{}", e);
                dropped += 1;
            }
        }
    }

    (partition, dropped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_maps() {
        assert_eq!(LayerMap::soldermask().lookup("SOLDERMASK_TOP"), Some(Layer::Top));
        assert_eq!(LayerMap::soldermask().lookup("TOP"), None);
        assert_eq!(LayerMap::etch().lookup("BOTTOM"), Some(Layer::Bottom));
        assert_eq!(LayerMap::place_bound().lookup(" PLACE_BOUND_BOTTOM "), Some(Layer::Bottom));
    }

    #[test]
    fn test_normalize_unmapped() {
        let err = LayerMap::etch().normalize("J1_1", "INNER2").unwrap_err();
        assert!(matches!(err, CoverageError::UnmappedLayer { .. }));
    }

    #[test]
    fn test_partition_drops_unmapped() {
        let items = vec![("a", "TOP"), ("b", "BOTTOM"), ("c", "SILK"), ("d", "TOP")];
        let (p, dropped) = partition_by_layer(items, &LayerMap::etch(), |(id, layer)| (*id, *layer));
        assert_eq!(p.top.iter().map(|(id, _)| *id).collect::<Vec<_>>(), vec!["a", "d"]);
        assert_eq!(p.bottom.len(), 1);
        assert_eq!(dropped, 1);
    }

    #[test]
    fn test_layer_map_from_json() {
        let map: LayerMap = serde_json::from_str(r#"{"SMT":"TOP","SMB":"BOTTOM"}"#).unwrap();
        assert_eq!(map.lookup("SMB"), Some(Layer::Bottom));
    }
}
