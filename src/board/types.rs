//! Normalized board record types
//!
//! Records arrive already filtered and renamed by whatever ingestion step
//! produced them; fields are resolved here once so matching never looks
//! anything up by column name.

use serde::{Deserialize, Serialize};

/// One row of a normalized entity table (test point, pad, component...)
///
/// Geometric fields are optional: a missing or non-finite value makes the
/// record's geometry undefined and keeps it out of matching. For line-type
/// shapes `width`/`height` hold the second endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_name: Option<String>,
    pub layer: String,
    #[serde(default)]
    pub shape_name: String,
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
}

impl EntityRecord {
    pub fn new(id: impl Into<String>, layer: impl Into<String>, shape_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            layer: layer.into(),
            shape_name: shape_name.into(),
            ..Default::default()
        }
    }

    /// Set center/position and extents (or second endpoint for lines)
    pub fn with_geometry(mut self, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_net(mut self, net_name: impl Into<String>) -> Self {
        self.net_name = Some(net_name.into());
        self
    }

    /// Rectangle-compatible record from `[min_x, min_y, max_x, max_y]`
    ///
    /// A missing bound leaves the dependent center/extent unset.
    pub fn from_bounds(
        id: impl Into<String>,
        layer: impl Into<String>,
        shape_name: impl Into<String>,
        bounds: [Option<f64>; 4],
    ) -> Self {
        let [min_x, min_y, max_x, max_y] = bounds;
        let axis = |lo: Option<f64>, hi: Option<f64>| match (lo, hi) {
            (Some(lo), Some(hi)) => (Some((lo + hi) / 2.0), Some(hi - lo)),
            _ => (None, None),
        };
        let (x, width) = axis(min_x, max_x);
        let (y, height) = axis(min_y, max_y);

        Self {
            id: id.into(),
            net_name: None,
            layer: layer.into(),
            shape_name: shape_name.into(),
            x,
            y,
            width,
            height,
        }
    }

    pub fn as_net_member(&self) -> NetMember {
        NetMember {
            id: self.id.clone(),
            net_name: self.net_name.clone(),
        }
    }
}

/// `(id, net_name)` pair taking part in net cross-reference joins
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetMember {
    pub id: String,
    #[serde(default)]
    pub net_name: Option<String>,
}

impl NetMember {
    pub fn new(id: impl Into<String>, net_name: Option<&str>) -> Self {
        Self {
            id: id.into(),
            net_name: net_name.map(str::to_string),
        }
    }

    /// Pin member with composite id `REFDES_PIN`
    pub fn pin(refdes: &str, pin_number: &str, net_name: Option<&str>) -> Self {
        Self::new(format!("{}_{}", refdes, pin_number), net_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bounds_center_and_extent() {
        let r = EntityRecord::from_bounds("U1", "PLACE_BOUND_TOP", "RECTANGLE", [Some(1.0), Some(2.0), Some(5.0), Some(4.0)]);
        assert_eq!(r.x, Some(3.0));
        assert_eq!(r.y, Some(3.0));
        assert_eq!(r.width, Some(4.0));
        assert_eq!(r.height, Some(2.0));
    }

    #[test]
    fn test_from_bounds_missing_axis() {
        let r = EntityRecord::from_bounds("U1", "PLACE_BOUND_TOP", "LINE", [Some(1.0), None, Some(5.0), Some(4.0)]);
        assert_eq!(r.x, Some(3.0));
        assert_eq!(r.y, None);
        assert_eq!(r.height, None);
    }

    #[test]
    fn test_pin_composite_id() {
        let m = NetMember::pin("J1", "3", Some("GND"));
        assert_eq!(m.id, "J1_3");
        assert_eq!(m.net_name.as_deref(), Some("GND"));
    }

    #[test]
    fn test_record_deserializes_with_missing_fields() {
        let r: EntityRecord = serde_json::from_str(r#"{"id":"TP1","layer":"SOLDERMASK_TOP","x":1.0}"#).unwrap();
        assert_eq!(r.id, "TP1");
        assert_eq!(r.x, Some(1.0));
        assert_eq!(r.width, None);
        assert!(r.shape_name.is_empty());
    }
}
