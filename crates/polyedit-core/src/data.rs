//! Data models for polygons on a map.
//!
//! Coordinates are signed floating-point degrees. A [`Polygon`] is an
//! implicitly closed ring of coordinates identified by a stable
//! [`PolygonKey`], plus style attributes the editor passes through untouched.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoordinateError;

/// A point on the map as (latitude, longitude) in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate without validation.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Create a coordinate, rejecting NaN and infinite components.
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if latitude.is_finite() && longitude.is_finite() {
            Ok(Self::new(latitude, longitude))
        } else {
            Err(CoordinateError::NonFinite {
                latitude,
                longitude,
            })
        }
    }

    /// Whether both components are finite.
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

/// Stable identity of a polygon across collection replacements.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolygonKey(String);

impl PolygonKey {
    /// Wrap a host-supplied key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Generate a fresh, globally unique key.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PolygonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PolygonKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for PolygonKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// Rendering hints carried by a polygon.
///
/// The editor never interprets these; unknown host attributes survive a
/// round trip through `extra`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PolygonStyle {
    /// Outline color, e.g. `"#ff0000"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<String>,
    /// Fill color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    /// Outline width in screen pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    /// Any other host attributes.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl PolygonStyle {
    /// Style with only a stroke color.
    pub fn stroked(color: impl Into<String>) -> Self {
        Self {
            stroke_color: Some(color.into()),
            ..Self::default()
        }
    }
}

/// A polygon ring with identity and style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    /// Stable identity.
    pub key: PolygonKey,
    /// Ring vertices in order; the ring closes implicitly.
    #[serde(default)]
    pub coordinates: Vec<Coordinate>,
    /// Pass-through rendering hints.
    #[serde(flatten)]
    pub style: PolygonStyle,
}

impl Polygon {
    /// Minimum vertex count of a closed shape.
    pub const MIN_VERTICES: usize = 3;

    /// Create an unstyled polygon.
    pub fn new(key: impl Into<PolygonKey>, coordinates: Vec<Coordinate>) -> Self {
        Self {
            key: key.into(),
            coordinates,
            style: PolygonStyle::default(),
        }
    }

    /// Builder-style style setter.
    pub fn with_style(mut self, style: PolygonStyle) -> Self {
        self.style = style;
        self
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.coordinates.len()
    }

    /// Whether the ring has enough vertices to be a closed shape.
    pub fn is_closed_shape(&self) -> bool {
        self.coordinates.len() >= Self::MIN_VERTICES
    }

    /// Vertex at `index`, if any.
    pub fn vertex(&self, index: usize) -> Option<Coordinate> {
        self.coordinates.get(index).copied()
    }
}
