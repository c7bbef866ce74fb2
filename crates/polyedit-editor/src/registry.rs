//! Read-only view of the host's polygon collection.

use polyedit_core::geometry::point_in_polygon;
use polyedit_core::{Coordinate, Polygon, PolygonKey};

/// The current ordered polygon collection, as last supplied by the host.
///
/// Replaced wholesale on every update; the editor never writes to it.
#[derive(Debug, Clone, Default)]
pub struct PolygonRegistry {
    polygons: Vec<Polygon>,
}

impl PolygonRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection.
    pub fn replace(&mut self, polygons: Vec<Polygon>) {
        self.polygons = polygons;
    }

    /// Position of the polygon with `key`.
    pub fn index_of_key(&self, key: &PolygonKey) -> Option<usize> {
        self.polygons.iter().position(|p| &p.key == key)
    }

    /// Key of the polygon at `index`.
    pub fn key_of_index(&self, index: usize) -> Option<&PolygonKey> {
        self.polygons.get(index).map(|p| &p.key)
    }

    /// Polygon with `key`.
    pub fn by_key(&self, key: &PolygonKey) -> Option<&Polygon> {
        self.polygons.iter().find(|p| &p.key == key)
    }

    /// Polygon at `index`.
    pub fn get(&self, index: usize) -> Option<&Polygon> {
        self.polygons.get(index)
    }

    /// Whether a polygon with `key` exists.
    pub fn contains_key(&self, key: &PolygonKey) -> bool {
        self.index_of_key(key).is_some()
    }

    /// Number of polygons.
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Iterate in collection order.
    pub fn iter(&self) -> impl Iterator<Item = &Polygon> {
        self.polygons.iter()
    }

    /// The polygons as a slice.
    pub fn as_slice(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Index of the first polygon whose ring contains `coordinate`.
    pub fn hit_test(&self, coordinate: Coordinate) -> Option<usize> {
        self.polygons
            .iter()
            .position(|p| point_in_polygon(coordinate, &p.coordinates))
    }
}
