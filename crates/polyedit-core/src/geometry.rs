//! Geometry primitives on latitude/longitude rings.
//!
//! Everything here is a pure function. Malformed input degrades to a benign
//! result (`false`, an empty list, an unchanged copy) instead of failing.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::data::{Coordinate, Polygon};

/// Earth radius used by the rectangle helper, in meters.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

const EPSILON: f64 = 1e-12;

/// How the midpoint between two coordinates is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MidpointPolicy {
    /// Great-circle midpoint on a spherical earth.
    #[default]
    Geodesic,
    /// Arithmetic mean of latitude and longitude.
    Planar,
}

impl std::fmt::Display for MidpointPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Geodesic => write!(f, "geodesic"),
            Self::Planar => write!(f, "planar"),
        }
    }
}

/// Test whether `point` lies inside the closed ring.
///
/// Uses an even-odd ray cast in the (longitude, latitude) plane. Points on an
/// edge or a vertex count as inside. Rings with fewer than three vertices
/// contain nothing.
pub fn point_in_polygon(point: Coordinate, ring: &[Coordinate]) -> bool {
    if ring.len() < Polygon::MIN_VERTICES {
        return false;
    }

    let x = point.longitude;
    let y = point.latitude;
    let mut inside = false;
    let mut j = ring.len() - 1;

    for i in 0..ring.len() {
        let (xi, yi) = (ring[i].longitude, ring[i].latitude);
        let (xj, yj) = (ring[j].longitude, ring[j].latitude);

        if on_segment(x, y, xi, yi, xj, yj) {
            return true;
        }

        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }

    inside
}

fn on_segment(x: f64, y: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> bool {
    let cross = (x - x1) * (y2 - y1) - (y - y1) * (x2 - x1);
    if cross.abs() > EPSILON {
        return false;
    }
    x >= x1.min(x2) - EPSILON
        && x <= x1.max(x2) + EPSILON
        && y >= y1.min(y2) - EPSILON
        && y <= y1.max(y2) + EPSILON
}

/// Midpoint of two coordinates. Symmetric in its arguments for both policies.
pub fn midpoint(a: Coordinate, b: Coordinate, policy: MidpointPolicy) -> Coordinate {
    match policy {
        MidpointPolicy::Planar => planar_midpoint(a, b),
        MidpointPolicy::Geodesic => geodesic_midpoint(a, b),
    }
}

fn planar_midpoint(a: Coordinate, b: Coordinate) -> Coordinate {
    Coordinate::new(
        (a.latitude + b.latitude) / 2.0,
        (a.longitude + b.longitude) / 2.0,
    )
}

fn geodesic_midpoint(a: Coordinate, b: Coordinate) -> Coordinate {
    let [ax, ay, az] = unit_vector(a);
    let [bx, by, bz] = unit_vector(b);
    let (x, y, z) = (ax + bx, ay + by, az + bz);

    // Antipodal points have no unique great circle between them.
    let horizontal = x.hypot(y);
    if horizontal.hypot(z) < EPSILON {
        return planar_midpoint(a, b);
    }

    Coordinate::new(z.atan2(horizontal).to_degrees(), y.atan2(x).to_degrees())
}

fn unit_vector(c: Coordinate) -> [f64; 3] {
    let lat = c.latitude.to_radians();
    let lon = c.longitude.to_radians();
    [lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin()]
}

/// Midpoints of every ring edge, including the closing edge.
///
/// For a ring of `N >= 2` vertices the result has exactly `N` entries:
/// `out[0]` sits between the last and the first vertex and `out[i]` between
/// vertices `i - 1` and `i`. Inserting a vertex at index `i` therefore places
/// it where midpoint handle `i` was drawn.
pub fn ring_midpoints(ring: &[Coordinate], policy: MidpointPolicy) -> Vec<Coordinate> {
    let n = ring.len();
    if n < 2 {
        return Vec::new();
    }

    let mut midpoints = Vec::with_capacity(n);
    midpoints.push(midpoint(ring[0], ring[n - 1], policy));
    midpoints.extend(ring.windows(2).map(|edge| midpoint(edge[0], edge[1], policy)));
    midpoints
}

/// Return a copy of `polygon` with `coordinate` inserted.
///
/// Without an index the coordinate is appended. With an index it is inserted
/// at that position (clamped to the ring length), shifting later vertices.
pub fn add_coordinate_to_polygon(
    polygon: &Polygon,
    coordinate: Coordinate,
    index: Option<usize>,
) -> Polygon {
    let mut changed = polygon.clone();
    let at = index
        .unwrap_or(changed.coordinates.len())
        .min(changed.coordinates.len());
    changed.coordinates.insert(at, coordinate);
    changed
}

/// Return a copy of `polygon` without the vertex at `index`.
pub fn remove_coordinate_from_polygon(polygon: &Polygon, index: usize) -> Polygon {
    let mut changed = polygon.clone();
    if index < changed.coordinates.len() {
        changed.coordinates.remove(index);
    }
    changed
}

/// Return a copy of `polygon` with vertex `index` moved to `coordinate`.
pub fn move_coordinate_in_polygon(
    polygon: &Polygon,
    index: usize,
    coordinate: Coordinate,
) -> Polygon {
    let mut changed = polygon.clone();
    if let Some(vertex) = changed.coordinates.get_mut(index) {
        *vertex = coordinate;
    }
    changed
}

/// The four axis points of a rectangle centered on a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectangleCorners {
    /// Center shifted north by the length.
    pub north: Coordinate,
    /// Center shifted east by the width.
    pub east: Coordinate,
    /// Center shifted south by the length.
    pub south: Coordinate,
    /// Center shifted west by the width.
    pub west: Coordinate,
}

impl RectangleCorners {
    /// Corners as a ring in north, east, south, west order.
    pub fn to_ring(&self) -> Vec<Coordinate> {
        vec![self.north, self.east, self.south, self.west]
    }
}

/// Offset `center` by `length_km` north/south and `width_km` east/west.
pub fn create_rectangle(center: Coordinate, length_km: f64, width_km: f64) -> RectangleCorners {
    let length_m = length_km * 1000.0;
    let width_m = width_km * 1000.0;

    let offset_north = (length_m / EARTH_RADIUS_M).to_degrees();
    let offset_east =
        (width_m / (EARTH_RADIUS_M * center.latitude.to_radians().cos())).to_degrees();

    RectangleCorners {
        north: Coordinate::new(center.latitude + offset_north, center.longitude),
        east: Coordinate::new(center.latitude, center.longitude + offset_east),
        south: Coordinate::new(center.latitude - offset_north, center.longitude),
        west: Coordinate::new(center.latitude, center.longitude - offset_east),
    }
}

/// Scatter `count` markers within `radius` degrees of `center`.
pub fn generate_random_markers(center: Coordinate, radius: f64, count: usize) -> Vec<Coordinate> {
    generate_random_markers_with(&mut rand::rng(), center, radius, count)
}

/// Same as [`generate_random_markers`] with a caller-supplied generator.
pub fn generate_random_markers_with<R: Rng + ?Sized>(
    rng: &mut R,
    center: Coordinate,
    radius: f64,
    count: usize,
) -> Vec<Coordinate> {
    (0..count)
        .map(|_| {
            let angle = rng.random::<f64>() * std::f64::consts::TAU;
            let distance = rng.random::<f64>() * radius;
            Coordinate::new(
                center.latitude + distance * angle.cos(),
                center.longitude + distance * angle.sin(),
            )
        })
        .collect()
}
