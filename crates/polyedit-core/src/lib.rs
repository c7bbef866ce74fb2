//! # Polyedit Core
//!
//! Core types, geometry primitives and notifications for polyedit.
//! Provides the data model shared by the editor, the settings crate and the
//! hosts that embed them.

pub mod data;
pub mod error;
pub mod event_bus;
pub mod geometry;
pub mod listener;
pub mod types;

pub use data::{Coordinate, Polygon, PolygonKey, PolygonStyle};

pub use error::{CoordinateError, Error, Result};

pub use event_bus::{
    EditorEvent, EventBus, EventBusConfig, EventBusError, EventFilter, EventKind, SubscriptionId,
};

pub use geometry::{
    add_coordinate_to_polygon, create_rectangle, generate_random_markers,
    generate_random_markers_with, midpoint, move_coordinate_in_polygon, point_in_polygon,
    remove_coordinate_from_polygon, ring_midpoints, MidpointPolicy, RectangleCorners,
};

pub use listener::{EditorCallbacks, PolygonEditorListener};

pub use types::{
    thread_safe, thread_safe_vec, DataCallback, DataCallback2, ThreadSafe, ThreadSafeVec,
};
