//! Event type definitions for the event bus.
//!
//! One event per host notification. Indices always refer to the collection
//! as it was when the event was published.

use serde::{Deserialize, Serialize};

use crate::data::Polygon;

/// Notification emitted by the polygon editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EditorEvent {
    /// A polygon finished creation. The host should add it to its collection.
    Created {
        /// The new polygon.
        polygon: Polygon,
    },
    /// The polygon at `index` should be replaced.
    Changed {
        /// Position in the collection.
        index: usize,
        /// Replacement polygon.
        polygon: Polygon,
    },
    /// The polygon at `index` should be removed.
    Removed {
        /// Position in the collection.
        index: usize,
    },
    /// The polygon at `index` was selected by a user gesture.
    Selected {
        /// Position in the collection.
        index: usize,
        /// The selected polygon.
        polygon: Polygon,
    },
    /// The polygon at `index` was unselected by a user gesture.
    Unselected {
        /// Position in the collection.
        index: usize,
        /// The polygon as it was when unselected.
        polygon: Polygon,
    },
}

impl EditorEvent {
    /// Get the kind of this event
    pub fn kind(&self) -> EventKind {
        match self {
            EditorEvent::Created { .. } => EventKind::Created,
            EditorEvent::Changed { .. } => EventKind::Changed,
            EditorEvent::Removed { .. } => EventKind::Removed,
            EditorEvent::Selected { .. } => EventKind::Selected,
            EditorEvent::Unselected { .. } => EventKind::Unselected,
        }
    }

    /// Collection index the event refers to, if any.
    pub fn index(&self) -> Option<usize> {
        match self {
            EditorEvent::Created { .. } => None,
            EditorEvent::Changed { index, .. }
            | EditorEvent::Removed { index }
            | EditorEvent::Selected { index, .. }
            | EditorEvent::Unselected { index, .. } => Some(*index),
        }
    }

    /// Polygon carried by the event, if any.
    pub fn polygon(&self) -> Option<&Polygon> {
        match self {
            EditorEvent::Created { polygon }
            | EditorEvent::Changed { polygon, .. }
            | EditorEvent::Selected { polygon, .. }
            | EditorEvent::Unselected { polygon, .. } => Some(polygon),
            EditorEvent::Removed { .. } => None,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            EditorEvent::Created { polygon } => format!(
                "Created polygon {} with {} vertices",
                polygon.key,
                polygon.vertex_count()
            ),
            EditorEvent::Changed { index, polygon } => format!(
                "Changed polygon #{} ({} vertices)",
                index,
                polygon.vertex_count()
            ),
            EditorEvent::Removed { index } => format!("Removed polygon #{}", index),
            EditorEvent::Selected { index, polygon } => {
                format!("Selected polygon #{} ({})", index, polygon.key)
            }
            EditorEvent::Unselected { index, polygon } => {
                format!("Unselected polygon #{} ({})", index, polygon.key)
            }
        }
    }
}

/// Event kind for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Polygon creation.
    Created,
    /// Polygon replacement.
    Changed,
    /// Polygon removal.
    Removed,
    /// Gesture-driven selection.
    Selected,
    /// Gesture-driven unselection.
    Unselected,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventKind::Created => write!(f, "Created"),
            EventKind::Changed => write!(f, "Changed"),
            EventKind::Removed => write!(f, "Removed"),
            EventKind::Selected => write!(f, "Selected"),
            EventKind::Unselected => write!(f, "Unselected"),
        }
    }
}
