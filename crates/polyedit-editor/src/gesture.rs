//! Host gestures the editor reacts to.

use polyedit_core::Coordinate;
use serde::{Deserialize, Serialize};

/// A single input event from the map host.
///
/// Vertex and midpoint indices refer to the handles of the current
/// [`Overlay`](crate::overlay::Overlay). A midpoint drag continues with the
/// index the new vertex was inserted at, which is the midpoint index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "gesture", rename_all = "snake_case")]
pub enum Gesture {
    /// Tap on the map background.
    Tap { coordinate: Coordinate },
    /// Press on the polygon at `index` in the collection.
    PolygonPress { index: usize },
    /// Press on a vertex handle of the selected polygon.
    VertexPress { vertex: usize },
    /// A vertex handle started moving.
    VertexDragStart { vertex: usize },
    /// A vertex or inserted-midpoint handle moved.
    VertexDrag {
        vertex: usize,
        coordinate: Coordinate,
    },
    /// A vertex or inserted-midpoint handle was released.
    VertexDragEnd {
        vertex: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        coordinate: Option<Coordinate>,
    },
    /// A midpoint handle started moving.
    MidpointDragStart {
        midpoint: usize,
        coordinate: Coordinate,
    },
}

impl Gesture {
    /// Whether this gesture belongs to an ongoing drag.
    pub fn is_drag(&self) -> bool {
        matches!(
            self,
            Gesture::VertexDragStart { .. }
                | Gesture::VertexDrag { .. }
                | Gesture::VertexDragEnd { .. }
                | Gesture::MidpointDragStart { .. }
        )
    }
}
