//! Render model of the editor.
//!
//! The host draws the collection itself; the overlay describes what goes on
//! top of it: the selected polygon, its handles, the drag outline and the
//! creation draft.

use polyedit_core::geometry::{ring_midpoints, MidpointPolicy};
use polyedit_core::{Coordinate, Polygon};
use serde::Serialize;

/// A vertex marker of the selected polygon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VertexHandle {
    pub index: usize,
    pub coordinate: Coordinate,
    /// This vertex is the selected one.
    pub selected: bool,
    /// Unselected vertices can be dragged; the selected one is pressed again
    /// to remove it.
    pub draggable: bool,
    /// Show the remove badge.
    pub removable: bool,
}

/// A handle sitting on an edge of the selected polygon.
///
/// Dragging handle `index` inserts a vertex at `index`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MidpointHandle {
    pub index: usize,
    pub coordinate: Coordinate,
}

/// Everything the host draws on top of its own polygons.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Overlay {
    /// Working copy of the selected polygon.
    pub selected: Option<Polygon>,
    /// Outline of the polygon being dragged.
    pub drag_outline: Option<Polygon>,
    /// Polygon being created.
    pub creation_draft: Option<Polygon>,
    pub vertex_handles: Vec<VertexHandle>,
    pub midpoint_handles: Vec<MidpointHandle>,
}

impl Overlay {
    /// Build handles for `selected`.
    pub(crate) fn handles_for(
        selected: &Polygon,
        selected_vertex: Option<usize>,
        policy: MidpointPolicy,
    ) -> (Vec<VertexHandle>, Vec<MidpointHandle>) {
        let vertices = selected
            .coordinates
            .iter()
            .enumerate()
            .map(|(index, &coordinate)| {
                let is_selected = selected_vertex == Some(index);
                VertexHandle {
                    index,
                    coordinate,
                    selected: is_selected,
                    draggable: !is_selected,
                    removable: is_selected,
                }
            })
            .collect();

        let midpoints = ring_midpoints(&selected.coordinates, policy)
            .into_iter()
            .enumerate()
            .map(|(index, coordinate)| MidpointHandle { index, coordinate })
            .collect();

        (vertices, midpoints)
    }

    /// Whether there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.selected.is_none() && self.drag_outline.is_none() && self.creation_draft.is_none()
    }

    /// The handle of the selected vertex.
    pub fn selected_vertex(&self) -> Option<&VertexHandle> {
        self.vertex_handles.iter().find(|h| h.selected)
    }
}
