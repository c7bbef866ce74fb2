//! Polygon and vertex presses, programmatic selection and reset.

use polyedit_core::event_bus::EditorEvent;
use polyedit_core::geometry::remove_coordinate_from_polygon;
use polyedit_core::PolygonKey;

use super::PolygonEditor;

impl PolygonEditor {
    /// Handle a press on the polygon at `index`.
    ///
    /// Toggles: pressing the selected polygon unselects it, pressing another
    /// one selects it. Any creation in progress is abandoned.
    pub fn press_polygon(&mut self, index: usize) {
        if self.disabled {
            return;
        }
        self.settle_drag();

        let Some(pressed) = self.registry.get(index).cloned() else {
            tracing::warn!("Press on unknown polygon #{}", index);
            return;
        };
        self.creation.reset();

        if self.selection.is_selected(&pressed.key) {
            let polygon = self.selected_polygon.take().unwrap_or(pressed);
            self.clear_selection();
            self.publish(EditorEvent::Unselected { index, polygon });
        } else {
            self.select_key(pressed.key.clone());
            let polygon = self.selected_polygon.clone().unwrap_or(pressed);
            self.publish(EditorEvent::Selected { index, polygon });
        }
    }

    /// Handle a press on vertex handle `vertex` of the selected polygon.
    ///
    /// The first press selects the vertex, a second press removes it.
    pub fn press_vertex(&mut self, vertex: usize) {
        if self.disabled {
            return;
        }
        self.settle_drag();

        let Some(len) = self.selected_polygon.as_ref().map(|p| p.vertex_count()) else {
            tracing::debug!("Vertex press without a selected polygon");
            return;
        };
        if vertex >= len {
            tracing::warn!("Press on vertex {} of a {}-vertex polygon", vertex, len);
            return;
        }

        if self.selection.is_vertex_selected(vertex) {
            self.remove_vertex(vertex);
        } else {
            self.selection.select_vertex(vertex);
        }
    }

    /// Select the polygon with `key` without notifying.
    ///
    /// Works while disabled. An unknown key clears the selection.
    pub fn select_polygon_by_key(&mut self, key: &PolygonKey) {
        if !self.selection.is_selected(key) {
            self.select_key(key.clone());
        }
    }

    /// Select the polygon at `index` without notifying.
    ///
    /// Out-of-range indices are ignored.
    pub fn select_polygon_by_index(&mut self, index: usize) {
        if index >= self.registry.len() {
            tracing::warn!("No polygon at index {}", index);
            return;
        }
        if self.selection.select_by_index(index, &self.registry) {
            self.settle_new_selection();
        }
    }

    /// Drop creation, selection, drafts and pending drag work.
    pub fn reset_all(&mut self) {
        self.creation.reset();
        self.clear_selection();
        tracing::debug!("Editor reset");
    }

    /// Idle-tap selection of the polygon at `index`.
    pub(super) fn select_with_notification(&mut self, index: usize) {
        let Some(key) = self.registry.key_of_index(index).cloned() else {
            return;
        };
        self.select_key(key);
        if let Some(polygon) = self.selected_polygon.clone() {
            self.publish(EditorEvent::Selected { index, polygon });
        }
    }

    fn select_key(&mut self, key: PolygonKey) {
        self.selection.select(key);
        self.settle_new_selection();
    }

    /// Drop work tied to the previous selection and refresh the working copy.
    fn settle_new_selection(&mut self) {
        let key = self.selection.key();
        if self.pending_insert.as_ref().is_some_and(|p| Some(&p.key) != key) {
            self.pending_insert = None;
        }
        self.discard_drag();
        self.creation.reset();
        self.selected_polygon = None;
        self.reconcile();
    }

    fn remove_vertex(&mut self, vertex: usize) {
        let Some(selected) = &self.selected_polygon else {
            return;
        };
        let changed = remove_coordinate_from_polygon(selected, vertex);
        let key = changed.key.clone();
        self.selection.clear_vertex();

        if changed.vertex_count() < self.options.removal_floor {
            let index = self.registry.index_of_key(&key);
            self.clear_selection();
            match index {
                Some(index) => self.publish(EditorEvent::Removed { index }),
                None => tracing::debug!("Polygon {} not in collection, removal skipped", key),
            }
        } else {
            self.selected_polygon = Some(changed.clone());
            self.publish_indexed(&key, |index| EditorEvent::Changed {
                index,
                polygon: changed,
            });
        }
    }
}
