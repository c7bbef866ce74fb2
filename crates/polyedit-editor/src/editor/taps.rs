//! Map taps: creation and vertex appending.

use polyedit_core::event_bus::EditorEvent;
use polyedit_core::geometry::{add_coordinate_to_polygon, point_in_polygon};
use polyedit_core::{Coordinate, Polygon, PolygonKey};
use polyedit_settings::CreationTrigger;

use super::PolygonEditor;
use crate::creation::CreationStep;

impl PolygonEditor {
    /// Handle a tap on the map background.
    ///
    /// With a polygon selected, a tap inside it does nothing, a tap outside
    /// appends a vertex, or unselects when a vertex is selected. Otherwise
    /// the tap feeds polygon creation.
    pub fn set_coordinate(&mut self, coordinate: Coordinate) {
        if self.disabled {
            tracing::trace!("Tap ignored while disabled");
            return;
        }
        self.settle_drag();

        let inside_selected = self
            .selected_polygon
            .as_ref()
            .map(|selected| point_in_polygon(coordinate, &selected.coordinates));

        if let Some(inside) = inside_selected {
            if inside {
                tracing::debug!("Tap inside selected polygon ignored");
            } else if self.selection.vertex().is_none() {
                self.append_vertex(coordinate);
            } else {
                self.unselect_with_notification();
            }
            return;
        }

        if self.creation.is_armed() {
            self.feed_creation(coordinate);
            return;
        }

        if self.options.select_on_idle_tap {
            if let Some(index) = self.registry.hit_test(coordinate) {
                self.select_with_notification(index);
                return;
            }
        }

        if self.options.creation_trigger == CreationTrigger::Tap && self.template.is_some() {
            self.creation.start();
            self.feed_creation(coordinate);
        } else {
            tracing::debug!("Tap at {} ignored, creation not started", coordinate);
        }
    }

    /// Clear the selection and arm creation of a new polygon.
    pub fn start_polygon(&mut self) {
        self.clear_selection();
        self.creation.start();
        tracing::debug!("Polygon creation started");
    }

    fn feed_creation(&mut self, coordinate: Coordinate) {
        match self.creation.push(coordinate, self.template.as_ref()) {
            CreationStep::Ignored => tracing::debug!("No template, tap ignored"),
            CreationStep::Accumulating(count) => tracing::debug!(
                "Creation draft has {} of {} vertices",
                count,
                self.creation.vertex_count()
            ),
            CreationStep::Completed(polygon) => self.finish_creation(polygon),
        }
    }

    fn finish_creation(&mut self, mut polygon: Polygon) {
        let taken = polygon.key.as_str().is_empty()
            || self.registry.contains_key(&polygon.key)
            || self
                .pending_insert
                .as_ref()
                .is_some_and(|p| p.key == polygon.key);
        if taken {
            polygon.key = PolygonKey::generate();
        }

        self.selection.select(polygon.key.clone());
        self.selected_polygon = Some(polygon.clone());
        self.pending_insert = Some(polygon.clone());
        self.pending_misses = 0;
        self.publish(EditorEvent::Created { polygon });
    }

    fn append_vertex(&mut self, coordinate: Coordinate) {
        let Some(selected) = &self.selected_polygon else {
            return;
        };
        let changed = add_coordinate_to_polygon(selected, coordinate, None);
        let key = changed.key.clone();
        self.selected_polygon = Some(changed.clone());
        self.publish_indexed(&key, |index| EditorEvent::Changed {
            index,
            polygon: changed,
        });
    }

    fn unselect_with_notification(&mut self) {
        if let Some(polygon) = self.selected_polygon.take() {
            let key = polygon.key.clone();
            self.publish_indexed(&key, |index| EditorEvent::Unselected { index, polygon });
        }
        self.clear_selection();
    }
}
