//! Vertex and midpoint dragging.
//!
//! Drag moves and the final commit go through the rate limiter as
//! [`DragTask`] values and are applied against the editor state at the time
//! they fire. A task that fires after the drag was discarded, or that was
//! scheduled before the current drag started, does nothing.

use polyedit_core::event_bus::EditorEvent;
use polyedit_core::geometry::{add_coordinate_to_polygon, move_coordinate_in_polygon};
use polyedit_core::{Coordinate, Polygon};

use super::PolygonEditor;
use crate::rate_limiter::Fired;

/// Deferred drag work.
#[derive(Debug, Clone, PartialEq)]
pub enum DragTask {
    /// Move a vertex of the drag draft.
    Move { vertex: usize, coordinate: Coordinate },
    /// Move a vertex of the drag draft, then make the draft the selected
    /// polygon and notify the change.
    Commit { vertex: usize, coordinate: Coordinate },
}

/// A drag in progress.
#[derive(Debug, Clone)]
pub(crate) struct DragSession {
    /// Copy of the selected polygon being reshaped.
    pub(crate) draft: Polygon,
    /// Last coordinate reported by a drag move.
    pub(crate) last_move: Option<Coordinate>,
    /// Limiter generation when the drag started; older tasks are stale.
    pub(crate) since: u64,
}

impl PolygonEditor {
    /// Start dragging vertex `vertex` of the selected polygon.
    pub fn begin_vertex_drag(&mut self, vertex: usize) {
        if self.disabled {
            return;
        }
        self.settle_drag();

        let Some(selected) = &self.selected_polygon else {
            tracing::debug!("Vertex drag without a selected polygon");
            return;
        };
        if vertex >= selected.vertex_count() {
            tracing::warn!(
                "Drag of vertex {} of a {}-vertex polygon",
                vertex,
                selected.vertex_count()
            );
            return;
        }

        tracing::debug!("Dragging vertex {} of {}", vertex, selected.key);
        self.drag = Some(DragSession {
            draft: selected.clone(),
            last_move: None,
            since: self.limiter.generation(),
        });
    }

    /// Start dragging midpoint handle `midpoint`, inserting a vertex there.
    pub fn begin_midpoint_drag(&mut self, midpoint: usize, coordinate: Coordinate) {
        if self.disabled {
            return;
        }
        self.settle_drag();

        let Some(selected) = &self.selected_polygon else {
            tracing::debug!("Midpoint drag without a selected polygon");
            return;
        };
        if midpoint >= selected.vertex_count() {
            tracing::warn!(
                "Drag of midpoint {} of a {}-vertex polygon",
                midpoint,
                selected.vertex_count()
            );
            return;
        }

        tracing::debug!("Inserting vertex {} into {}", midpoint, selected.key);
        self.drag = Some(DragSession {
            draft: add_coordinate_to_polygon(selected, coordinate, Some(midpoint)),
            last_move: Some(coordinate),
            since: self.limiter.generation(),
        });
    }

    /// Drag move of vertex `vertex`, rate limited.
    pub fn drag_vertex(&mut self, vertex: usize, coordinate: Coordinate) {
        if self.disabled {
            return;
        }
        let Some(session) = self.drag.as_mut() else {
            tracing::debug!("Drag move without drag start ignored");
            return;
        };
        session.last_move = Some(coordinate);
        tracing::trace!("Vertex {} dragged to {}", vertex, coordinate);
        self.schedule(DragTask::Move { vertex, coordinate });
    }

    /// Drag end of vertex `vertex`.
    ///
    /// Commits `coordinate`, or the last reported move when the host gives
    /// none, once the rate-limit window has passed.
    pub fn end_vertex_drag(&mut self, vertex: usize, coordinate: Option<Coordinate>) {
        if self.disabled {
            return;
        }
        let Some(session) = &self.drag else {
            tracing::debug!("Drag end without drag start ignored");
            return;
        };
        let coordinate = coordinate
            .or(session.last_move)
            .or_else(|| session.draft.vertex(vertex));

        match coordinate {
            Some(coordinate) => self.schedule(DragTask::Commit { vertex, coordinate }),
            None => {
                tracing::warn!("Drag end on unknown vertex {}", vertex);
                self.discard_drag();
            }
        }
    }

    /// Apply rate-limited work whose window has passed.
    ///
    /// Returns true if a task ran.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        match self.limiter.poll(now) {
            Some(fired) => {
                self.apply_drag_task(fired);
                true
            }
            None => false,
        }
    }

    /// Apply pending rate-limited work immediately.
    ///
    /// Returns true if a task ran.
    pub fn flush(&mut self) -> bool {
        match self.limiter.flush() {
            Some(fired) => {
                self.apply_drag_task(fired);
                true
            }
            None => false,
        }
    }

    fn schedule(&mut self, task: DragTask) {
        let now = self.clock.now();
        if let Some(replaced) = self.limiter.schedule(task, now) {
            tracing::trace!("Coalesced {:?}", replaced);
        }
        self.tick();
    }

    /// Finish pending drag work and drop an unfinished drag.
    pub(super) fn settle_drag(&mut self) {
        self.flush();
        if self.drag.take().is_some() {
            tracing::debug!("Unfinished drag abandoned");
        }
    }

    /// Drop the drag and its pending work without applying it.
    pub(super) fn discard_drag(&mut self) {
        self.drag = None;
        if let Some(task) = self.limiter.cancel() {
            tracing::trace!("Cancelled {:?}", task);
        }
    }

    fn apply_drag_task(&mut self, fired: Fired<DragTask>) {
        let Fired { generation, task } = fired;
        let Some(session) = self.drag.as_mut() else {
            tracing::debug!("{:?} ignored, no drag in progress", task);
            return;
        };
        if generation <= session.since {
            tracing::debug!("Stale {:?} from an earlier drag ignored", task);
            return;
        }

        match task {
            DragTask::Move { vertex, coordinate } => {
                session.draft = move_coordinate_in_polygon(&session.draft, vertex, coordinate);
            }
            DragTask::Commit { vertex, coordinate } => {
                let committed = move_coordinate_in_polygon(&session.draft, vertex, coordinate);
                self.drag = None;

                if !self.selection.is_selected(&committed.key) {
                    tracing::debug!("Drag of {} no longer selected, dropped", committed.key);
                    return;
                }

                let key = committed.key.clone();
                self.selected_polygon = Some(committed.clone());
                self.publish_indexed(&key, |index| EditorEvent::Changed {
                    index,
                    polygon: committed,
                });
            }
        }
    }
}
