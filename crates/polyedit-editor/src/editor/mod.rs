//! Polygon editor state machine.
//!
//! Routes host gestures to creation, selection and vertex editing, keeps the
//! working copy of the selected polygon and publishes notifications on its
//! own [`EventBus`].
//!
//! The host owns the polygon collection. The editor only proposes changes
//! through notifications; the host applies them and hands the new collection
//! back with [`PolygonEditor::set_polygons`].

mod drag;
mod selection;
mod taps;

pub use drag::DragTask;

use std::sync::Arc;
use std::time::Duration;

use polyedit_core::event_bus::{EditorEvent, EventBus, EventBusConfig, EventBusError};
use polyedit_core::geometry::MidpointPolicy;
use polyedit_core::{Polygon, PolygonKey};
use polyedit_settings::{CreationTrigger, EditorConfig};
use serde::{Deserialize, Serialize};

use crate::clock::{Clock, SystemClock};
use crate::control::EditorControl;
use crate::creation::CreationMachine;
use crate::gesture::Gesture;
use crate::overlay::Overlay;
use crate::rate_limiter::{DragRateLimiter, DEFAULT_DRAG_WINDOW};
use crate::registry::PolygonRegistry;
use crate::selection::SelectionState;
use drag::DragSession;

/// Collection updates a created polygon may be missing from before the
/// editor treats it as rejected by the host.
pub const PENDING_INSERT_UPDATES: usize = 3;

/// Coarse editor state, derived from what is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorState {
    /// Nothing selected, nothing being created.
    Idle,
    /// Taps are accumulating into a new polygon.
    Creating,
    /// A polygon is selected.
    Selected,
    /// A vertex of the selected polygon is being dragged.
    DraggingVertex,
}

impl std::fmt::Display for EditorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditorState::Idle => write!(f, "Idle"),
            EditorState::Creating => write!(f, "Creating"),
            EditorState::Selected => write!(f, "Selected"),
            EditorState::DraggingVertex => write!(f, "DraggingVertex"),
        }
    }
}

/// Runtime options of a [`PolygonEditor`]
#[derive(Debug, Clone)]
pub struct EditorOptions {
    /// Drag rate-limit window
    pub drag_rate_limit: Duration,
    /// Taps needed to complete a new polygon
    pub creation_vertex_count: usize,
    /// A removal leaving fewer vertices than this deletes the polygon
    pub removal_floor: usize,
    /// Geometry of midpoint handles
    pub midpoint_policy: MidpointPolicy,
    /// How creation starts
    pub creation_trigger: CreationTrigger,
    /// Whether an idle tap inside a polygon selects it
    pub select_on_idle_tap: bool,
    /// Event bus settings
    pub event_bus: EventBusConfig,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            drag_rate_limit: DEFAULT_DRAG_WINDOW,
            creation_vertex_count: Polygon::MIN_VERTICES,
            removal_floor: 4,
            midpoint_policy: MidpointPolicy::default(),
            creation_trigger: CreationTrigger::default(),
            select_on_idle_tap: false,
            event_bus: EventBusConfig::default(),
        }
    }
}

impl From<&EditorConfig> for EditorOptions {
    fn from(config: &EditorConfig) -> Self {
        Self {
            drag_rate_limit: config.drag_rate_limit(),
            creation_vertex_count: config.creation_vertex_count,
            removal_floor: config.removal_floor,
            midpoint_policy: config.midpoint_policy,
            creation_trigger: config.creation_trigger,
            select_on_idle_tap: config.select_on_idle_tap,
            event_bus: EventBusConfig {
                enable_history: config.event_history.enabled,
                max_history_size: config.event_history.max_size,
            },
        }
    }
}

/// Interactive polygon editor
pub struct PolygonEditor {
    options: EditorOptions,
    registry: PolygonRegistry,
    template: Option<Polygon>,
    selection: SelectionState,
    creation: CreationMachine,
    /// Working copy of the selected polygon
    selected_polygon: Option<Polygon>,
    /// Created polygon the host has not inserted yet
    pending_insert: Option<Polygon>,
    pending_misses: usize,
    drag: Option<DragSession>,
    limiter: DragRateLimiter<DragTask>,
    clock: Arc<dyn Clock>,
    bus: EventBus,
    disabled: bool,
}

impl PolygonEditor {
    /// Editor with default options and the system clock.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Editor with explicit options.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            registry: PolygonRegistry::new(),
            template: None,
            selection: SelectionState::new(),
            creation: CreationMachine::new(options.creation_vertex_count),
            selected_polygon: None,
            pending_insert: None,
            pending_misses: 0,
            drag: None,
            limiter: DragRateLimiter::new(options.drag_rate_limit),
            clock: Arc::new(SystemClock),
            bus: EventBus::with_config(options.event_bus.clone()),
            disabled: false,
            options,
        }
    }

    /// Editor configured from settings.
    pub fn with_config(config: &EditorConfig) -> Self {
        Self::with_options(EditorOptions::from(config))
    }

    /// Use `clock` for drag rate limiting.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Active options.
    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    /// Notification bus of this editor.
    pub fn events(&self) -> &EventBus {
        &self.bus
    }

    /// Current collection as last supplied by the host.
    pub fn polygons(&self) -> &[Polygon] {
        self.registry.as_slice()
    }

    /// Registry view of the collection.
    pub fn registry(&self) -> &PolygonRegistry {
        &self.registry
    }

    /// Replace the collection and reconcile the selection against it.
    ///
    /// A created polygon still missing after [`PENDING_INSERT_UPDATES`]
    /// updates is dropped along with its selection.
    pub fn set_polygons(&mut self, polygons: Vec<Polygon>) {
        self.registry.replace(polygons);
        let inserted = self
            .pending_insert
            .as_ref()
            .map(|p| self.registry.contains_key(&p.key));
        match inserted {
            Some(true) => self.pending_insert = None,
            Some(false) => {
                self.pending_misses += 1;
                if self.pending_misses >= PENDING_INSERT_UPDATES {
                    if let Some(dropped) = self.pending_insert.take() {
                        tracing::warn!("Created polygon {} was never inserted", dropped.key);
                    }
                }
            }
            None => {}
        }
        self.reconcile();
    }

    /// Template for new polygons. Without one, creation is impossible.
    pub fn set_template(&mut self, template: Option<Polygon>) {
        self.template = template;
    }

    /// Template for new polygons.
    pub fn template(&self) -> Option<&Polygon> {
        self.template.as_ref()
    }

    /// Current state.
    pub fn state(&self) -> EditorState {
        if self.drag.is_some() {
            EditorState::DraggingVertex
        } else if self.creation.is_armed() {
            EditorState::Creating
        } else if self.selection.key().is_some() {
            EditorState::Selected
        } else {
            EditorState::Idle
        }
    }

    /// Whether gestures are ignored.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Disable or enable the editor. Disabling resets everything first.
    pub fn set_disabled(&mut self, disabled: bool) {
        if disabled && !self.disabled {
            self.reset_all();
        }
        if disabled != self.disabled {
            tracing::debug!("Editor {}", if disabled { "disabled" } else { "enabled" });
        }
        self.disabled = disabled;
    }

    /// Selection state.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Key of the selected polygon.
    pub fn selected_key(&self) -> Option<&PolygonKey> {
        self.selection.key()
    }

    /// Selected vertex index.
    pub fn selected_vertex(&self) -> Option<usize> {
        self.selection.vertex()
    }

    /// Working copy of the selected polygon.
    pub fn selected_polygon(&self) -> Option<&Polygon> {
        self.selected_polygon.as_ref()
    }

    /// Polygon being dragged.
    pub fn drag_draft(&self) -> Option<&Polygon> {
        self.drag.as_ref().map(|d| &d.draft)
    }

    /// Polygon being created.
    pub fn creation_draft(&self) -> Option<&Polygon> {
        self.creation.draft()
    }

    /// Whether rate-limited drag work is waiting.
    pub fn has_pending_work(&self) -> bool {
        self.limiter.is_pending()
    }

    /// Route one host gesture.
    pub fn handle(&mut self, gesture: Gesture) {
        tracing::trace!("Gesture {:?} in state {}", gesture, self.state());
        match gesture {
            Gesture::Tap { coordinate } => self.set_coordinate(coordinate),
            Gesture::PolygonPress { index } => self.press_polygon(index),
            Gesture::VertexPress { vertex } => self.press_vertex(vertex),
            Gesture::VertexDragStart { vertex } => self.begin_vertex_drag(vertex),
            Gesture::VertexDrag { vertex, coordinate } => self.drag_vertex(vertex, coordinate),
            Gesture::VertexDragEnd { vertex, coordinate } => {
                self.end_vertex_drag(vertex, coordinate)
            }
            Gesture::MidpointDragStart {
                midpoint,
                coordinate,
            } => self.begin_midpoint_drag(midpoint, coordinate),
        }
    }

    /// What the host should draw on top of the collection.
    pub fn overlay(&self) -> Overlay {
        let mut overlay = Overlay {
            selected: self.selected_polygon.clone(),
            drag_outline: self.drag_draft().cloned(),
            creation_draft: self.creation.draft().cloned(),
            ..Overlay::default()
        };

        if !self.disabled {
            if let Some(selected) = &self.selected_polygon {
                let (vertices, midpoints) = Overlay::handles_for(
                    selected,
                    self.selection.vertex(),
                    self.options.midpoint_policy,
                );
                overlay.vertex_handles = vertices;
                overlay.midpoint_handles = midpoints;
            }
        }
        overlay
    }

    /// Recompute the working copy from the selected key.
    fn reconcile(&mut self) {
        let Some(key) = self.selection.key().cloned() else {
            self.selected_polygon = None;
            self.discard_drag();
            return;
        };

        if let Some(polygon) = self.registry.by_key(&key) {
            self.selected_polygon = Some(polygon.clone());
        } else if self.pending_insert.as_ref().is_some_and(|p| p.key == key) {
            if self.selected_polygon.as_ref().map(|p| &p.key) != Some(&key) {
                self.selected_polygon = self.pending_insert.clone();
            }
        } else {
            tracing::debug!("Selected polygon {} is gone, clearing selection", key);
            self.clear_selection();
            return;
        }

        let len = self
            .selected_polygon
            .as_ref()
            .map_or(0, Polygon::vertex_count);
        if self.selection.vertex().is_some_and(|v| v >= len) {
            self.selection.clear_vertex();
        }
    }

    /// Clear selection, working copy and any drag in progress.
    fn clear_selection(&mut self) {
        self.selection.clear();
        self.selected_polygon = None;
        self.pending_insert = None;
        self.discard_drag();
    }

    fn publish(&self, event: EditorEvent) {
        tracing::debug!("{}", event.description());
        if let Err(EventBusError::NoSubscribers) = self.bus.publish(event) {
            tracing::trace!("No subscribers for editor event");
        }
    }

    /// Publish an event for `key` if it is in the collection.
    fn publish_indexed(&self, key: &PolygonKey, event: impl FnOnce(usize) -> EditorEvent) {
        match self.registry.index_of_key(key) {
            Some(index) => self.publish(event(index)),
            None => tracing::debug!("Polygon {} not in collection, notification skipped", key),
        }
    }
}

impl Default for PolygonEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PolygonEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolygonEditor")
            .field("state", &self.state())
            .field("disabled", &self.disabled)
            .field("polygons", &self.registry.len())
            .field("selection", &self.selection)
            .field("pending_work", &self.limiter.is_pending())
            .finish()
    }
}

impl EditorControl for PolygonEditor {
    fn set_coordinate(&mut self, coordinate: polyedit_core::Coordinate) {
        PolygonEditor::set_coordinate(self, coordinate)
    }

    fn start_polygon(&mut self) {
        PolygonEditor::start_polygon(self)
    }

    fn reset_all(&mut self) {
        PolygonEditor::reset_all(self)
    }

    fn select_polygon_by_key(&mut self, key: &PolygonKey) {
        PolygonEditor::select_polygon_by_key(self, key)
    }

    fn select_polygon_by_index(&mut self, index: usize) {
        PolygonEditor::select_polygon_by_index(self, index)
    }
}
