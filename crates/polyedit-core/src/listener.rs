//! Polygon editor listener interface
//!
//! Defines the listener trait for editor notifications and a closure-based
//! implementation for hosts that only care about a few of them.

use crate::data::Polygon;
use crate::event_bus::EditorEvent;
use crate::types::{DataCallback, DataCallback2};

/// Listener trait for polygon editor notifications
///
/// Implement this trait to receive the host callbacks. Every method has a
/// no-op default.
pub trait PolygonEditorListener: Send + Sync {
    /// Called when a polygon finished creation
    fn on_polygon_create(&self, _polygon: &Polygon) {}

    /// Called when the polygon at `index` changed
    fn on_polygon_change(&self, _index: usize, _polygon: &Polygon) {}

    /// Called when the polygon at `index` should be removed
    fn on_polygon_remove(&self, _index: usize) {}

    /// Called when the polygon at `index` was selected
    fn on_polygon_select(&self, _index: usize, _polygon: &Polygon) {}

    /// Called when the polygon at `index` was unselected
    fn on_polygon_unselect(&self, _index: usize, _polygon: &Polygon) {}
}

/// Route an event to the matching listener method.
pub fn dispatch_to_listener(listener: &dyn PolygonEditorListener, event: &EditorEvent) {
    match event {
        EditorEvent::Created { polygon } => listener.on_polygon_create(polygon),
        EditorEvent::Changed { index, polygon } => listener.on_polygon_change(*index, polygon),
        EditorEvent::Removed { index } => listener.on_polygon_remove(*index),
        EditorEvent::Selected { index, polygon } => listener.on_polygon_select(*index, polygon),
        EditorEvent::Unselected { index, polygon } => {
            listener.on_polygon_unselect(*index, polygon)
        }
    }
}

/// Optional closures for each notification.
///
/// # Example
///
/// ```
/// use polyedit_core::listener::EditorCallbacks;
///
/// let callbacks = EditorCallbacks::new()
///     .on_remove(|index| println!("remove #{index}"));
/// ```
#[derive(Default)]
pub struct EditorCallbacks {
    on_create: Option<DataCallback<Polygon>>,
    on_change: Option<DataCallback2<usize, Polygon>>,
    on_remove: Option<DataCallback<usize>>,
    on_select: Option<DataCallback2<usize, Polygon>>,
    on_unselect: Option<DataCallback2<usize, Polygon>>,
}

impl EditorCallbacks {
    /// Empty callback set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the creation callback.
    pub fn on_create(mut self, f: impl Fn(Polygon) + Send + Sync + 'static) -> Self {
        self.on_create = Some(Box::new(f));
        self
    }

    /// Set the change callback.
    pub fn on_change(mut self, f: impl Fn(usize, Polygon) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Set the removal callback.
    pub fn on_remove(mut self, f: impl Fn(usize) + Send + Sync + 'static) -> Self {
        self.on_remove = Some(Box::new(f));
        self
    }

    /// Set the selection callback.
    pub fn on_select(mut self, f: impl Fn(usize, Polygon) + Send + Sync + 'static) -> Self {
        self.on_select = Some(Box::new(f));
        self
    }

    /// Set the unselection callback.
    pub fn on_unselect(mut self, f: impl Fn(usize, Polygon) + Send + Sync + 'static) -> Self {
        self.on_unselect = Some(Box::new(f));
        self
    }

    /// Whether a removal callback is installed.
    ///
    /// Hosts use this to decide whether to render the vertex remover badge.
    pub fn handles_remove(&self) -> bool {
        self.on_remove.is_some()
    }
}

impl std::fmt::Debug for EditorCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorCallbacks")
            .field("on_create", &self.on_create.is_some())
            .field("on_change", &self.on_change.is_some())
            .field("on_remove", &self.on_remove.is_some())
            .field("on_select", &self.on_select.is_some())
            .field("on_unselect", &self.on_unselect.is_some())
            .finish()
    }
}

impl PolygonEditorListener for EditorCallbacks {
    fn on_polygon_create(&self, polygon: &Polygon) {
        if let Some(f) = &self.on_create {
            f(polygon.clone());
        }
    }

    fn on_polygon_change(&self, index: usize, polygon: &Polygon) {
        if let Some(f) = &self.on_change {
            f(index, polygon.clone());
        }
    }

    fn on_polygon_remove(&self, index: usize) {
        if let Some(f) = &self.on_remove {
            f(index);
        }
    }

    fn on_polygon_select(&self, index: usize, polygon: &Polygon) {
        if let Some(f) = &self.on_select {
            f(index, polygon.clone());
        }
    }

    fn on_polygon_unselect(&self, index: usize, polygon: &Polygon) {
        if let Some(f) = &self.on_unselect {
            f(index, polygon.clone());
        }
    }
}
