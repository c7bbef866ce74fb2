use crate::registry::PolygonRegistry;
use polyedit_core::PolygonKey;

/// Tracks which polygon and which of its vertices are selected.
///
/// `SelectionState` is responsible for:
/// - Remembering the key of the selected polygon, if any
/// - Remembering the selected vertex index of that polygon, if any
/// - Resolving index-based selection through the [`PolygonRegistry`]
///
/// # Selection Model
///
/// - **Polygon Selection**: at most one polygon, identified by its stable key
/// - **Vertex Selection**: at most one vertex index, meaningful only while a
///   polygon is selected
/// - Changing the selected key always clears the vertex selection
///
/// # Design
///
/// The state holds keys, never polygons. Whether the key still exists in the
/// collection is decided by the editor when it reconciles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Key of the selected polygon
    key: Option<PolygonKey>,
    /// Selected vertex of that polygon
    vertex: Option<usize>,
}

impl SelectionState {
    /// Creates a new `SelectionState` with nothing selected.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyedit_editor::selection::SelectionState;
    ///
    /// let selection = SelectionState::new();
    /// assert!(selection.key().is_none());
    /// assert!(selection.vertex().is_none());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the selected polygon key.
    pub fn key(&self) -> Option<&PolygonKey> {
        self.key.as_ref()
    }

    /// Returns the selected vertex index.
    pub fn vertex(&self) -> Option<usize> {
        self.vertex
    }

    /// Whether `key` is the selected polygon.
    pub fn is_selected(&self, key: &PolygonKey) -> bool {
        self.key.as_ref() == Some(key)
    }

    /// Selects the polygon with `key`.
    ///
    /// # Returns
    ///
    /// `true` if the selection changed. Re-selecting the current key keeps the
    /// vertex selection.
    pub fn select(&mut self, key: PolygonKey) -> bool {
        if self.is_selected(&key) {
            return false;
        }
        self.key = Some(key);
        self.vertex = None;
        true
    }

    /// Selects the polygon at `index` in `registry`.
    ///
    /// # Returns
    ///
    /// `true` if the selection changed. Out-of-range indices leave the
    /// selection untouched.
    pub fn select_by_index(&mut self, index: usize, registry: &PolygonRegistry) -> bool {
        match registry.key_of_index(index) {
            Some(key) => self.select(key.clone()),
            None => false,
        }
    }

    /// Clears both the polygon and the vertex selection.
    pub fn clear(&mut self) {
        self.key = None;
        self.vertex = None;
    }

    /// Selects vertex `index` of the selected polygon.
    ///
    /// Ignored while no polygon is selected.
    pub fn select_vertex(&mut self, index: usize) {
        if self.key.is_some() {
            self.vertex = Some(index);
        }
    }

    /// Clears the vertex selection only.
    pub fn clear_vertex(&mut self) {
        self.vertex = None;
    }

    /// Whether vertex `index` is the selected one.
    pub fn is_vertex_selected(&self, index: usize) -> bool {
        self.vertex == Some(index)
    }
}
