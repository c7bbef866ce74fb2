//! Creation of new polygons from successive taps.

use polyedit_core::{Coordinate, Polygon};

/// Result of feeding one tap to the creation machine.
#[derive(Debug, Clone, PartialEq)]
pub enum CreationStep {
    /// Creation is not armed or no template is configured.
    Ignored,
    /// The draft now holds this many vertices.
    Accumulating(usize),
    /// The draft reached the target count and is returned as a new polygon.
    Completed(Polygon),
}

/// Accumulates tapped coordinates into a draft polygon.
///
/// The draft copies everything but the coordinates from the template given to
/// [`CreationMachine::push`]. After completing, the machine disarms until the
/// next [`CreationMachine::start`].
#[derive(Debug, Clone)]
pub struct CreationMachine {
    vertex_count: usize,
    armed: bool,
    draft: Option<Polygon>,
}

impl CreationMachine {
    /// Machine completing after `vertex_count` taps.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count: vertex_count.max(Polygon::MIN_VERTICES),
            armed: false,
            draft: None,
        }
    }

    /// Taps needed to complete.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Arm and discard any previous draft.
    pub fn start(&mut self) {
        self.armed = true;
        self.draft = None;
    }

    /// Disarm and discard the draft.
    pub fn reset(&mut self) {
        self.armed = false;
        self.draft = None;
    }

    /// Whether taps are being accumulated.
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// The draft in progress, if any taps were accumulated.
    pub fn draft(&self) -> Option<&Polygon> {
        self.draft.as_ref().filter(|_| self.armed)
    }

    /// Add one tapped coordinate.
    pub fn push(&mut self, coordinate: Coordinate, template: Option<&Polygon>) -> CreationStep {
        let template = match template {
            Some(template) if self.armed => template,
            _ => return CreationStep::Ignored,
        };

        let draft = self.draft.get_or_insert_with(|| Polygon {
            coordinates: Vec::with_capacity(self.vertex_count),
            ..template.clone()
        });
        draft.coordinates.push(coordinate);

        let len = draft.coordinates.len();
        if len < self.vertex_count {
            return CreationStep::Accumulating(len);
        }

        self.armed = false;
        match self.draft.take() {
            Some(polygon) => CreationStep::Completed(polygon),
            None => CreationStep::Ignored,
        }
    }
}

impl Default for CreationMachine {
    fn default() -> Self {
        Self::new(Polygon::MIN_VERTICES)
    }
}
