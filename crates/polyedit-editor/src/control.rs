//! Imperative control surface exposed to the host.

use polyedit_core::{Coordinate, PolygonKey};
use serde::{Deserialize, Serialize};

/// Commands a host can issue outside of gestures.
pub trait EditorControl {
    /// Feed a tapped map coordinate, as if the background was tapped.
    fn set_coordinate(&mut self, coordinate: Coordinate);

    /// Clear the selection and arm polygon creation.
    fn start_polygon(&mut self);

    /// Clear creation, selection and any pending drag work.
    fn reset_all(&mut self);

    /// Select the polygon with `key`. Never notifies.
    fn select_polygon_by_key(&mut self, key: &PolygonKey);

    /// Select the polygon at `index`. Never notifies.
    fn select_polygon_by_index(&mut self, index: usize);
}

/// Serializable form of an [`EditorControl`] call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum ControlCommand {
    SetCoordinate { coordinate: Coordinate },
    StartPolygon,
    ResetAll,
    SelectPolygonByKey { key: PolygonKey },
    SelectPolygonByIndex { index: usize },
}

impl ControlCommand {
    /// Invoke the matching method on `target`.
    pub fn apply<C: EditorControl + ?Sized>(&self, target: &mut C) {
        match self {
            ControlCommand::SetCoordinate { coordinate } => target.set_coordinate(*coordinate),
            ControlCommand::StartPolygon => target.start_polygon(),
            ControlCommand::ResetAll => target.reset_all(),
            ControlCommand::SelectPolygonByKey { key } => target.select_polygon_by_key(key),
            ControlCommand::SelectPolygonByIndex { index } => {
                target.select_polygon_by_index(*index)
            }
        }
    }
}
