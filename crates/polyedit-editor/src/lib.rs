//! # Polyedit Editor
//!
//! Interactive polygon editing for map hosts.
//!
//! A [`PolygonEditor`] receives taps, presses and drags from the host,
//! creates polygons from successive taps, lets the user select a polygon,
//! move its vertices, insert vertices through midpoint handles and remove
//! vertices, and reports every change on its event bus.
//!
//! ```
//! use polyedit_core::{Coordinate, EventFilter, Polygon};
//! use polyedit_editor::{EditorState, PolygonEditor};
//!
//! let mut editor = PolygonEditor::new();
//! editor.set_template(Some(Polygon::new("new", Vec::new())));
//! let (_, events) = editor.events().record(EventFilter::All);
//!
//! editor.set_coordinate(Coordinate::new(0.0, 0.0));
//! editor.set_coordinate(Coordinate::new(0.0, 1.0));
//! editor.set_coordinate(Coordinate::new(1.0, 1.0));
//!
//! assert_eq!(editor.state(), EditorState::Selected);
//! assert_eq!(events.lock().len(), 1);
//! ```

pub mod clock;
pub mod control;
pub mod creation;
pub mod editor;
pub mod gesture;
pub mod overlay;
pub mod rate_limiter;
pub mod registry;
pub mod selection;

pub use clock::{Clock, ManualClock, SystemClock};
pub use control::{ControlCommand, EditorControl};
pub use creation::{CreationMachine, CreationStep};
pub use editor::{DragTask, EditorOptions, EditorState, PolygonEditor, PENDING_INSERT_UPDATES};
pub use gesture::Gesture;
pub use overlay::{MidpointHandle, Overlay, VertexHandle};
pub use rate_limiter::{DragRateLimiter, Fired, DEFAULT_DRAG_WINDOW};
pub use registry::PolygonRegistry;
pub use selection::SelectionState;

pub use polyedit_settings::CreationTrigger;
