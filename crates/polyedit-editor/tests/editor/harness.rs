#![allow(dead_code)]

//! A minimal map host: applies editor notifications to its own collection
//! and hands the collection back, the way an application would.

use polyedit_core::{Coordinate, EditorEvent, EventFilter, Polygon, ThreadSafeVec};
use polyedit_editor::{EditorOptions, ManualClock, PolygonEditor};

pub struct Host {
    pub editor: PolygonEditor,
    pub clock: ManualClock,
    pub polygons: Vec<Polygon>,
    events: ThreadSafeVec<EditorEvent>,
}

impl Host {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self::with_options(EditorOptions::default(), polygons)
    }

    pub fn with_options(options: EditorOptions, polygons: Vec<Polygon>) -> Self {
        let clock = ManualClock::new();
        let mut editor = PolygonEditor::with_options(options).with_clock(clock.clone());
        let (_, events) = editor.events().record(EventFilter::All);
        editor.set_polygons(polygons.clone());
        Self {
            editor,
            clock,
            polygons,
            events,
        }
    }

    pub fn with_template(mut self) -> Self {
        self.editor.set_template(Some(Polygon::new("new", Vec::new())));
        self
    }

    /// Events published since the last call.
    pub fn take_events(&self) -> Vec<EditorEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    /// Apply pending events to the collection and feed it back.
    pub fn sync(&mut self) -> Vec<EditorEvent> {
        let events = self.take_events();
        for event in &events {
            match event {
                EditorEvent::Created { polygon } => self.polygons.push(polygon.clone()),
                EditorEvent::Changed { index, polygon } => self.polygons[*index] = polygon.clone(),
                EditorEvent::Removed { index } => {
                    self.polygons.remove(*index);
                }
                EditorEvent::Selected { .. } | EditorEvent::Unselected { .. } => {}
            }
        }
        self.editor.set_polygons(self.polygons.clone());
        events
    }

    pub fn advance(&mut self, ms: u64) {
        self.clock.advance_ms(ms);
        self.editor.tick();
    }

    pub fn tap(&mut self, latitude: f64, longitude: f64) {
        self.editor.set_coordinate(Coordinate::new(latitude, longitude));
    }
}

/// Unit square with its lower-left corner at `(origin, origin)`.
pub fn square(key: &str, origin: f64) -> Polygon {
    Polygon::new(
        key,
        vec![
            Coordinate::new(origin, origin),
            Coordinate::new(origin, origin + 1.0),
            Coordinate::new(origin + 1.0, origin + 1.0),
            Coordinate::new(origin + 1.0, origin),
        ],
    )
}

/// Convex ring of `n` vertices around `(origin, origin)`.
pub fn ring(key: &str, origin: f64, n: usize) -> Polygon {
    let coordinates = (0..n)
        .map(|i| {
            let angle = i as f64 * std::f64::consts::TAU / n as f64;
            Coordinate::new(origin + angle.sin(), origin + angle.cos())
        })
        .collect();
    Polygon::new(key, coordinates)
}
