//! Gesture script replay.
//!
//! A script is a starting collection plus a list of steps. The runner acts
//! as the map host: it feeds each step to a [`PolygonEditor`] driven by a
//! manual clock, applies every notification to its own collection and hands
//! the collection back to the editor.

use std::path::Path;

use polyedit_core::{Coordinate, EditorEvent, Error, EventFilter, Polygon, Result};
use polyedit_editor::{ControlCommand, EditorState, Gesture, ManualClock, Overlay, PolygonEditor};
use polyedit_settings::EditorConfig;
use serde::{Deserialize, Serialize};

/// One scripted action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    /// A host gesture.
    Gesture(Gesture),
    /// A control-surface call.
    Control(ControlCommand),
    /// Let time pass, firing due drag work.
    Advance { ms: u64 },
    /// Fire pending drag work now.
    Flush,
    /// Replace the collection, as a host edit outside the editor would.
    SetPolygons { polygons: Vec<Polygon> },
    /// Change the creation template.
    SetTemplate {
        #[serde(default)]
        template: Option<Polygon>,
    },
    /// Disable or enable the editor.
    SetDisabled { disabled: bool },
}

/// A recorded editing session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    /// Starting collection.
    #[serde(default)]
    pub polygons: Vec<Polygon>,
    /// Creation template.
    #[serde(default)]
    pub template: Option<Polygon>,
    /// Steps in order.
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl ReplayScript {
    /// Parse a script from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON script file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let script = Self::from_json(&content)?;
        script.validate()?;
        Ok(script)
    }

    /// Reject starting polygons with non-finite coordinates or too few vertices.
    pub fn validate(&self) -> Result<()> {
        for polygon in &self.polygons {
            for c in &polygon.coordinates {
                Coordinate::try_new(c.latitude, c.longitude)?;
            }
            if !polygon.is_closed_shape() {
                return Err(Error::other(format!(
                    "Polygon {} has only {} vertices",
                    polygon.key,
                    polygon.vertex_count()
                )));
            }
        }
        Ok(())
    }
}

/// Result of a replay.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayOutcome {
    /// Collection after every notification was applied.
    pub polygons: Vec<Polygon>,
    /// Every notification, in order.
    pub events: Vec<EditorEvent>,
    /// Editor state at the end.
    pub state: EditorState,
    /// Overlay at the end.
    pub overlay: Overlay,
}

/// Run `script` against a fresh editor configured by `config`.
pub fn run_script(script: &ReplayScript, config: &EditorConfig) -> ReplayOutcome {
    let clock = ManualClock::new();
    let mut editor = PolygonEditor::with_config(config).with_clock(clock.clone());
    let (_, log) = editor.events().record(EventFilter::All);

    let mut polygons = script.polygons.clone();
    let mut events = Vec::new();
    editor.set_template(script.template.clone());
    editor.set_polygons(polygons.clone());

    for (number, step) in script.steps.iter().enumerate() {
        tracing::debug!("Step {}: {:?}", number, step);
        match step {
            Step::Gesture(gesture) => editor.handle(gesture.clone()),
            Step::Control(command) => command.apply(&mut editor),
            Step::Advance { ms } => {
                clock.advance_ms(*ms);
                editor.tick();
            }
            Step::Flush => {
                editor.flush();
            }
            Step::SetPolygons { polygons: replacement } => {
                polygons = replacement.clone();
                editor.set_polygons(polygons.clone());
            }
            Step::SetTemplate { template } => editor.set_template(template.clone()),
            Step::SetDisabled { disabled } => editor.set_disabled(*disabled),
        }

        let fresh = std::mem::take(&mut *log.lock());
        if !fresh.is_empty() {
            for event in &fresh {
                tracing::info!("{}", event.description());
                apply_event(&mut polygons, event);
            }
            editor.set_polygons(polygons.clone());
            events.extend(fresh);
        }
    }

    ReplayOutcome {
        polygons,
        events,
        state: editor.state(),
        overlay: editor.overlay(),
    }
}

/// Apply one notification to the host collection.
fn apply_event(polygons: &mut Vec<Polygon>, event: &EditorEvent) {
    match event {
        EditorEvent::Created { polygon } => polygons.push(polygon.clone()),
        EditorEvent::Changed { index, polygon } => match polygons.get_mut(*index) {
            Some(slot) => *slot = polygon.clone(),
            None => tracing::warn!("Change for missing polygon #{}", index),
        },
        EditorEvent::Removed { index } => {
            if *index < polygons.len() {
                polygons.remove(*index);
            } else {
                tracing::warn!("Removal of missing polygon #{}", index);
            }
        }
        EditorEvent::Selected { .. } | EditorEvent::Unselected { .. } => {}
    }
}
