//! # Polyedit
//!
//! Tap-and-drag polygon editing for interactive maps.
//!
//! ## Architecture
//!
//! Polyedit is organized as a workspace with multiple crates:
//!
//! 1. **polyedit-core** - Coordinates, polygons, geometry, events, listeners
//! 2. **polyedit-settings** - Editor configuration and config files
//! 3. **polyedit-editor** - The editing state machine, rate limiter and overlay
//! 4. **polyedit** - Logging setup, script replay and the command-line binary
//!
//! ## Features
//!
//! - **Creation**: new polygons from successive map taps
//! - **Selection**: polygon toggling, vertex selection
//! - **Reshaping**: rate-limited vertex drags, midpoint insertion
//! - **Trimming**: vertex removal with a configurable floor
//! - **Replay**: run recorded gesture scripts against the editor

pub mod replay;

pub use polyedit_core::{
    Coordinate, EditorEvent, Error, EventBus, EventFilter, Polygon, PolygonKey, Result,
};
pub use polyedit_editor::{EditorControl, EditorState, Gesture, Overlay, PolygonEditor};
pub use polyedit_settings::EditorConfig;
pub use replay::{run_script, ReplayOutcome, ReplayScript, Step};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty console output on stderr, keeping stdout for results
/// - RUST_LOG environment variable support
/// - Targets, levels and line numbers on every record
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
