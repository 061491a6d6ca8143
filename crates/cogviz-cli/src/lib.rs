//! CLI logic for the cogviz renderer.
//!
//! Loads a cognitive state document, lays it out headless until the force
//! simulation settles and writes an SVG snapshot.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use log::info;

use cogviz::{CogvizError, SnapshotBuilder, config::AppConfig, geometry::Size};

/// Run the cogviz CLI application
///
/// # Errors
///
/// Returns `CogvizError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed input documents
/// - Export errors
pub fn run(args: &Args) -> Result<(), CogvizError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing cognitive state"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let builder = snapshot_builder(app_config, args);

    let state = cogviz::input::read_state(&args.input)?;
    if state.is_failure() {
        info!("Input reports an upstream failure, rendering placeholder");
    }

    builder.write_svg(&state, &args.output)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}

/// Applies command-line overrides on top of the loaded configuration.
fn snapshot_builder(app_config: AppConfig, args: &Args) -> SnapshotBuilder {
    let size = app_config.layout().size();
    let size = Size::new(
        args.width.unwrap_or(size.width()),
        args.height.unwrap_or(size.height()),
    );

    let mut builder = SnapshotBuilder::new(app_config).with_size(size);
    if let Some(mode) = args.mode {
        builder = builder.with_mode(mode);
    }
    if let Some(max_ticks) = args.max_ticks {
        builder = builder.with_max_ticks(max_ticks);
    }
    builder
}
