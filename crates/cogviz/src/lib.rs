//! Cogviz - layout and rendering of cognitive object graphs.
//!
//! Cognitive objects are typed, weighted records that reference each other by
//! id or name. This crate derives a directed graph from them and lays it out
//! with an iterative force simulation, either freely (force mode) or in
//! columns by hierarchy level (DAG mode). A [`view::CognitiveView`] keeps one
//! live layout per object list, mode and surface size and maps pointer
//! gestures onto it; [`SnapshotBuilder`] runs the same pipeline headless and
//! renders the settled result to SVG.

pub mod config;
pub mod derive;
pub mod engine;
pub mod export;
pub mod input;
pub mod interaction;
pub mod level;
pub mod scene;
pub mod simulation;
pub mod view;
pub mod viewport;

mod error;

pub use cogviz_core::{color, geometry, identifier, mode, object, state, style};

pub use error::CogvizError;

use std::time::Duration;

use log::{debug, info};

use cogviz_core::{geometry::Size, mode::LayoutMode, state::CognitiveState};

use config::AppConfig;
use export::{Exporter, svg::Svg};
use view::CognitiveView;

/// Upper bound of ticks run before a snapshot is taken.
pub const DEFAULT_MAX_TICKS: u32 = 1000;

/// Builder for headless snapshots of cognitive states.
///
/// # Examples
///
/// ```
/// use cogviz::{SnapshotBuilder, config::AppConfig};
///
/// let builder = SnapshotBuilder::new(AppConfig::default());
///
/// let state = builder
///     .parse(r#"[{"id": "f", "nom": "Fact", "type": "FACT"}, {"id": "h", "nom": "Guess", "type": "HYPOTHESIS", "relations": ["f"]}]"#)
///     .expect("Failed to parse");
///
/// let svg = builder.render_svg(&state).expect("Failed to render");
/// assert!(svg.contains("<circle"));
/// ```
#[derive(Debug, Clone)]
pub struct SnapshotBuilder {
    config: AppConfig,
    max_ticks: u32,
}

impl Default for SnapshotBuilder {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl SnapshotBuilder {
    /// Create a new snapshot builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            max_ticks: DEFAULT_MAX_TICKS,
        }
    }

    /// Set the maximum number of ticks run before rendering
    pub fn with_max_ticks(mut self, max_ticks: u32) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    /// Set the layout mode
    pub fn with_mode(mut self, mode: LayoutMode) -> Self {
        self.config.layout_mut().set_mode(mode);
        self
    }

    /// Set the size of the rendering surface
    pub fn with_size(mut self, size: Size) -> Self {
        self.config.layout_mut().set_size(size);
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a JSON cognitive state, or a bare JSON array of objects.
    ///
    /// # Errors
    ///
    /// Returns [`CogvizError::Input`] if the document is not valid JSON or does
    /// not match the expected shape.
    pub fn parse(&self, source: &str) -> Result<CognitiveState, CogvizError> {
        info!("Parsing cognitive state");
        input::parse_state(source)
    }

    /// Lay out the objects of `state` until the simulation settles and render
    /// the result to an SVG string.
    ///
    /// A state without objects renders the awaiting-input placeholder.
    ///
    /// # Errors
    ///
    /// Returns [`CogvizError::Config`] if the configured style or surface size
    /// is invalid.
    pub fn render_svg(&self, state: &CognitiveState) -> Result<String, CogvizError> {
        let svg = self.exporter()?;
        let view = self.settled_view(state);

        let document = svg.render_scene(&view.scene());
        debug!("SVG rendered successfully");
        Ok(document.to_string())
    }

    /// Like [`render_svg`](Self::render_svg), but writes the document to
    /// `file_name`.
    ///
    /// # Errors
    ///
    /// Returns [`CogvizError::Config`] if the configured style or surface size
    /// is invalid and [`CogvizError::Export`] if the file cannot be written.
    pub fn write_svg(&self, state: &CognitiveState, file_name: &str) -> Result<(), CogvizError> {
        let svg = self.exporter()?.with_file_name(file_name);
        let view = self.settled_view(state);

        svg.export_scene(&view.scene())?;
        Ok(())
    }

    fn exporter(&self) -> Result<Svg, CogvizError> {
        let size = self.config.layout().size();
        if !size.is_drawable() {
            return Err(CogvizError::Config(format!(
                "Surface size {}x{} is not drawable",
                size.width(),
                size.height()
            )));
        }

        let background = self
            .config
            .style()
            .background_color()
            .map_err(CogvizError::Config)?;
        Ok(Svg::new().with_background(background))
    }

    fn settled_view(&self, state: &CognitiveState) -> CognitiveView {
        let mut view = CognitiveView::new(&self.config);
        view.mount(self.config.layout().size());
        view.set_objects(state.objects.clone());

        let ticks = self.settle(&mut view);
        info!(
            mode:% = view.mode(),
            object_count = state.objects.len(),
            ticks;
            "Layout calculated"
        );
        view
    }

    /// Advances `view` until its simulation settles or `max_ticks` advances
    /// have run. Returns the tick count of the layout.
    fn settle(&self, view: &mut CognitiveView) -> u64 {
        let interval = self
            .config
            .simulation()
            .tick_interval()
            .max(Duration::from_millis(1));

        for _ in 0..self.max_ticks {
            if view
                .layout()
                .is_none_or(|layout| layout.simulation().is_settled())
            {
                break;
            }
            view.advance(interval);
        }

        view.layout()
            .map_or(0, |layout| layout.simulation().tick_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state_renders_placeholder() {
        let builder = SnapshotBuilder::default();
        let svg = builder.render_svg(&CognitiveState::default()).unwrap();

        assert!(svg.contains(export::svg::PLACEHOLDER_TEXT));
    }

    #[test]
    fn test_failure_state_renders_placeholder() {
        let builder = SnapshotBuilder::default();
        let svg = builder
            .render_svg(&CognitiveState::failure("timeout"))
            .unwrap();

        assert!(svg.contains(export::svg::PLACEHOLDER_TEXT));
    }

    #[test]
    fn test_max_ticks_bounds_the_run() {
        let builder = SnapshotBuilder::default().with_max_ticks(5);
        let state = builder
            .parse(r#"[{"id": "mt-a", "nom": "A", "type": "FACT"}, {"id": "mt-b", "nom": "B", "type": "FACT"}]"#)
            .unwrap();

        let mut view = CognitiveView::new(builder.config());
        view.mount(builder.config().layout().size());
        view.set_objects(state.objects);

        assert_eq!(builder.settle(&mut view), 5);
    }

    #[test]
    fn test_write_svg_to_unwritable_path_is_export_error() {
        let builder = SnapshotBuilder::default().with_max_ticks(10);
        let state = builder
            .parse(r#"[{"id": "w-a", "nom": "A", "type": "FACT"}]"#)
            .unwrap();

        assert!(matches!(
            builder.write_svg(&state, "/definitely/not/here/out.svg"),
            Err(CogvizError::Export(_))
        ));
    }

    #[test]
    fn test_settle_is_bounded_by_advances() {
        let mut config: AppConfig = toml::from_str(
            "[simulation]\nmax_ticks_per_advance = 0\ntick_interval_ms = 0",
        )
        .unwrap();
        config.layout_mut().set_size(Size::new(300.0, 200.0));
        let builder = SnapshotBuilder::new(config).with_max_ticks(10);
        let state = builder
            .parse(r#"[{"id": "sb-a", "nom": "A", "type": "FACT"}, {"id": "sb-b", "nom": "B", "type": "GOAL"}]"#)
            .unwrap();

        let mut view = CognitiveView::new(builder.config());
        view.mount(builder.config().layout().size());
        view.set_objects(state.objects.clone());
        assert_eq!(builder.settle(&mut view), 10);

        let svg = builder.render_svg(&state).unwrap();
        assert_eq!(svg.matches("<circle").count(), 2);
    }

    #[test]
    fn test_undrawable_size_is_config_error() {
        let builder = SnapshotBuilder::default().with_size(Size::new(0.0, 400.0));
        let state = builder
            .parse(r#"[{"id": "sz-a", "nom": "A", "type": "FACT"}, {"id": "sz-b", "nom": "B", "type": "FACT"}]"#)
            .unwrap();

        assert!(matches!(builder.render_svg(&state), Err(CogvizError::Config(_))));
        assert!(matches!(
            builder.write_svg(&state, "unused.svg"),
            Err(CogvizError::Config(_))
        ));
    }

    #[test]
    fn test_invalid_background_is_config_error() {
        let config: AppConfig = toml::from_str("[style]\nbackground_color = \"not-a-color\"").unwrap();
        let builder = SnapshotBuilder::new(config);

        assert!(matches!(
            builder.render_svg(&CognitiveState::default()),
            Err(CogvizError::Config(_))
        ));
    }
}
