//! Configuration types for cognitive graph layout.
//!
//! All types implement [`serde::Deserialize`] with per-section defaults, so a
//! configuration file only needs to mention the values it changes.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout, simulation and style settings.
//! - [`LayoutConfig`] - Initial [`LayoutMode`] and the viewport size used before a host reports one.
//! - [`SimulationConfig`] - Temperature schedule, stepping and force parameters.
//! - [`StyleConfig`] - Visual options such as the background color.
//!
//! # Example
//!
//! ```
//! # use cogviz::config::AppConfig;
//! let config: AppConfig = toml::from_str(
//!     r#"
//!     [layout]
//!     mode = "dag"
//!
//!     [simulation.force]
//!     link_distance = 120.0
//!     "#,
//! )
//! .unwrap();
//!
//! assert!(config.layout().mode().is_dag());
//! assert_eq!(config.simulation().force().link_distance(), 120.0);
//! assert_eq!(config.simulation().dag().link_distance(), 60.0);
//! ```

use std::time::Duration;

use serde::Deserialize;

use cogviz_core::{color::Color, geometry::Size, mode::LayoutMode};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Simulation configuration section.
    #[serde(default)]
    simulation: SimulationConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(layout: LayoutConfig, simulation: SimulationConfig, style: StyleConfig) -> Self {
        Self {
            layout,
            simulation,
            style,
        }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the simulation configuration.
    pub fn simulation(&self) -> &SimulationConfig {
        &self.simulation
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns a mutable reference to the layout configuration.
    pub fn layout_mut(&mut self) -> &mut LayoutConfig {
        &mut self.layout
    }
}

/// Initial layout settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Mode used when a view is created.
    mode: LayoutMode,

    /// Surface width assumed before the host reports a size.
    width: f32,

    /// Surface height assumed before the host reports a size.
    height: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mode: LayoutMode::Force,
            width: 600.0,
            height: 400.0,
        }
    }
}

impl LayoutConfig {
    pub fn new(mode: LayoutMode, size: Size) -> Self {
        Self {
            mode,
            width: size.width(),
            height: size.height(),
        }
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn set_mode(&mut self, mode: LayoutMode) -> &mut Self {
        self.mode = mode;
        self
    }

    pub fn set_size(&mut self, size: Size) -> &mut Self {
        self.width = size.width();
        self.height = size.height();
        self
    }
}

/// Temperature schedule, stepping and force parameters of the simulation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Temperature below which the simulation is considered settled.
    alpha_min: f32,

    /// Per-tick decay factor; derived from `alpha_min` when unset.
    alpha_decay: Option<f32>,

    /// Fraction of velocity lost per tick.
    velocity_decay: f32,

    /// Temperature target while a node is dragged.
    drag_alpha_target: f32,

    /// Simulated time covered by a single tick, in milliseconds.
    tick_interval_ms: u64,

    /// Upper bound of ticks run by one `advance` call.
    max_ticks_per_advance: u32,

    /// Seed for the jiggle applied to coincident nodes.
    seed: u64,

    /// Minimum center-to-center clearance enforced by the collision force.
    collision_clearance: f32,

    /// Fraction of the overlap corrected per tick.
    collision_strength: f32,

    /// Forces used in force mode.
    force: ForceModeConfig,

    /// Forces used in DAG mode.
    dag: DagModeConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            alpha_min: 0.001,
            alpha_decay: None,
            velocity_decay: 0.4,
            drag_alpha_target: 0.3,
            tick_interval_ms: 16,
            max_ticks_per_advance: 8,
            seed: 0x00c0_91a2,
            collision_clearance: 30.0,
            collision_strength: 0.7,
            force: ForceModeConfig::default(),
            dag: DagModeConfig::default(),
        }
    }
}

impl SimulationConfig {
    pub fn alpha_min(&self) -> f32 {
        self.alpha_min
    }

    /// Returns the configured decay, or the one that takes the temperature from
    /// 1 to `alpha_min` in 300 ticks.
    pub fn alpha_decay(&self) -> f32 {
        self.alpha_decay
            .unwrap_or_else(|| 1.0 - self.alpha_min.powf(1.0 / 300.0))
    }

    pub fn velocity_decay(&self) -> f32 {
        self.velocity_decay
    }

    pub fn drag_alpha_target(&self) -> f32 {
        self.drag_alpha_target
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Upper bound of ticks per `advance` call, never less than one.
    pub fn max_ticks_per_advance(&self) -> u32 {
        self.max_ticks_per_advance.max(1)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn collision_clearance(&self) -> f32 {
        self.collision_clearance
    }

    pub fn collision_strength(&self) -> f32 {
        self.collision_strength
    }

    pub fn force(&self) -> &ForceModeConfig {
        &self.force
    }

    pub fn dag(&self) -> &DagModeConfig {
        &self.dag
    }

    /// Set the seed used for jiggling coincident nodes
    pub fn set_seed(&mut self, seed: u64) -> &mut Self {
        self.seed = seed;
        self
    }

    /// Set the per-tick temperature decay
    pub fn set_alpha_decay(&mut self, decay: f32) -> &mut Self {
        self.alpha_decay = Some(decay);
        self
    }
}

/// Force parameters for the free force-directed mode.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ForceModeConfig {
    link_distance: f32,
    charge_strength: f32,
}

impl Default for ForceModeConfig {
    fn default() -> Self {
        Self {
            link_distance: 80.0,
            charge_strength: -300.0,
        }
    }
}

impl ForceModeConfig {
    pub fn link_distance(&self) -> f32 {
        self.link_distance
    }

    pub fn charge_strength(&self) -> f32 {
        self.charge_strength
    }
}

/// Force parameters for the hierarchical mode.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DagModeConfig {
    link_distance: f32,
    charge_strength: f32,
    /// Pull toward the column of the node's level.
    level_strength: f32,
    /// Pull toward the vertical middle of the viewport.
    vertical_strength: f32,
    /// Horizontal margin left on both sides of the columns.
    margin: f32,
}

impl Default for DagModeConfig {
    fn default() -> Self {
        Self {
            link_distance: 60.0,
            charge_strength: -200.0,
            level_strength: 1.0,
            vertical_strength: 0.15,
            margin: 50.0,
        }
    }
}

impl DagModeConfig {
    pub fn link_distance(&self) -> f32 {
        self.link_distance
    }

    pub fn charge_strength(&self) -> f32 {
        self.charge_strength
    }

    pub fn level_strength(&self) -> f32 {
        self.level_strength
    }

    pub fn vertical_strength(&self) -> f32 {
        self.vertical_strength
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }
}

/// Visual styling configuration for rendered graphs.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background color for exported documents, as a color string.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        let sim = config.simulation();

        assert_eq!(config.layout().mode(), LayoutMode::Force);
        assert_eq!(config.layout().size(), Size::new(600.0, 400.0));
        assert_eq!(sim.force().link_distance(), 80.0);
        assert_eq!(sim.force().charge_strength(), -300.0);
        assert_eq!(sim.dag().link_distance(), 60.0);
        assert_eq!(sim.dag().charge_strength(), -200.0);
        assert_eq!(sim.collision_clearance(), 30.0);
        assert_eq!(sim.tick_interval(), Duration::from_millis(16));
    }

    #[test]
    fn test_derived_alpha_decay_reaches_min_in_300_ticks() {
        let sim = SimulationConfig::default();
        let remaining = (1.0 - sim.alpha_decay()).powi(300);
        assert!(approx_eq!(f32, remaining, sim.alpha_min(), epsilon = 1e-5));
    }

    #[test]
    fn test_explicit_alpha_decay_wins() {
        let mut sim = SimulationConfig::default();
        sim.set_alpha_decay(0.5);
        assert_eq!(sim.alpha_decay(), 0.5);
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [simulation]
            velocity_decay = 0.2

            [simulation.dag]
            margin = 10.0
            "#,
        )
        .unwrap();

        assert_eq!(config.simulation().velocity_decay(), 0.2);
        assert_eq!(config.simulation().drag_alpha_target(), 0.3);
        assert_eq!(config.simulation().dag().margin(), 10.0);
        assert_eq!(config.simulation().dag().level_strength(), 1.0);
    }

    #[test]
    fn test_zero_ticks_per_advance_is_raised_to_one() {
        let config: AppConfig =
            toml::from_str("[simulation]\nmax_ticks_per_advance = 0").unwrap();
        assert_eq!(config.simulation().max_ticks_per_advance(), 1);
    }

    #[test]
    fn test_background_color() {
        let config: AppConfig = toml::from_str("[style]\nbackground_color = \"#0f172a\"").unwrap();
        assert!(config.style().background_color().unwrap().is_some());

        let bad: AppConfig = toml::from_str("[style]\nbackground_color = \"nope\"").unwrap();
        assert!(bad.style().background_color().is_err());

        assert_eq!(AppConfig::default().style().background_color(), Ok(None));
    }
}
