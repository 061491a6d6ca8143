//! Styling attributes for rendered nodes and links.
//!
//! The fill color of a node is an exact function of its [`CognitiveType`];
//! unknown tags fall through to [`DEFAULT_FILL`]. The radius depends on the
//! layout mode: hierarchical layouts use a uniform radius so that columns line
//! up, force layouts scale the radius with the object's weight.

use crate::{
    color::Color,
    mode::LayoutMode,
    object::{CognitiveObject, CognitiveType},
};

/// Fill used for types without a dedicated color.
pub const DEFAULT_FILL: &str = "#94a3b8";
/// Stroke of link lines and arrow heads.
pub const LINK_STROKE: &str = "#64748b";
/// Stroke around node circles.
pub const NODE_STROKE: &str = "#0f172a";
/// Color of node labels.
pub const LABEL_FILL: &str = "#cbd5e1";

/// Uniform node radius in DAG mode.
pub const DAG_RADIUS: f32 = 18.0;
/// Base radius in force mode, before weight scaling.
pub const FORCE_BASE_RADIUS: f32 = 8.0;
/// Extra radius in force mode for a weight of 1.0.
pub const FORCE_WEIGHT_RADIUS: f32 = 15.0;

/// Maximum number of characters of the name shown as label.
pub const LABEL_MAX_CHARS: usize = 15;
/// Number of characters of the type tag shown as badge.
pub const BADGE_CHARS: usize = 4;

/// Returns the CSS fill color string for a cognitive type.
///
/// ```
/// use cogviz_core::{object::CognitiveType, style};
///
/// assert_eq!(style::fill_for(&CognitiveType::Fact), "#3b82f6");
/// assert_eq!(style::fill_for(&CognitiveType::Other("X".into())), style::DEFAULT_FILL);
/// ```
pub fn fill_for(kind: &CognitiveType) -> &'static str {
    match kind {
        CognitiveType::Fact => "#3b82f6",
        CognitiveType::Hypothesis => "#eab308",
        CognitiveType::Question => "#a855f7",
        CognitiveType::Constraint => "#ef4444",
        CognitiveType::Goal => "#22c55e",
        CognitiveType::Decision => "#14b8a6",
        CognitiveType::Model => "#f97316",
        CognitiveType::DagRoot => "#ffffff",
        CognitiveType::Task => "#6366f1",
        CognitiveType::Morsel => "#f43f5e",
        CognitiveType::Dependency => DEFAULT_FILL,
        CognitiveType::Plan | CognitiveType::Other(_) => DEFAULT_FILL,
    }
}

/// Radius of a node for the given mode.
pub fn radius_for(object: &CognitiveObject, mode: LayoutMode) -> f32 {
    match mode {
        LayoutMode::Dag => DAG_RADIUS,
        LayoutMode::Force => FORCE_BASE_RADIUS + object.clamped_weight() * FORCE_WEIGHT_RADIUS,
    }
}

/// Visual attributes of a single node, handed to the rendering sink.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeStyle {
    fill: Color,
    radius: f32,
    label: String,
    badge: String,
}

impl NodeStyle {
    /// Computes the style of `object` under `mode`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cogviz_core::{
    ///     mode::LayoutMode,
    ///     object::{CognitiveObject, CognitiveType},
    ///     style::NodeStyle,
    /// };
    ///
    /// let object = CognitiveObject::new("h1", "A rather long hypothesis name", CognitiveType::Hypothesis)
    ///     .with_weight(1.0);
    ///
    /// let style = NodeStyle::for_object(&object, LayoutMode::Force);
    /// assert_eq!(style.radius(), 23.0);
    /// assert_eq!(style.label(), "A rather long h");
    /// assert_eq!(style.badge(), "HYPO");
    /// ```
    pub fn for_object(object: &CognitiveObject, mode: LayoutMode) -> Self {
        Self {
            fill: Color::builtin(fill_for(object.kind())),
            radius: radius_for(object, mode),
            label: object.name().chars().take(LABEL_MAX_CHARS).collect(),
            badge: object
                .kind()
                .tag()
                .chars()
                .take(BADGE_CHARS)
                .collect::<String>()
                .to_uppercase(),
        }
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn badge(&self) -> &str {
        &self.badge
    }
}
