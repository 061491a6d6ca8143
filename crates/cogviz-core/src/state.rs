//! Cognitive state documents produced by the upstream reasoning service.
//!
//! A [`CognitiveState`] bundles the object list that the layout engine draws
//! with the metrics and morphic trace consumed by other panels. Upstream
//! failures are represented as ordinary state (see [`CognitiveState::failure`])
//! rather than as errors.

use serde::{Deserialize, Serialize};

use crate::object::CognitiveObject;

/// Reasoning regime reported by the upstream service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CognitiveMode {
    #[default]
    Exploration,
    Stabilization,
    Optimization,
    Revision,
}

/// Virtual metrics attached to a cognitive state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Metrics {
    pub entropy: f32,
    pub potential: f32,
    pub prediction_error: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cognitive_load: Option<f32>,
}

/// One step of the morphic flux (the sequence of transformations applied
/// while reasoning).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MorphicTrace {
    pub step: u32,
    pub morphism: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epsilon: Option<f32>,
}

/// A full upstream document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CognitiveState {
    #[serde(default)]
    pub mode: CognitiveMode,
    #[serde(default)]
    pub metrics: Metrics,
    #[serde(default)]
    pub objects: Vec<CognitiveObject>,
    #[serde(default)]
    pub flux: Vec<MorphicTrace>,
    #[serde(default)]
    pub final_output: String,
}

impl CognitiveState {
    /// Morphism name recorded when the upstream service failed.
    pub const ERROR_MORPHISM: &'static str = "error_trap";

    /// Builds the state that stands in for a failed upstream call.
    ///
    /// The result has no objects, so a view fed with it shows the
    /// awaiting-input placeholder while the trace carries the description.
    ///
    /// # Examples
    ///
    /// ```
    /// use cogviz_core::state::{CognitiveMode, CognitiveState};
    ///
    /// let state = CognitiveState::failure("quota exceeded");
    /// assert_eq!(state.mode, CognitiveMode::Revision);
    /// assert!(state.objects.is_empty());
    /// assert!(state.is_failure());
    /// assert!(state.final_output.contains("quota exceeded"));
    /// ```
    pub fn failure(description: impl Into<String>) -> Self {
        let description = description.into();
        Self {
            mode: CognitiveMode::Revision,
            metrics: Metrics {
                entropy: 0.0,
                potential: 0.0,
                prediction_error: 1.0,
                cognitive_load: Some(0.0),
            },
            objects: Vec::new(),
            final_output: format!(
                "⚠️ COGNITIVE FAILURE: Unable to process request via MorphoSys Engine.\n\nError: {description}"
            ),
            flux: vec![MorphicTrace {
                step: 0,
                morphism: Self::ERROR_MORPHISM.to_string(),
                description,
                epsilon: Some(1.0),
            }],
        }
    }

    /// Returns true if the trace contains an upstream failure entry.
    pub fn is_failure(&self) -> bool {
        self.flux
            .iter()
            .any(|trace| trace.morphism == Self::ERROR_MORPHISM)
    }
}
