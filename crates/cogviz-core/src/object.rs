//! The cognitive object model.
//!
//! A [`CognitiveObject`] is the unit of input produced by the upstream
//! reasoning service: a typed, named record with a weight and a list of
//! relation references. The layout engine never mutates these records; all
//! layout state lives elsewhere, keyed by the object's id.
//!
//! Field names follow the upstream JSON document (`nom`, `poids`, `contenu`,
//! `etat_validation`) so that documents deserialize without renaming.

use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Type tag of a cognitive object.
///
/// The set of tags is open upstream; every tag the renderer knows how to style
/// has its own variant and anything else is preserved in [`CognitiveType::Other`].
/// Parsing is an exact, case-insensitive match against both the English tags
/// and the French tags emitted by the reasoning service.
///
/// # Examples
///
/// ```
/// use cogviz_core::object::CognitiveType;
///
/// assert_eq!("FAIT".parse::<CognitiveType>(), Ok(CognitiveType::Fact));
/// assert_eq!("hypothesis".parse::<CognitiveType>(), Ok(CognitiveType::Hypothesis));
/// assert_eq!(
///     "FACTOID".parse::<CognitiveType>(),
///     Ok(CognitiveType::Other("FACTOID".to_string()))
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CognitiveType {
    Fact,
    Hypothesis,
    Question,
    Constraint,
    Goal,
    Plan,
    Decision,
    Model,
    DagRoot,
    Task,
    Morsel,
    Dependency,
    /// Any tag without a dedicated variant, kept verbatim.
    Other(String),
}

impl CognitiveType {
    /// Returns the canonical tag for this type.
    pub fn tag(&self) -> &str {
        match self {
            Self::Fact => "FACT",
            Self::Hypothesis => "HYPOTHESIS",
            Self::Question => "QUESTION",
            Self::Constraint => "CONSTRAINT",
            Self::Goal => "GOAL",
            Self::Plan => "PLAN",
            Self::Decision => "DECISION",
            Self::Model => "MODEL",
            Self::DagRoot => "DAG_ROOT",
            Self::Task => "TASK",
            Self::Morsel => "MORSEL",
            Self::Dependency => "DEPENDENCY",
            Self::Other(tag) => tag,
        }
    }
}

impl FromStr for CognitiveType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ty = match s.trim().to_uppercase().as_str() {
            "FACT" | "FAIT" => Self::Fact,
            "HYPOTHESIS" | "HYPOTHESE" | "HYPOTHÈSE" => Self::Hypothesis,
            "QUESTION" => Self::Question,
            "CONSTRAINT" | "CONTRAINTE" => Self::Constraint,
            "GOAL" | "OBJECTIF" => Self::Goal,
            "PLAN" => Self::Plan,
            "DECISION" | "DÉCISION" => Self::Decision,
            "MODEL" | "MODELE" | "MODÈLE" => Self::Model,
            "DAG_ROOT" => Self::DagRoot,
            "TASK" => Self::Task,
            "MORSEL" => Self::Morsel,
            "DEPENDENCY" => Self::Dependency,
            _ => Self::Other(s.to_string()),
        };
        Ok(ty)
    }
}

impl fmt::Display for CognitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl Serialize for CognitiveType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for CognitiveType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let Ok(ty) = raw.parse::<CognitiveType>();
        Ok(ty)
    }
}

/// A typed, named unit of input data with a weight and relation references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CognitiveObject {
    id: String,
    nom: String,
    #[serde(rename = "type")]
    kind: CognitiveType,
    #[serde(default)]
    poids: f32,
    #[serde(default)]
    relations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    contenu: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    etat_validation: Option<String>,
}

impl CognitiveObject {
    /// Creates an object with no relations, zero weight and no content.
    ///
    /// # Examples
    ///
    /// ```
    /// use cogviz_core::object::{CognitiveObject, CognitiveType};
    ///
    /// let goal = CognitiveObject::new("g1", "Ship v1", CognitiveType::Goal)
    ///     .with_weight(0.8)
    ///     .with_relations(["f1", "Budget"]);
    ///
    /// assert_eq!(goal.id(), "g1");
    /// assert_eq!(goal.relations(), ["f1", "Budget"]);
    /// ```
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: CognitiveType) -> Self {
        Self {
            id: id.into(),
            nom: name.into(),
            kind,
            poids: 0.0,
            relations: Vec::new(),
            contenu: None,
            etat_validation: None,
        }
    }

    pub fn with_weight(mut self, weight: f32) -> Self {
        self.poids = weight;
        self
    }

    pub fn with_relations<I, S>(mut self, relations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.relations = relations.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.contenu = Some(content.into());
        self
    }

    pub fn with_validation_state(mut self, state: impl Into<String>) -> Self {
        self.etat_validation = Some(state.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.nom
    }

    pub fn kind(&self) -> &CognitiveType {
        &self.kind
    }

    /// Raw weight as supplied upstream; may fall outside `[0, 1]`.
    pub fn weight(&self) -> f32 {
        self.poids
    }

    /// Weight clamped to `[0, 1]`, treating NaN as zero.
    pub fn clamped_weight(&self) -> f32 {
        if self.poids.is_nan() {
            0.0
        } else {
            self.poids.clamp(0.0, 1.0)
        }
    }

    /// Referenced ids or names, in declaration order.
    pub fn relations(&self) -> &[String] {
        &self.relations
    }

    pub fn content(&self) -> Option<&str> {
        self.contenu.as_deref()
    }

    pub fn validation_state(&self) -> Option<&str> {
        self.etat_validation.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tags() {
        let cases = [
            ("FACT", CognitiveType::Fact),
            ("fait", CognitiveType::Fact),
            ("HYPOTHESE", CognitiveType::Hypothesis),
            ("Contrainte", CognitiveType::Constraint),
            ("OBJECTIF", CognitiveType::Goal),
            ("MODELE", CognitiveType::Model),
            ("dag_root", CognitiveType::DagRoot),
            ("MORSEL", CognitiveType::Morsel),
            ("DEPENDENCY", CognitiveType::Dependency),
        ];

        for (raw, expected) in cases {
            assert_eq!(raw.parse::<CognitiveType>(), Ok(expected), "tag {raw}");
        }
    }

    #[test]
    fn test_parse_is_exact_not_substring() {
        // "TASK_FACT" contains both "TASK" and "FACT" but matches neither.
        assert_eq!(
            "TASK_FACT".parse::<CognitiveType>(),
            Ok(CognitiveType::Other("TASK_FACT".to_string()))
        );
        assert_eq!(
            "DECISIONS".parse::<CognitiveType>(),
            Ok(CognitiveType::Other("DECISIONS".to_string()))
        );
    }

    #[test]
    fn test_other_keeps_original_spelling() {
        let ty: CognitiveType = "Intuition".parse().unwrap();
        assert_eq!(ty.tag(), "Intuition");
        assert_eq!(ty.to_string(), "Intuition");
    }

    #[test]
    fn test_deserialize_upstream_object() {
        let json = r#"{
            "id": "h1",
            "nom": "Gravity explains it",
            "contenu": "Falling apples",
            "type": "HYPOTHESE",
            "etat_validation": "pending",
            "poids": 0.4,
            "relations": ["f1", "Observation"]
        }"#;

        let object: CognitiveObject = serde_json::from_str(json).unwrap();
        assert_eq!(object.id(), "h1");
        assert_eq!(object.name(), "Gravity explains it");
        assert_eq!(object.kind(), &CognitiveType::Hypothesis);
        assert_eq!(object.relations(), ["f1", "Observation"]);
        assert_eq!(object.content(), Some("Falling apples"));
        assert_eq!(object.validation_state(), Some("pending"));
    }

    #[test]
    fn test_deserialize_defaults_missing_relations() {
        let json = r#"{"id": "q1", "nom": "Why?", "type": "QUESTION", "poids": 1.0}"#;

        let object: CognitiveObject = serde_json::from_str(json).unwrap();
        assert!(object.relations().is_empty());
        assert_eq!(object.content(), None);
    }

    #[test]
    fn test_clamped_weight() {
        let base = CognitiveObject::new("x", "x", CognitiveType::Fact);
        assert_eq!(base.clone().with_weight(1.7).clamped_weight(), 1.0);
        assert_eq!(base.clone().with_weight(-0.5).clamped_weight(), 0.0);
        assert_eq!(base.clone().with_weight(f32::NAN).clamped_weight(), 0.0);
        assert_eq!(base.with_weight(0.25).clamped_weight(), 0.25);
    }
}
