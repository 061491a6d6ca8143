//! Loading of cognitive state documents.
//!
//! Producers either send a full [`CognitiveState`] object or just the array of
//! cognitive objects. Both decode to a state; a bare array gets default values
//! for everything except the objects.

use std::{fs, path::Path};

use log::{debug, info};

use cogviz_core::{object::CognitiveObject, state::CognitiveState};

use crate::error::CogvizError;

/// Parses a JSON document holding a cognitive state or an array of objects.
///
/// # Examples
///
/// ```
/// use cogviz::input::parse_state;
///
/// let state = parse_state(r#"[{"id": "a", "nom": "A", "type": "FAIT"}]"#).unwrap();
/// assert_eq!(state.objects.len(), 1);
///
/// let state = parse_state(r#"{"mode": "revision", "objects": []}"#).unwrap();
/// assert!(state.objects.is_empty());
/// ```
pub fn parse_state(source: &str) -> Result<CognitiveState, CogvizError> {
    let state = if source.trim_start().starts_with('[') {
        let objects: Vec<CognitiveObject> = serde_json::from_str(source)?;
        CognitiveState {
            objects,
            ..CognitiveState::default()
        }
    } else {
        serde_json::from_str(source)?
    };

    debug!(
        object_count = state.objects.len(),
        trace_count = state.flux.len(),
        failure = state.is_failure();
        "Parsed cognitive state"
    );

    Ok(state)
}

/// Reads and parses the document at `path`.
pub fn read_state(path: impl AsRef<Path>) -> Result<CognitiveState, CogvizError> {
    let path = path.as_ref();
    info!(path:? = path; "Reading cognitive state");
    let source = fs::read_to_string(path)?;
    parse_state(&source)
}

#[cfg(test)]
mod tests {
    use cogviz_core::{object::CognitiveType, state::CognitiveMode};

    use super::*;

    #[test]
    fn test_full_document() {
        let state = parse_state(
            r#"{
                "mode": "optimization",
                "metrics": {"entropy": 0.4, "potential": 0.7, "prediction_error": 0.1},
                "objects": [
                    {"id": "o1", "nom": "Objectif", "type": "OBJECTIF", "poids": 0.9, "relations": []},
                    {"id": "o2", "nom": "Contrainte", "type": "CONTRAINTE", "relations": ["o1"]}
                ],
                "flux": [{"step": 1, "morphism": "refine", "description": "narrowed"}],
                "final_output": "done"
            }"#,
        )
        .unwrap();

        assert_eq!(state.mode, CognitiveMode::Optimization);
        assert_eq!(state.objects.len(), 2);
        assert_eq!(state.objects[0].kind(), &CognitiveType::Goal);
        assert_eq!(state.objects[1].relations(), ["o1".to_string()]);
        assert_eq!(state.flux.len(), 1);
        assert!(!state.is_failure());
    }

    #[test]
    fn test_bare_array_with_leading_whitespace() {
        let state = parse_state("\n  [{\"id\": \"x\", \"nom\": \"X\", \"type\": \"TASK\"}]").unwrap();

        assert_eq!(state.objects.len(), 1);
        assert!(state.objects[0].relations().is_empty());
        assert_eq!(state.mode, CognitiveMode::default());
    }

    #[test]
    fn test_invalid_json_is_an_input_error() {
        assert!(matches!(parse_state("{not json"), Err(CogvizError::Input(_))));
        assert!(matches!(parse_state("[1, 2]"), Err(CogvizError::Input(_))));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        assert!(matches!(
            read_state("/definitely/not/here.json"),
            Err(CogvizError::Io(_))
        ));
    }
}
