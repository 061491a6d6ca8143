//! Layout mode selection.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// How the cognitive graph is arranged.
///
/// The names match external configuration strings (snake_case).
///
/// # Variants
///
/// - `Force` - Free force-directed layout anchored on the viewport center (default)
/// - `Dag` - Hierarchical layout with one column per level
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    #[default]
    Force,
    Dag,
}

impl LayoutMode {
    /// Returns the other mode.
    ///
    /// ```
    /// use cogviz_core::mode::LayoutMode;
    ///
    /// assert_eq!(LayoutMode::Force.toggled(), LayoutMode::Dag);
    /// assert_eq!(LayoutMode::Dag.toggled(), LayoutMode::Force);
    /// ```
    pub fn toggled(self) -> Self {
        match self {
            Self::Force => Self::Dag,
            Self::Dag => Self::Force,
        }
    }

    /// Upper-case label shown in the layout caption.
    pub fn label(self) -> &'static str {
        match self {
            Self::Force => "FORCE",
            Self::Dag => "DAG",
        }
    }

    pub fn is_dag(self) -> bool {
        self == Self::Dag
    }
}

impl FromStr for LayoutMode {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "force" => Ok(Self::Force),
            "dag" => Ok(Self::Dag),
            _ => Err("Unsupported layout mode"),
        }
    }
}

impl From<LayoutMode> for &'static str {
    fn from(val: LayoutMode) -> Self {
        match val {
            LayoutMode::Force => "force",
            LayoutMode::Dag => "dag",
        }
    }
}

impl Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("force".parse::<LayoutMode>(), Ok(LayoutMode::Force));
        assert_eq!("DAG".parse::<LayoutMode>(), Ok(LayoutMode::Dag));
        assert!("sugiyama".parse::<LayoutMode>().is_err());
    }

    #[test]
    fn test_display_matches_config_names() {
        assert_eq!(LayoutMode::Force.to_string(), "force");
        assert_eq!(LayoutMode::Dag.to_string(), "dag");
        assert_eq!(LayoutMode::Dag.label(), "DAG");
    }

    #[test]
    fn test_double_toggle_is_identity() {
        for mode in [LayoutMode::Force, LayoutMode::Dag] {
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }
}
