//! Error adapter for converting [`CogvizError`] to miette diagnostics.
//!
//! The library reports plain errors without source spans; this module gives
//! each of them a stable diagnostic code and, where it helps, a hint for
//! fixing the input.

use std::fmt;

use miette::{Diagnostic, LabeledSpan};

use cogviz::CogvizError;

/// Adapter for [`CogvizError`] values.
pub struct ErrorAdapter<'a>(pub &'a CogvizError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl Diagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            CogvizError::Io(_) => "cogviz::io",
            CogvizError::Input(_) => "cogviz::input",
            CogvizError::Config(_) => "cogviz::config",
            CogvizError::Export(_) => "cogviz::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            CogvizError::Input(_) => {
                "expected a cognitive state object or a JSON array of cognitive objects"
            }
            CogvizError::Config(_) => "check the TOML configuration file passed with --config",
            CogvizError::Io(_) | CogvizError::Export(_) => return None,
        };
        Some(Box::new(help))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Convert a [`CogvizError`] into a list of reportable errors.
///
/// Every variant currently maps to exactly one report.
pub fn to_reportables(err: &CogvizError) -> Vec<ErrorAdapter<'_>> {
    vec![ErrorAdapter(err)]
}
