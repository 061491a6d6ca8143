//! Command-line argument definitions for the cogviz CLI.
//!
//! Besides input/output paths, configuration file selection and logging
//! verbosity, a few layout settings can be overridden directly on the
//! command line. Overrides win over the configuration file.

use clap::Parser;

use cogviz_core::mode::LayoutMode;

/// Command-line arguments for the cogviz renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input JSON document
    #[arg(help = "Path to a cognitive state or an array of cognitive objects (JSON)")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Layout mode (force, dag)
    #[arg(short, long)]
    pub mode: Option<LayoutMode>,

    /// Width of the rendering surface
    #[arg(long)]
    pub width: Option<f32>,

    /// Height of the rendering surface
    #[arg(long)]
    pub height: Option<f32>,

    /// Upper bound of simulation ticks before the snapshot is taken
    #[arg(long)]
    pub max_ticks: Option<u32>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["cogviz", "state.json"]).unwrap();

        assert_eq!(args.input, "state.json");
        assert_eq!(args.output, "out.svg");
        assert_eq!(args.log_level, "info");
        assert!(args.config.is_none());
        assert!(args.mode.is_none());
        assert!(args.max_ticks.is_none());
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "cogviz",
            "state.json",
            "-o",
            "graph.svg",
            "--mode",
            "DAG",
            "--width",
            "800",
            "--height",
            "300",
            "--max-ticks",
            "50",
        ])
        .unwrap();

        assert_eq!(args.output, "graph.svg");
        assert_eq!(args.mode, Some(LayoutMode::Dag));
        assert_eq!(args.width, Some(800.0));
        assert_eq!(args.height, Some(300.0));
        assert_eq!(args.max_ticks, Some(50));
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        assert!(Args::try_parse_from(["cogviz", "state.json", "--mode", "radial"]).is_err());
    }
}
