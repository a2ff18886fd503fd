use crate::constants::{verbosity, CURRENT_DIR_SENTINEL, DEFAULT_PROJECT_VERSION};
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// CLI arguments for the scaffold generator.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Target directory for generated files. Removed and recreated unless it is `.`.
    #[arg(short, long = "target-dir", default_value = CURRENT_DIR_SENTINEL)]
    pub target_dir: PathBuf,

    /// Render from this template directory instead of the bundled templates.
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// Predefined answers as JSON string or `-` to read from stdin.
    #[arg(short, long)]
    pub answers: Option<String>,

    /// Never prompt; unanswered questions take their defaults.
    #[arg(long = "non-interactive")]
    pub non_interactive: bool,

    /// Template identifiers to leave out (comma-separated).
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Version written into the generated project.
    #[arg(long = "project-version", default_value = DEFAULT_PROJECT_VERSION)]
    pub project_version: String,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse command line arguments.
pub fn get_args() -> Args {
    Args::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        assert_eq!(get_log_level_from_verbose(verbosity::OFF), LevelFilter::Error);
        assert_eq!(get_log_level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE + 1), LevelFilter::Trace);
    }

    #[test]
    fn defaults_to_current_directory() {
        let args = Args::parse_from(["pyscaffold"]);
        assert_eq!(args.target_dir, PathBuf::from("."));
        assert_eq!(args.project_version, "0.1.0");
        assert!(args.templates.is_none());
        assert!(!args.non_interactive);
        assert!(args.exclude.is_empty());
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn parses_full_feature_flags() {
        let args = Args::parse_from([
            "pyscaffold",
            "-t",
            "out",
            "--templates",
            "my-templates",
            "--answers",
            "{\"project_name\":\"Bedrock\"}",
            "--non-interactive",
            "--exclude",
            "package.json.jinja2,eslint.config.cjs.jinja2",
            "--project-version",
            "2.0.0",
            "-vv",
        ]);
        assert_eq!(args.target_dir, PathBuf::from("out"));
        assert_eq!(args.templates, Some(PathBuf::from("my-templates")));
        assert_eq!(args.answers, Some("{\"project_name\":\"Bedrock\"}".to_string()));
        assert!(args.non_interactive);
        assert_eq!(args.exclude, vec!["package.json.jinja2", "eslint.config.cjs.jinja2"]);
        assert_eq!(args.project_version, "2.0.0");
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn accepts_long_target_dir() {
        let args = Args::parse_from(["pyscaffold", "--target-dir", "./generated"]);
        assert_eq!(args.target_dir, PathBuf::from("./generated"));
    }
}
