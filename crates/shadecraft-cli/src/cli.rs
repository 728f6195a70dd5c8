use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use shadecraft::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "shadecraft", version, about = "Derive color theme tokens from base colors")]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a theme document from a YAML or JSON source
    Build(BuildArgs),
    /// Validate a source and list its diagnostics
    Check(CheckArgs),
    /// Print the generated ramp for each base color
    Ramp(RampArgs),
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Source file (.yaml, .yml or .json)
    pub source: PathBuf,

    /// Output encoding: json, yaml or js
    #[arg(short, long, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Wrap the theme in a config document with its darkMode setting
    #[arg(long)]
    pub config: bool,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Fail when the theme has diagnostics
    #[arg(long)]
    pub deny_warnings: bool,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Source file (.yaml, .yml or .json)
    pub source: PathBuf,

    /// Fail when the theme has diagnostics
    #[arg(long)]
    pub deny_warnings: bool,
}

#[derive(Args, Debug)]
pub struct RampArgs {
    /// Base colors as #rrggbb
    #[arg(required = true)]
    pub colors: Vec<String>,

    /// Output encoding: json, yaml or js
    #[arg(short, long, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_build_defaults() {
        let cli = Cli::try_parse_from(["shadecraft", "build", "palette.yaml"]).unwrap();
        match cli.command {
            Command::Build(args) => {
                assert_eq!(args.source, PathBuf::from("palette.yaml"));
                assert_eq!(args.format, OutputFormat::Json);
                assert!(!args.config);
                assert!(args.output.is_none());
            }
            other => panic!("expected build, got {:?}", other),
        }
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["shadecraft", "check", "p.json", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["shadecraft", "build", "p.yaml", "-f", "toml"]).is_err());
    }

    #[test]
    fn test_ramp_needs_a_color() {
        assert!(Cli::try_parse_from(["shadecraft", "ramp"]).is_err());
    }
}
