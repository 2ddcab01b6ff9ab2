//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Convert SVG files between Affinity Designer layer names and Shaper Origin attributes
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (default: shaper.toml, searched upward)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Turn layer names into shaper:* attributes (Affinity → Shaper)
    #[command(visible_alias = "e")]
    Encode {
        #[command(flatten)]
        args: EncodeArgs,
    },

    /// Fold shaper:* attributes back into layer names (Shaper → Affinity)
    #[command(visible_alias = "d")]
    Decode {
        #[command(flatten)]
        args: IoArgs,
    },
}

/// Input and output selection shared by both directions.
#[derive(clap::Args, Debug, Clone)]
pub struct IoArgs {
    /// Input SVG files or glob patterns (e.g. "parts/*.svg")
    #[arg(short, long, required = true, num_args = 1.., value_name = "INPUT")]
    pub input: Vec<String>,

    /// Output file (single input) or directory
    #[arg(short, long, value_hint = clap::ValueHint::AnyPath)]
    pub output: Option<PathBuf>,
}

/// Encode command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct EncodeArgs {
    #[command(flatten)]
    pub io: IoArgs,

    /// Global attribute applied to every shape, e.g. -g shaper:toolDia=0.25in
    #[arg(short, long = "global", value_name = "shaper:NAME=VALUE")]
    pub globals: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_encode_args() {
        let cli = Cli::try_parse_from([
            "shaper-svg",
            "encode",
            "-i",
            "a.svg",
            "parts/*.svg",
            "-o",
            "out",
            "-g",
            "shaper:toolDia=3mm",
            "-g",
            "shaper:cutDepth=1mm",
        ])
        .unwrap();
        let Commands::Encode { args } = cli.command else {
            panic!("expected encode");
        };
        assert_eq!(args.io.input, vec!["a.svg", "parts/*.svg"]);
        assert_eq!(args.io.output, Some(PathBuf::from("out")));
        assert_eq!(args.globals.len(), 2);
    }

    #[test]
    fn test_aliases_and_globals() {
        let cli = Cli::try_parse_from(["shaper-svg", "d", "-i", "x.svg", "-v", "--color", "never"])
            .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.color, ColorChoice::Never);
        assert!(matches!(cli.command, Commands::Decode { .. }));
    }

    #[test]
    fn test_input_required() {
        assert!(Cli::try_parse_from(["shaper-svg", "encode"]).is_err());
        assert!(Cli::try_parse_from(["shaper-svg", "decode", "-i", "a.svg", "-g", "x"]).is_err());
    }
}
