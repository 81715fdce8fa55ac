//! Command-line arguments.

use crate::config::{OutputFormat, SolverConfig};
use chess_core::Side;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;

/// Solves chess problems: direct mates, selfmates and helpmates.
#[derive(Parser, Debug)]
#[command(name = "etude-solver")]
#[command(about = "Solves mate, selfmate and helpmate chess problems")]
pub struct Cli {
    /// Diagram file: 8 rows of `kqrbnp` (White), `KQRBNP` (Black) or `-`
    #[arg(short, long)]
    pub input: PathBuf,

    /// Problem type
    #[arg(short = 't', long = "type", value_enum)]
    pub etude: EtudeType,

    /// Number of helpmate solutions to collect (0 for all)
    #[arg(short, long)]
    pub num_solutions: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file (defaults to etude.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Helpmate solution limit: the flag, else the config value.
    pub fn num_solutions(&self, config: &SolverConfig) -> usize {
        self.num_solutions.unwrap_or(config.num_solutions)
    }

    /// Output format: the flag, else the config value.
    pub fn format(&self, config: &SolverConfig) -> OutputFormat {
        self.format.unwrap_or(config.format)
    }

    /// Tracing filter used when `RUST_LOG` is not set.
    pub fn log_filter(&self, config: &SolverConfig) -> String {
        match self.verbose {
            0 => config.log_level.clone(),
            1 => "debug".to_string(),
            _ => "trace".to_string(),
        }
    }
}

/// The kind of problem to solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
pub enum EtudeType {
    #[value(name = "mate_in_2")]
    #[serde(rename = "mate_in_2")]
    MateInTwo,
    #[value(name = "mate_in_3")]
    #[serde(rename = "mate_in_3")]
    MateInThree,
    #[value(name = "mate_in_4")]
    #[serde(rename = "mate_in_4")]
    MateInFour,
    #[value(name = "selfmate")]
    #[serde(rename = "selfmate")]
    Selfmate,
    #[value(name = "helpmate")]
    #[serde(rename = "helpmate")]
    Helpmate,
}

impl EtudeType {
    /// The side that moves first in this kind of problem.
    pub const fn side_to_move(self) -> Side {
        match self {
            EtudeType::Helpmate => Side::Black,
            _ => Side::White,
        }
    }

    /// Human-readable title.
    pub const fn title(self) -> &'static str {
        match self {
            EtudeType::MateInTwo => "Mate in 2",
            EtudeType::MateInThree => "Mate in 3",
            EtudeType::MateInFour => "Mate in 4",
            EtudeType::Selfmate => "Selfmate in 2",
            EtudeType::Helpmate => "Helpmate in 2",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_flags() {
        let cli = Cli::try_parse_from(["etude-solver", "-i", "p.txt", "-t", "mate_in_3"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("p.txt"));
        assert_eq!(cli.etude, EtudeType::MateInThree);
        assert_eq!(cli.num_solutions, None);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn parses_long_flags() {
        let cli = Cli::try_parse_from([
            "etude-solver",
            "--input",
            "p.txt",
            "--type",
            "helpmate",
            "--num-solutions",
            "4",
            "--format",
            "json",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.etude, EtudeType::Helpmate);
        assert_eq!(cli.num_solutions, Some(4));
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn rejects_unknown_type() {
        assert!(Cli::try_parse_from(["etude-solver", "-i", "p.txt", "-t", "mate_in_5"]).is_err());
        assert!(Cli::try_parse_from(["etude-solver", "-i", "p.txt"]).is_err());
    }

    #[test]
    fn flags_override_config() {
        let config = SolverConfig {
            num_solutions: 7,
            format: OutputFormat::Json,
            log_level: "warn".to_string(),
        };
        let cli = Cli::try_parse_from(["etude-solver", "-i", "p", "-t", "helpmate"]).unwrap();
        assert_eq!(cli.num_solutions(&config), 7);
        assert_eq!(cli.format(&config), OutputFormat::Json);
        assert_eq!(cli.log_filter(&config), "warn");

        let cli = Cli::try_parse_from([
            "etude-solver", "-i", "p", "-t", "helpmate", "-n", "2", "-f", "text", "-v",
        ])
        .unwrap();
        assert_eq!(cli.num_solutions(&config), 2);
        assert_eq!(cli.format(&config), OutputFormat::Text);
        assert_eq!(cli.log_filter(&config), "debug");
    }

    #[test]
    fn side_to_move_per_type() {
        assert_eq!(EtudeType::MateInTwo.side_to_move(), Side::White);
        assert_eq!(EtudeType::Selfmate.side_to_move(), Side::White);
        assert_eq!(EtudeType::Helpmate.side_to_move(), Side::Black);
    }
}
