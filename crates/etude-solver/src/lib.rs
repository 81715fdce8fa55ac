//! Command-line front end for the chess problem solver.
//!
//! Reads a board diagram, runs the requested search and prints the result as
//! text or JSON. Settings come from flags, an optional `etude.toml` and
//! built-in defaults, in that order of precedence.

pub mod cli;
pub mod config;
pub mod json_output;
pub mod render;
pub mod solve;

pub use cli::{Cli, EtudeType};
pub use config::{ConfigError, OutputFormat, SolverConfig};
pub use solve::{solve, Outcome, Report, SolveError};
