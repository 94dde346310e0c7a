//! Command-line arguments for the `c2js` binary

use clap::{value_parser, ArgAction, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

/// Longest accepted input, in characters
pub const DEFAULT_MAX_INPUT: usize = 10_000;

/// What to do with the input file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    /// Print the emitted JavaScript
    #[default]
    Compile,
    /// Report `ok` or the first diagnostic
    Check,
    /// Dump the token stream
    Tokens,
    /// Dump the syntax tree
    Ast,
    /// Open the interactive viewer
    View,
}

/// Verbosity flags, `-v[v]` louder and `-q[q]` quieter
#[derive(Debug, Clone, Copy, clap::Args)]
pub struct LoggingArgs {
    #[clap(short = 'v', value_parser = value_parser!(u8).range(0..=2), action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,
    #[clap(short = 'q', value_parser = value_parser!(u8).range(0..=2), action = ArgAction::Count, conflicts_with = "verbose")]
    quiet: u8,
    /// Explicit log level, overriding -v/-q
    #[clap(long = "log-level", env = "C2JS_LOG")]
    level: Option<LevelFilter>,
}

impl LoggingArgs {
    /// Gets the logging level based on `--log-level`, or whether `-v[v]` or
    /// `-q[q]` has been used. The default shows warnings only.
    pub fn log_level_filter(&self) -> LevelFilter {
        if let Some(level) = self.level {
            return level;
        }
        match self.verbose as i8 - self.quiet as i8 {
            i8::MIN..=-2 => LevelFilter::Off,
            -1 => LevelFilter::Error,
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// The args struct
#[derive(Debug, clap::Parser)]
#[clap(author, version, about = "Translates a small C subset into JavaScript")]
pub struct Args {
    #[command(flatten)]
    logging: LoggingArgs,

    /// C source file to translate
    #[clap(value_name = "source file", value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// What to produce from the input
    #[clap(short = 'm', long, value_enum, default_value_t = Mode::Compile)]
    pub mode: Mode,

    /// Write output here instead of stdout
    #[clap(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Reject inputs longer than this many characters
    #[clap(long, env = "C2JS_MAX_INPUT", default_value_t = DEFAULT_MAX_INPUT)]
    pub max_input: usize,
}

impl Args {
    pub fn logging(&self) -> &LoggingArgs {
        &self.logging
    }
}
