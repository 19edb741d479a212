use crate::config::Config;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "smap-verify")]
#[command(about = "Verify JSR-045 source maps (SMAP), raw or embedded in class files", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Verbosity from the command line flags.
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            Verbosity::from_level(self.verbose.saturating_add(1))
        }
    }

    /// Verbosity from the flags, falling back to the config file when no
    /// flag was given.
    pub fn verbosity_with_config(&self, config: &Config) -> Verbosity {
        match config.debug.verbosity {
            Some(level) if !self.quiet && self.verbose == 0 => Verbosity::from_level(level),
            _ => self.verbosity(),
        }
    }
}

/// Logging verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    Debug,
    Trace,
}

impl Verbosity {
    /// Map a numeric level (0 = quiet ... 4 = trace) to a verbosity.
    pub fn from_level(level: u8) -> Self {
        match level {
            0 => Verbosity::Quiet,
            1 => Verbosity::Normal,
            2 => Verbosity::Verbose,
            3 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }

    pub fn to_log_level(self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::Debug => "debug",
            Verbosity::Trace => "trace",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Verify an SMAP file, or the SMAP embedded in a class file
    Verify(VerifyArgs),

    /// Print the SourceDebugExtension attribute of a class file
    Extract(ExtractArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

/// How to interpret the input file
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputKindArg {
    /// Decide from the file extension
    Auto,
    /// Raw SMAP text
    Text,
    /// Compiled class file
    Class,
}

/// Result output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
pub struct VerifyArgs {
    /// Path to the SMAP or class file to verify
    pub path: PathBuf,

    /// How to interpret the input
    #[arg(short, long, value_enum, default_value_t = InputKindArg::Auto)]
    pub kind: InputKindArg,

    /// Output format (default: text, or the config file's output.format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl VerifyArgs {
    /// Fill in options not given on the command line from the config file.
    pub fn merge_config(&mut self, config: &Config) {
        if self.format.is_none() {
            self.format = config
                .output
                .format
                .as_deref()
                .and_then(|format| OutputFormat::from_str(format, true).ok());
        }
        if config.output.color == Some(false) {
            self.no_color = true;
        }
    }

    pub fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or(OutputFormat::Text)
    }
}

#[derive(Parser)]
pub struct ExtractArgs {
    /// Path to the class file
    pub path: PathBuf,

    /// Write the SMAP to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
