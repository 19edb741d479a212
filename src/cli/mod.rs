pub mod args;
pub mod commands;
pub mod output;

pub use args::{
    Cli, Commands, CompletionsArgs, ExtractArgs, InputKindArg, OutputFormat, Verbosity,
    VerifyArgs,
};
