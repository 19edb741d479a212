use crate::cli::args::{ExtractArgs, InputKindArg, OutputFormat, VerifyArgs};
use crate::cli::output::CommandOutput;
use crate::config::Config;
use crate::logging;
use crate::ui::formatter::Formatter;
use crate::utils::{class_file, input};
use crate::verify::{self, InputKind, VerifyReport};
use crate::{Result, SmapResult};
use anyhow::Context;
use std::fs;
use std::path::Path;

fn print_info(message: impl AsRef<str>) {
    println!("{}", Formatter::info(message));
}

fn print_success(message: impl AsRef<str>) {
    println!("{}", Formatter::success(message));
}

/// Decide how to read `path` given the `--kind` flag.
pub fn resolve_kind(path: &Path, kind: InputKindArg, config: &Config) -> InputKind {
    match kind {
        InputKindArg::Text => InputKind::SmapText,
        InputKindArg::Class => InputKind::ClassFile,
        InputKindArg::Auto => InputKind::from_path(path, &config.class_extensions()),
    }
}

/// Load and verify the file named by `args`.
pub fn verify_path(args: &VerifyArgs, config: &Config) -> SmapResult<VerifyReport> {
    let artifact = args.path.display().to_string();
    let kind = resolve_kind(&args.path, args.kind, config);
    logging::log_loading_input(&artifact);
    let bytes = input::read_input(&args.path, config.max_input_bytes())?;
    verify::verify(&bytes, kind, &artifact)
}

/// Execute the verify command
pub fn verify(args: VerifyArgs, config: &Config) -> Result<()> {
    if args.no_color {
        Formatter::configure_colors(false);
    }

    let outcome = verify_path(&args, config);
    if let Err(err) = &outcome {
        logging::log_verify_failed(&args.path.display().to_string(), &err.failure_code());
    }

    match args.output_format() {
        OutputFormat::Json => {
            let envelope = match &outcome {
                Ok(report) => CommandOutput::success(report),
                Err(err) => CommandOutput::failure(err),
            };
            let json = serde_json::to_string_pretty(&envelope).map_err(|e| {
                miette::miette!("Failed to serialize verification result: {}", e)
            })?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            if let Ok(report) = &outcome {
                print_success(report.verdict());
                print_info(Formatter::format_report(report));
            }
        }
    }

    outcome.map(|_| ()).map_err(Into::into)
}

fn write_smap(path: &Path, smap: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {:?}", parent))?;
    }
    fs::write(path, smap).with_context(|| format!("Failed to write SMAP to {:?}", path))?;
    Ok(())
}

/// Execute the extract command
pub fn extract(args: ExtractArgs, config: &Config) -> Result<()> {
    let artifact = args.path.display().to_string();
    logging::log_loading_input(&artifact);
    let bytes = input::read_input(&args.path, config.max_input_bytes())?;
    let smap = verify::smap_text(&bytes, InputKind::ClassFile, &artifact)?;

    match &args.output {
        Some(output) => {
            write_smap(output, &smap).map_err(|e| miette::miette!("{:#}", e))?;
            tracing::info!(
                output = %output.display(),
                attribute = class_file::SOURCE_DEBUG_EXTENSION,
                "SMAP written"
            );
        }
        None => print!("{}", smap),
    }
    Ok(())
}
