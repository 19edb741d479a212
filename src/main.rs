use clap::{CommandFactory, FromArgMatches};
use clap_complete::generate;
use smap_verifier::cli::{Cli, Commands, Verbosity};
use smap_verifier::config::Config;
use smap_verifier::ui::formatter::Formatter;
use smap_verifier::{Result, SmapError};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("SMAP_VERIFY_GIT_HASH"),
    ")\n",
    env!("SMAP_VERIFY_RUSTC"),
    "\nbuilt at ",
    env!("SMAP_VERIFY_BUILD_DATE"),
    " (unix time)"
);

fn parse_cli() -> Cli {
    let matches = Cli::command().long_version(LONG_VERSION).get_matches();
    Cli::from_arg_matches(&matches).unwrap_or_else(|err| err.exit())
}

fn initialize_tracing(verbosity: Verbosity) {
    let log_level = verbosity.to_log_level();
    let fallback_filter = format!("smap_verifier={}", log_level);

    let use_json = std::env::var("SMAP_VERIFY_JSON").is_ok();

    if use_json {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true);

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| fallback_filter.clone().into()),
            )
            .with(json_layer)
            .init();
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true);

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| fallback_filter.into()),
            )
            .with(fmt_layer)
            .init();
    }
}

fn run(cli: Cli, config: &Config) -> Result<()> {
    match cli.command {
        Commands::Verify(mut args) => {
            args.merge_config(config);
            smap_verifier::cli::commands::verify(args, config)
        }
        Commands::Extract(args) => smap_verifier::cli::commands::extract(args, config),
        Commands::Completions(args) => {
            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "smap-verify", &mut io::stdout());
            Ok(())
        }
    }
}

fn main() {
    Formatter::configure_colors_from_env();

    let cli = parse_cli();
    let config = Config::load_or_default();
    if config.output.color == Some(false) {
        Formatter::configure_colors(false);
    }

    let verbosity = cli.verbosity_with_config(&config);
    initialize_tracing(verbosity);

    if let Err(err) = run(cli, &config) {
        eprintln!("{}", Formatter::error(err.to_string()));
        let code = err
            .downcast_ref::<SmapError>()
            .map(SmapError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}
