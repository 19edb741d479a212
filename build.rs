use clap::CommandFactory;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

// src/cli/args.rs only needs the config fields it merges from
#[allow(dead_code)]
mod config {
    pub struct Config {
        pub debug: DebugConfig,
        pub output: OutputConfig,
    }

    pub struct DebugConfig {
        pub verbosity: Option<u8>,
    }

    pub struct OutputConfig {
        pub format: Option<String>,
        pub color: Option<bool>,
    }
}

#[allow(dead_code)]
#[path = "src/cli/args.rs"]
mod args;

fn main() -> std::io::Result<()> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/cli/args.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");

    // read by the long `--version` output in src/main.rs
    let git_hash = capture("git", &["rev-parse", "--short", "HEAD"]);
    let rustc = capture(&env::var("RUSTC").unwrap_or_else(|_| "rustc".into()), &["--version"]);
    let built = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    println!("cargo:rustc-env=SMAP_VERIFY_GIT_HASH={}", git_hash);
    println!("cargo:rustc-env=SMAP_VERIFY_RUSTC={}", rustc);
    println!("cargo:rustc-env=SMAP_VERIFY_BUILD_DATE={}", built);

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap_or_else(|_| "target".into()));
    write_man_pages(&out_dir.join("man1"))
}

/// First line of a command's stdout, or "unknown" when it cannot run.
fn capture(program: &str, args: &[&str]) -> String {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .and_then(|stdout| stdout.lines().next().map(str::trim).map(String::from))
        .filter(|line| !line.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

/// One page for `smap-verify` and one per visible subcommand, named
/// `smap-verify-<sub>.1`.
fn write_man_pages(dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dir)?;
    let cmd = args::Cli::command();
    let bin = cmd.get_name().to_string();

    let mut pages = vec![(bin.clone(), cmd.clone())];
    pages.extend(
        cmd.get_subcommands()
            .filter(|sub| !sub.is_hide_set())
            .map(|sub| (format!("{}-{}", bin, sub.get_name()), sub.clone())),
    );

    for (name, page) in pages {
        let mut rendered = Vec::new();
        clap_mangen::Man::new(page).render(&mut rendered)?;
        fs::write(dir.join(format!("{}.1", name)), rendered)?;
    }
    Ok(())
}
