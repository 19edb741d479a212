use crate::verify::VerifyReport;
use crossterm::style::Stylize;
use std::sync::atomic::{AtomicBool, Ordering};

/// Pretty printing utilities for verifier output
pub struct Formatter;

impl Formatter {
    /// Format the stratum breakdown of a verified SMAP.
    pub fn format_report(report: &VerifyReport) -> String {
        let default_stratum = if report.default_stratum.is_empty() {
            "<unspecified>"
        } else {
            report.default_stratum.as_str()
        };
        let mut lines = vec![
            format!("Generated file: {}", report.generated_file),
            format!("Default stratum: {}", default_stratum),
        ];
        lines.extend(report.strata.iter().map(|stratum| {
            format!(
                "  {:<16} {:>4} files {:>6} line mappings",
                stratum.id, stratum.file_count, stratum.line_mapping_count
            )
        }));
        lines.push(format!(
            "Total: {} strata, {} files, {} line mappings",
            report.stratum_count(),
            report.file_count,
            report.line_mapping_count
        ));
        if report.embedded_smap_count > 0 {
            lines.push(format!("Embedded SMAPs: {}", report.embedded_smap_count));
        }
        lines.join("\n")
    }

    /// Format an informational message in blue.
    pub fn info(message: impl AsRef<str>) -> String {
        Self::apply_color(message.as_ref(), ColorKind::Info)
    }

    /// Format a success message in green.
    pub fn success(message: impl AsRef<str>) -> String {
        Self::apply_color(message.as_ref(), ColorKind::Success)
    }

    /// Format a warning message in yellow.
    pub fn warning(message: impl AsRef<str>) -> String {
        Self::apply_color(message.as_ref(), ColorKind::Warning)
    }

    /// Format an error message in red.
    pub fn error(message: impl AsRef<str>) -> String {
        Self::apply_color(message.as_ref(), ColorKind::Error)
    }

    /// Configure whether ANSI colors are enabled.
    pub fn configure_colors(enable: bool) {
        COLOR_ENABLED.store(enable, Ordering::Relaxed);
    }

    /// Auto-configure color output based on environment.
    pub fn configure_colors_from_env() {
        let no_color = std::env::var_os("NO_COLOR").is_some();
        Self::configure_colors(!no_color);
    }

    fn apply_color(message: &str, kind: ColorKind) -> String {
        if !COLOR_ENABLED.load(Ordering::Relaxed) {
            return message.to_string();
        }

        match kind {
            ColorKind::Info => format!("{}", message.blue()),
            ColorKind::Success => format!("{}", message.green()),
            ColorKind::Warning => format!("{}", message.yellow()),
            ColorKind::Error => format!("{}", message.red()),
        }
    }
}

#[derive(Copy, Clone)]
enum ColorKind {
    Info,
    Success,
    Warning,
    Error,
}

static COLOR_ENABLED: AtomicBool = AtomicBool::new(true);
