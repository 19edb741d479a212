//! Verification entry point: extraction, decoding and validation.

use crate::logging;
use crate::smap::{self, Smap};
use crate::utils::class_file;
use crate::{SmapError, SmapResult};
use serde::Serialize;
use std::path::Path;

/// How the input bytes should be interpreted. The caller decides; the
/// content is never sniffed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    /// Raw SMAP text, not yet attached to a class (unresolved)
    SmapText,
    /// A compiled class file carrying a `SourceDebugExtension` (resolved)
    ClassFile,
}

impl InputKind {
    pub fn is_resolved(self) -> bool {
        matches!(self, InputKind::ClassFile)
    }

    /// Pick the kind from the file extension.
    pub fn from_path(path: &Path, class_extensions: &[String]) -> Self {
        let is_class = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| class_extensions.iter().any(|c| c.trim_start_matches('.') == ext))
            .unwrap_or(false);
        if is_class {
            InputKind::ClassFile
        } else {
            InputKind::SmapText
        }
    }
}

/// Per-stratum counts in a [`VerifyReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StratumSummary {
    pub id: String,
    pub file_count: usize,
    pub line_mapping_count: usize,
}

/// Summary of a successfully verified SMAP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyReport {
    pub artifact: String,
    pub kind: InputKind,
    pub resolved: bool,
    pub generated_file: String,
    pub default_stratum: String,
    pub strata: Vec<StratumSummary>,
    pub file_count: usize,
    pub line_mapping_count: usize,
    pub embedded_smap_count: usize,
}

impl VerifyReport {
    pub fn from_smap(artifact: &str, kind: InputKind, smap: &Smap) -> Self {
        let strata = (0..smap.stratum_count())
            .map(|sti| StratumSummary {
                id: smap.strata[sti].id.clone(),
                file_count: smap.stratum_files(sti).map_or(0, <[_]>::len),
                line_mapping_count: smap.stratum_lines(sti).map_or(0, <[_]>::len),
            })
            .collect();
        Self {
            artifact: artifact.to_string(),
            kind,
            resolved: smap.resolved,
            generated_file: smap.generated_file.clone(),
            default_stratum: smap.default_stratum_id.clone(),
            strata,
            file_count: smap.files.len(),
            line_mapping_count: smap.lines.len(),
            embedded_smap_count: smap.embedded_smap_count(),
        }
    }

    pub fn stratum_count(&self) -> usize {
        self.strata.len()
    }

    /// One-line confirmation, e.g. `Foo.class contains a correctly formatted SMAP`.
    pub fn verdict(&self) -> String {
        let verb = if self.resolved { "contains" } else { "is" };
        format!("{} {} a correctly formatted SMAP", self.artifact, verb)
    }
}

/// Obtain the SMAP text from `input`, extracting it from a class file when
/// needed.
pub fn smap_text(input: &[u8], kind: InputKind, artifact: &str) -> SmapResult<String> {
    match kind {
        InputKind::ClassFile => {
            logging::log_extracting_attribute(artifact, class_file::SOURCE_DEBUG_EXTENSION);
            class_file::extract_source_debug_extension(input)
                .map_err(|e| SmapError::configuration(artifact, e.to_string()))
        }
        InputKind::SmapText => Ok(String::from_utf8_lossy(input).into_owned()),
    }
}

/// Decode and validate `input`, returning the SMAP tables.
pub fn load_smap(input: &[u8], kind: InputKind, artifact: &str) -> SmapResult<Smap> {
    let text = smap_text(input, kind, artifact)?;
    smap::decode_and_validate(&text, kind.is_resolved(), artifact)
}

/// Verify `input`; the first problem found aborts verification.
pub fn verify(input: &[u8], kind: InputKind, artifact: &str) -> SmapResult<VerifyReport> {
    logging::log_verify_start(artifact, kind.is_resolved());
    let smap = load_smap(input, kind, artifact)?;
    let report = VerifyReport::from_smap(artifact, kind, &smap);
    logging::log_verify_complete(
        artifact,
        report.stratum_count(),
        report.file_count,
        report.line_mapping_count,
    );
    Ok(report)
}
