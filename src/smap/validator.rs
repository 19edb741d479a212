//! Cross-table consistency checks run once a document has decoded.
//!
//! Parsing is complete at this point, so diagnostics carry only the
//! artifact name.

use super::model::{Smap, BASE_STRATUM_NAME};
use super::rules::AssertionRule;
use crate::{Location, SmapError, SmapResult};

fn violation(artifact: &str, rule: AssertionRule, detail: Option<String>) -> SmapError {
    SmapError::Assertion {
        location: Location::new(artifact, None),
        rule,
        detail,
    }
}

/// Check a decoded SMAP against the structural rules that need the whole
/// document: stratum presence, default stratum, section cardinality and
/// line-to-file references.
pub fn validate(smap: &Smap, artifact: &str) -> SmapResult<()> {
    let strata = smap.declared_strata();

    if strata.is_empty() {
        return Err(violation(artifact, AssertionRule::NoStratum, None));
    }

    if smap.default_stratum_id.is_empty() {
        // unresolved SMAPs need not name a default stratum
        if smap.resolved {
            return Err(violation(
                artifact,
                AssertionRule::ResolvedWithoutDefaultStratum,
                None,
            ));
        }
    } else if smap.default_stratum_id != BASE_STRATUM_NAME
        && !strata.iter().any(|s| s.id == smap.default_stratum_id)
    {
        return Err(violation(
            artifact,
            AssertionRule::UnknownDefaultStratum,
            Some(format!("DefaultStratumId = '{}'", smap.default_stratum_id)),
        ));
    }

    if let Some(stratum) = strata.iter().find(|s| s.file_section_count != 1) {
        return Err(violation(
            artifact,
            AssertionRule::FileSectionCardinality,
            Some(format!(
                "There are {} file sections",
                stratum.file_section_count
            )),
        ));
    }

    if let Some(stratum) = strata.iter().find(|s| s.line_section_count != 1) {
        return Err(violation(
            artifact,
            AssertionRule::LineSectionCardinality,
            Some(format!(
                "There are {} line sections",
                stratum.line_section_count
            )),
        ));
    }

    for sti in 0..strata.len() {
        let files = smap.stratum_files(sti).unwrap_or_default();
        for mapping in smap.stratum_lines(sti).unwrap_or_default() {
            if !files.iter().any(|f| f.file_id == mapping.file_id) {
                return Err(violation(
                    artifact,
                    AssertionRule::UnresolvedLineFileId,
                    Some(format!("FileId {} not found", mapping.file_id)),
                ));
            }
        }
    }

    tracing::debug!(
        artifact,
        strata = strata.len(),
        files = smap.files.len(),
        lines = smap.lines.len(),
        "SMAP validated"
    );
    Ok(())
}
