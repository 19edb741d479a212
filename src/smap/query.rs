//! Lookups over a validated SMAP.
//!
//! These are not used by verification itself; they translate generated
//! line numbers back to source positions for tools that consume the map.
//! All indices are absolute positions in the [`Smap`] tables.

use super::model::Smap;
use serde::Serialize;

/// A position in an original source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourcePosition {
    pub stratum: String,
    pub source_name: String,
    pub source_path: Option<String>,
    pub line: u32,
}

impl Smap {
    /// Index of the declared default stratum, if it names one.
    pub fn default_stratum_index(&self) -> Option<usize> {
        self.declared_strata()
            .iter()
            .position(|stratum| stratum.id == self.default_stratum_id)
    }

    /// Index of the stratum called `stratum_id`.
    ///
    /// `None` and ids that match no declared stratum both fall back to the
    /// default stratum rather than failing.
    pub fn stratum_index(&self, stratum_id: Option<&str>) -> Option<usize> {
        stratum_id
            .and_then(|id| {
                self.declared_strata()
                    .iter()
                    .position(|stratum| stratum.id == id)
            })
            .or_else(|| self.default_stratum_index())
    }

    /// Index of the first line mapping of stratum `sti` whose output range
    /// covers `output_line`.
    pub fn line_mapping_index(&self, sti: usize, output_line: u32) -> Option<usize> {
        let start = self.strata.get(sti)?.line_table_offset;
        let end = self.strata.get(sti + 1)?.line_table_offset;
        (start..end).find(|&lti| {
            self.lines
                .get(lti)
                .is_some_and(|mapping| mapping.covers_output(output_line))
        })
    }

    /// Input line that `output_line` maps back to through mapping `lti`, or
    /// `None` when the mapping does not exist or does not cover the line.
    pub fn input_line(&self, lti: usize, output_line: u32) -> Option<u32> {
        let mapping = self.lines.get(lti)?;
        if !mapping.covers_output(output_line) {
            return None;
        }
        let offset = output_line.checked_sub(mapping.output_start)?;
        mapping
            .input_start
            .checked_add(offset / mapping.output_line_increment.max(1))
    }

    /// Index of the file record with `file_id` inside stratum `sti`.
    pub fn file_index(&self, sti: usize, file_id: u32) -> Option<usize> {
        let start = self.strata.get(sti)?.file_table_offset;
        let end = self.strata.get(sti + 1)?.file_table_offset;
        (start..end).find(|&fi| self.files.get(fi).is_some_and(|file| file.file_id == file_id))
    }

    /// Index of the file record that mapping `lti` refers to.
    pub fn mapping_file_index(&self, sti: usize, lti: usize) -> Option<usize> {
        self.file_index(sti, self.lines.get(lti)?.file_id)
    }

    /// Translate a generated line into a source position in `stratum_id`
    /// (or the default stratum).
    pub fn translate(&self, stratum_id: Option<&str>, output_line: u32) -> Option<SourcePosition> {
        let sti = self.stratum_index(stratum_id)?;
        let lti = self.line_mapping_index(sti, output_line)?;
        let file = self.files.get(self.mapping_file_index(sti, lti)?)?;
        Some(SourcePosition {
            stratum: self.strata.get(sti)?.id.clone(),
            source_name: file.source_name.clone(),
            source_path: file.source_path.clone(),
            line: self.input_line(lti, output_line)?,
        })
    }
}
