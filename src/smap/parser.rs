//! Recursive-descent decoder for SMAP documents.
//!
//! ```text
//! SMAP
//! <generated file>
//! <default stratum>
//! *S <stratum>        opens a stratum
//! *F                  file section: [+] <id> <name> [<path>]
//! *L                  line section: <in>[#<file>][,<count>]:<out>[,<inc>]
//! *V                  vendor section, ignored after the vendor id
//! *O <stratum>        embedded SMAPs, closed by *C <stratum>
//! *E                  end
//! ```

use super::model::{
    EmbeddedSection, FileRecord, LineMapping, Smap, StratumMarker, BASE_STRATUM_NAME,
    TERMINATOR_STRATUM_ID,
};
use super::reader::SmapReader;
use super::rules::AssertionRule;
use super::validator;
use crate::logging;
use crate::SmapResult;

/// Artifact name used in diagnostics when the caller does not supply one.
pub const DEFAULT_ARTIFACT: &str = "<smap>";

/// Decoder state for one SMAP document.
///
/// Each embedded SMAP is decoded by its own `SmapParser`, so cursors, line
/// counters and tables never leak between nesting levels.
pub struct SmapParser<'a> {
    reader: SmapReader<'a>,
    resolved: bool,
    depth: usize,
    current_file_id: Option<u32>,
    generated_file: String,
    default_stratum_id: String,
    files: Vec<FileRecord>,
    lines: Vec<LineMapping>,
    strata: Vec<StratumMarker>,
    embedded: Vec<EmbeddedSection>,
}

impl<'a> SmapParser<'a> {
    pub fn new(text: &'a str, resolved: bool) -> Self {
        Self::with_artifact(text, resolved, DEFAULT_ARTIFACT)
    }

    pub fn with_artifact(text: &'a str, resolved: bool, artifact: &'a str) -> Self {
        Self::at_line(text, resolved, artifact, 1, 0)
    }

    fn at_line(
        text: &'a str,
        resolved: bool,
        artifact: &'a str,
        line: usize,
        depth: usize,
    ) -> Self {
        Self {
            reader: SmapReader::new(text, artifact, line),
            resolved,
            depth,
            current_file_id: None,
            generated_file: String::new(),
            default_stratum_id: String::new(),
            files: Vec::new(),
            lines: Vec::new(),
            strata: Vec::new(),
            embedded: Vec::new(),
        }
    }

    /// Decode the document. Validation is a separate pass, see
    /// [`validator::validate`].
    pub fn decode(mut self) -> SmapResult<Smap> {
        self.decode_sections()?;
        Ok(self.into_smap())
    }

    fn into_smap(self) -> Smap {
        Smap {
            generated_file: self.generated_file,
            default_stratum_id: self.default_stratum_id,
            resolved: self.resolved,
            files: self.files,
            lines: self.lines,
            strata: self.strata,
            embedded: self.embedded,
        }
    }

    fn decode_sections(&mut self) -> SmapResult<()> {
        if !self.reader.remaining().starts_with("SMAP") {
            return Err(self
                .reader
                .syntax("Not an SMAP - does not start with 'SMAP'"));
        }
        for _ in 0..4 {
            self.reader.read()?;
        }
        self.reader.skip_remaining_white()?;
        self.generated_file = self.reader.read_line()?;
        self.default_stratum_id = self.reader.read_line()?;

        loop {
            if self.reader.read()? != '*' {
                return Err(self.reader.syntax("expected a '*'"));
            }
            let section_type = self.reader.read()?;
            logging::log_section(section_type, self.reader.line(), self.depth);
            match section_type {
                'S' => self.stratum_section()?,
                'F' => self.file_section()?,
                'L' => self.line_section()?,
                'V' => self.vendor_section()?,
                'O' => self.open_embedded_section()?,
                'E' => {
                    // the terminal marker closes the last stratum's window
                    self.store_stratum(TERMINATOR_STRATUM_ID);
                    return Ok(());
                }
                other => {
                    return Err(self.reader.violation(
                        AssertionRule::UnknownSectionType,
                        Some(format!("Section type: *{}", other)),
                    ));
                }
            }
        }
    }

    /// Records added from here until the next stratum belong to `stratum_id`.
    fn store_stratum(&mut self, stratum_id: &str) {
        self.strata.push(StratumMarker::open(
            stratum_id,
            self.files.len(),
            self.lines.len(),
        ));
        self.current_file_id = None;
    }

    fn stratum_section(&mut self) -> SmapResult<()> {
        let stratum_id = self.reader.read_line()?;
        if stratum_id == BASE_STRATUM_NAME {
            return Err(self
                .reader
                .violation(AssertionRule::BaseStratumRedefined, None));
        }
        logging::log_stratum_opened(&stratum_id, self.depth);
        self.store_stratum(&stratum_id);
        Ok(())
    }

    fn file_section(&mut self) -> SmapResult<()> {
        self.reader.skip_remaining_white()?;
        match self.strata.last_mut() {
            Some(stratum) => stratum.file_section_count += 1,
            None => {
                return Err(self
                    .reader
                    .violation(AssertionRule::FileSectionOutsideStratum, None));
            }
        }
        while self.reader.peek()? != '*' {
            self.file_line()?;
        }
        Ok(())
    }

    fn file_line(&mut self) -> SmapResult<()> {
        let has_absolute = self.reader.eat('+')?;
        let file_id = self.reader.read_number()?;
        if self.open_stratum_declares(file_id) {
            return Err(self.reader.violation(
                AssertionRule::DuplicateFileId,
                Some(format!("FileId = {}", file_id)),
            ));
        }
        let source_name = self.reader.read_line()?;
        if source_name.is_empty() {
            return Err(self.reader.violation(AssertionRule::EmptyFileName, None));
        }
        let source_path = if has_absolute {
            let path = self.reader.read_line()?;
            if path.is_empty() {
                return Err(self
                    .reader
                    .violation(AssertionRule::EmptyAbsoluteFileName, None));
            }
            Some(path)
        } else {
            None
        };

        self.files.push(FileRecord {
            file_id,
            source_name,
            source_path,
        });
        Ok(())
    }

    /// Whether the stratum currently being built already declares `file_id`.
    fn open_stratum_declares(&self, file_id: u32) -> bool {
        let start = self
            .strata
            .last()
            .map(|stratum| stratum.file_table_offset)
            .unwrap_or(0);
        self.files[start..]
            .iter()
            .any(|file| file.file_id == file_id)
    }

    fn line_section(&mut self) -> SmapResult<()> {
        self.reader.skip_remaining_white()?;
        match self.strata.last_mut() {
            Some(stratum) => stratum.line_section_count += 1,
            None => {
                return Err(self
                    .reader
                    .violation(AssertionRule::LineSectionOutsideStratum, None));
            }
        }
        while self.reader.peek()? != '*' {
            self.line_line()?;
        }
        Ok(())
    }

    fn line_line(&mut self) -> SmapResult<()> {
        let mut repeat_count = 1;
        let mut line_increment = 1;

        let input_start = self.reader.read_number()?;
        if input_start < 1 {
            return Err(self.reader.violation(
                AssertionRule::InputStartTooSmall,
                Some(format!("InputStartLine = {}", input_start)),
            ));
        }

        if self.reader.eat('#')? {
            self.current_file_id = Some(self.reader.read_number()?);
        }

        if self.reader.eat(',')? {
            repeat_count = self.reader.read_number()?;
            if repeat_count < 1 {
                return Err(self.reader.violation(
                    AssertionRule::RepeatCountTooSmall,
                    Some(format!("RepeatCount = {}", repeat_count)),
                ));
            }
        }

        if self.reader.read()? != ':' {
            return Err(self.reader.syntax("expected a ':'"));
        }

        let output_start = self.reader.read_number()?;
        if output_start < 1 {
            return Err(self.reader.violation(
                AssertionRule::OutputStartTooSmall,
                Some(format!("OutputStartLine = {}", output_start)),
            ));
        }

        if self.reader.eat(',')? {
            line_increment = self.reader.read_number()?;
            if line_increment < 1 {
                return Err(self.reader.violation(
                    AssertionRule::LineIncrementTooSmall,
                    Some(format!("OutputLineIncrement = {}", line_increment)),
                ));
            }
        }
        self.reader.skip_remaining_white()?;

        let output_end = repeat_count
            .checked_mul(line_increment)
            .and_then(|span| output_start.checked_add(span - 1))
            .ok_or_else(|| self.reader.syntax("output line range overflows"))?;
        let input_end = input_start
            .checked_add(repeat_count - 1)
            .ok_or_else(|| self.reader.syntax("input line range overflows"))?;

        self.lines.push(LineMapping {
            output_start,
            output_end,
            output_line_increment: line_increment,
            input_start,
            input_end,
            file_id: self.line_file_id(),
        });
        Ok(())
    }

    /// File id for a line without `#`: the last explicit id in this stratum,
    /// otherwise 0. A stratum that declares no file 0 maps such lines to its
    /// first declared file instead.
    fn line_file_id(&self) -> u32 {
        if let Some(file_id) = self.current_file_id {
            return file_id;
        }
        let start = self
            .strata
            .last()
            .map(|stratum| stratum.file_table_offset)
            .unwrap_or(0);
        let files = &self.files[start..];
        if files.iter().any(|file| file.file_id == 0) {
            return 0;
        }
        files.first().map(|file| file.file_id).unwrap_or(0)
    }

    fn vendor_section(&mut self) -> SmapResult<()> {
        self.reader.skip_remaining_white()?;
        let vendor_id = self.reader.read_line()?;
        if vendor_id.is_empty() {
            return Err(self.reader.violation(
                AssertionRule::InvalidVendorId,
                Some("VENDORID missing".to_string()),
            ));
        }
        if let Some((position, ch)) = vendor_id
            .chars()
            .enumerate()
            .find(|&(_, ch)| !is_vendor_id_char(ch))
        {
            return Err(self.reader.violation(
                AssertionRule::InvalidVendorId,
                Some(format!("Bad character: '{}' at position {}", ch, position)),
            ));
        }
        tracing::debug!(vendor = %vendor_id, "Skipping vendor section");
        self.ignore_section()
    }

    fn open_embedded_section(&mut self) -> SmapResult<()> {
        if self.resolved {
            return Err(self
                .reader
                .violation(AssertionRule::EmbeddedInResolved, None));
        }
        let output_stratum_id = self.reader.read_line()?;
        if output_stratum_id.is_empty() {
            return Err(self.reader.syntax("Output StratumID missing"));
        }

        let mut smaps = Vec::new();
        loop {
            smaps.push(self.decode_embedded()?);
            // past the end of the embedded '*E' line
            self.reader.skip_remaining_white()?;
            if self.reader.peek()? == '*' {
                break;
            }
        }

        if self.reader.read()? != '*' {
            return Err(self.reader.syntax("expected a '*'"));
        }
        if self.reader.read()? != 'C' {
            return Err(self.reader.violation(
                AssertionRule::MissingCloseEmbedded,
                Some("expected a CloseEmbeddedSection - '*C'".to_string()),
            ));
        }
        let close_stratum_id = self.reader.read_line()?;
        if close_stratum_id != output_stratum_id {
            return Err(self.reader.violation(
                AssertionRule::CloseEmbeddedMismatch,
                Some(format!(
                    "'{}' vs. '{}'",
                    close_stratum_id, output_stratum_id
                )),
            ));
        }

        self.embedded.push(EmbeddedSection {
            output_stratum_id,
            smaps,
        });
        Ok(())
    }

    /// Decode and validate one embedded SMAP starting at the cursor.
    fn decode_embedded(&mut self) -> SmapResult<Smap> {
        let artifact = self.reader.artifact();
        let mut nested = SmapParser::at_line(
            self.reader.remaining(),
            false,
            artifact,
            self.reader.line(),
            self.depth + 1,
        );
        logging::log_embedded_smap(self.depth + 1, self.reader.line());
        nested.decode_sections()?;
        let consumed = nested.reader.position();
        let line = nested.reader.line();
        let smap = nested.into_smap();
        validator::validate(&smap, artifact)?;
        self.reader.resume_after(consumed, line);
        Ok(smap)
    }

    /// Skip lines up to the next section marker.
    fn ignore_section(&mut self) -> SmapResult<()> {
        while self.reader.peek()? != '*' {
            self.reader.read_line()?;
        }
        Ok(())
    }
}

/// Vendor ids are dotted identifiers. Identifier characters here are
/// alphanumerics, `_` and `$`; other currency symbols and connector
/// punctuation are rejected.
fn is_vendor_id_char(ch: char) -> bool {
    ch == '.' || ch == '_' || ch == '$' || ch.is_alphanumeric()
}
