use serde::Serialize;

/// Name of the base stratum. It is implicit and can never be declared.
pub const BASE_STRATUM_NAME: &str = "Java";

/// Id of the synthetic marker appended when `*E` is reached.
pub const TERMINATOR_STRATUM_ID: &str = "*terminator*";

/// A source file declared in a FileSection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    pub file_id: u32,
    pub source_name: String,
    /// Only present when the declaration started with `+`
    pub source_path: Option<String>,
}

/// One line-translation rule from a LineSection.
///
/// Output lines belong to the generated artifact, input lines to the
/// original source file identified by `file_id`. Both ranges are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineMapping {
    pub output_start: u32,
    pub output_end: u32,
    pub output_line_increment: u32,
    pub input_start: u32,
    pub input_end: u32,
    pub file_id: u32,
}

impl LineMapping {
    /// Whether `output_line` falls inside this mapping's output range.
    pub fn covers_output(&self, output_line: u32) -> bool {
        output_line >= self.output_start && output_line <= self.output_end
    }
}

/// Start of a stratum's records in the file and line tables.
///
/// The records owned by stratum `i` live in `[strata[i].offset,
/// strata[i + 1].offset)`, which is why a terminal marker always follows the
/// last declared stratum once a document decodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StratumMarker {
    pub id: String,
    pub file_table_offset: usize,
    pub line_table_offset: usize,
    pub file_section_count: u32,
    pub line_section_count: u32,
}

impl StratumMarker {
    pub(crate) fn open(
        id: impl Into<String>,
        file_table_offset: usize,
        line_table_offset: usize,
    ) -> Self {
        Self {
            id: id.into(),
            file_table_offset,
            line_table_offset,
            file_section_count: 0,
            line_section_count: 0,
        }
    }
}

/// An `*O` ... `*C` bracket and the SMAPs embedded in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbeddedSection {
    pub output_stratum_id: String,
    pub smaps: Vec<Smap>,
}

/// A decoded SMAP document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Smap {
    /// Name of the generated artifact (the second header line)
    pub generated_file: String,
    /// Default stratum id; may be empty for unresolved SMAPs
    pub default_stratum_id: String,
    /// Whether the SMAP was taken from a compiled class file
    pub resolved: bool,
    pub files: Vec<FileRecord>,
    pub lines: Vec<LineMapping>,
    /// Declared strata followed by the terminal marker
    pub strata: Vec<StratumMarker>,
    pub embedded: Vec<EmbeddedSection>,
}

impl Smap {
    /// Number of declared strata, not counting the terminal marker.
    pub fn stratum_count(&self) -> usize {
        self.strata.len().saturating_sub(1)
    }

    /// Declared strata, without the terminal marker.
    pub fn declared_strata(&self) -> &[StratumMarker] {
        &self.strata[..self.stratum_count()]
    }

    /// File records owned by stratum `sti`, or `None` past the last
    /// declared stratum.
    pub fn stratum_files(&self, sti: usize) -> Option<&[FileRecord]> {
        let start = self.strata.get(sti)?.file_table_offset;
        let end = self.strata.get(sti + 1)?.file_table_offset;
        self.files.get(start..end)
    }

    /// Line mappings owned by stratum `sti`, or `None` past the last
    /// declared stratum.
    pub fn stratum_lines(&self, sti: usize) -> Option<&[LineMapping]> {
        let start = self.strata.get(sti)?.line_table_offset;
        let end = self.strata.get(sti + 1)?.line_table_offset;
        self.lines.get(start..end)
    }

    /// Total number of SMAPs nested anywhere below this one.
    pub fn embedded_smap_count(&self) -> usize {
        self.embedded
            .iter()
            .flat_map(|section| section.smaps.iter())
            .map(|smap| 1 + smap.embedded_smap_count())
            .sum()
    }
}
