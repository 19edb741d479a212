//! Numbered SMAP assertions.
//!
//! Rule 1 is reserved for syntax errors and is reported through
//! [`SmapError::Syntax`](crate::SmapError::Syntax); every other rule has a
//! variant here. The numbers are part of the diagnostic contract and must
//! not be renumbered.

use serde::Serialize;
use std::fmt;

/// Rule number used for grammar (syntax) violations.
pub const SYNTAX_RULE: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AssertionRule {
    ResolvedWithoutDefaultStratum,
    UnknownDefaultStratum,
    BaseStratumRedefined,
    FileSectionOutsideStratum,
    FileSectionCardinality,
    DuplicateFileId,
    EmptyFileName,
    EmptyAbsoluteFileName,
    LineSectionOutsideStratum,
    LineSectionCardinality,
    RepeatCountTooSmall,
    LineIncrementTooSmall,
    InputStartTooSmall,
    OutputStartTooSmall,
    UnresolvedLineFileId,
    InvalidVendorId,
    UnknownSectionType,
    NoStratum,
    EmbeddedInResolved,
    MissingCloseEmbedded,
    CloseEmbeddedMismatch,
}

impl AssertionRule {
    /// The assertion number printed in diagnostics.
    pub fn number(self) -> u8 {
        match self {
            Self::ResolvedWithoutDefaultStratum => 2,
            Self::UnknownDefaultStratum => 3,
            Self::BaseStratumRedefined => 4,
            Self::FileSectionOutsideStratum => 5,
            Self::FileSectionCardinality => 6,
            Self::DuplicateFileId => 7,
            Self::EmptyFileName => 8,
            Self::EmptyAbsoluteFileName => 9,
            Self::LineSectionOutsideStratum => 10,
            Self::LineSectionCardinality => 11,
            Self::RepeatCountTooSmall => 12,
            Self::LineIncrementTooSmall => 13,
            Self::InputStartTooSmall => 14,
            Self::OutputStartTooSmall => 15,
            Self::UnresolvedLineFileId => 16,
            Self::InvalidVendorId => 17,
            Self::UnknownSectionType => 18,
            Self::NoStratum => 19,
            Self::EmbeddedInResolved => 20,
            Self::MissingCloseEmbedded => 21,
            Self::CloseEmbeddedMismatch => 22,
        }
    }

    /// Fixed description of what the rule requires.
    pub fn message(self) -> &'static str {
        match self {
            Self::ResolvedWithoutDefaultStratum => {
                "resolved SMAP with unspecified DefaultStratumId"
            }
            Self::UnknownDefaultStratum => "DefaultStratumId is not a valid stratum",
            Self::BaseStratumRedefined => "'Java' stratum cannot be defined",
            Self::FileSectionOutsideStratum => "FileSection must only occur after StratumSection",
            Self::FileSectionCardinality => {
                "There must be exactly one FileSection after each StratumSection"
            }
            Self::DuplicateFileId => {
                "In a FileSection, each FileId must be unique within that FileSection"
            }
            Self::EmptyFileName => "In a FileSection, the FileName must be non empty",
            Self::EmptyAbsoluteFileName => {
                "In a FileSection, the AbsoluteFileName, if specified, must be non empty"
            }
            Self::LineSectionOutsideStratum => "LineSection must only occur after StratumSection",
            Self::LineSectionCardinality => {
                "There must be exactly one LineSection after each StratumSection"
            }
            Self::RepeatCountTooSmall => {
                "In a LineSection, RepeatCount must be greater than or equal to one"
            }
            Self::LineIncrementTooSmall => {
                "In a LineSection, OutputLineIncrement must be greater than or equal to one"
            }
            Self::InputStartTooSmall => {
                "In a LineSection, InputStartLine must be greater than or equal to one"
            }
            Self::OutputStartTooSmall => {
                "In a LineSection, OutputStartLine must be greater than or equal to one"
            }
            Self::UnresolvedLineFileId => {
                "In a LineSection, LineFileId must be a FileId in the FileSection after the same StratumSection"
            }
            Self::InvalidVendorId => "VENDORID missing or contains invalid characters",
            Self::UnknownSectionType => "Unknown section type",
            Self::NoStratum => "There must be at least one StratumSection",
            Self::EmbeddedInResolved => "An embedded SMAP must not occur in a resolved SMAP",
            Self::MissingCloseEmbedded => {
                "CloseEmbeddedSection must terminate an OpenEmbeddedSection"
            }
            Self::CloseEmbeddedMismatch => {
                "StratumId of CloseEmbeddedSection does not match StratumId of OpenEmbeddedSection"
            }
        }
    }
}

impl fmt::Display for AssertionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Assertion #{} failed - {}", self.number(), self.message())
    }
}
