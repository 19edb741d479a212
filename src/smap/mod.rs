pub mod model;
pub mod parser;
pub mod query;
pub mod reader;
pub mod rules;
pub mod validator;

pub use model::{
    EmbeddedSection, FileRecord, LineMapping, Smap, StratumMarker, BASE_STRATUM_NAME,
    TERMINATOR_STRATUM_ID,
};
pub use parser::SmapParser;
pub use query::SourcePosition;
pub use rules::AssertionRule;
pub use validator::validate;

use crate::SmapResult;

/// Decode SMAP text without validating it.
pub fn decode(text: &str, resolved: bool) -> SmapResult<Smap> {
    SmapParser::new(text, resolved).decode()
}

/// Decode and validate SMAP text, naming `artifact` in diagnostics.
pub fn decode_and_validate(text: &str, resolved: bool, artifact: &str) -> SmapResult<Smap> {
    let smap = SmapParser::with_artifact(text, resolved, artifact).decode()?;
    validate(&smap, artifact)?;
    Ok(smap)
}
