//! Loading verification input from disk.

use crate::{SmapError, SmapResult};
use std::fs;
use std::path::Path;

/// Largest input accepted unless configured otherwise.
pub const DEFAULT_MAX_INPUT_BYTES: u64 = i32::MAX as u64;

/// Read the whole file at `path`, rejecting missing or oversized inputs.
pub fn read_input(path: &Path, max_bytes: u64) -> SmapResult<Vec<u8>> {
    let artifact = path.display().to_string();

    let metadata = fs::metadata(path)
        .map_err(|_| SmapError::configuration(&artifact, "File does not exist"))?;
    if !metadata.is_file() {
        return Err(SmapError::configuration(&artifact, "Not a regular file"));
    }
    let len = metadata.len();
    if len > max_bytes {
        return Err(SmapError::configuration(
            &artifact,
            format!("File too big to verify ({} bytes, limit {})", len, max_bytes),
        ));
    }

    let bytes = fs::read(path)
        .map_err(|e| SmapError::configuration(&artifact, format!("Failed to read file: {}", e)))?;
    if bytes.len() as u64 != len {
        return Err(SmapError::configuration(
            &artifact,
            format!("unexpected size of read file, expected size: {}", len),
        ));
    }
    crate::logging::log_input_loaded(&artifact, bytes.len());
    Ok(bytes)
}
