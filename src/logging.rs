//! Structured logging utilities for the SMAP verifier.
//!
//! This module provides helper functions for consistent, structured logging
//! across the crate using the `tracing` crate.

/// Log input loading event.
pub fn log_loading_input(path: &str) {
    tracing::info!(input = path, "Loading input");
}

/// Log successful input load.
pub fn log_input_loaded(path: &str, bytes: usize) {
    tracing::info!(input = path, bytes, "Input loaded");
}

/// Log class file attribute lookup.
pub fn log_extracting_attribute(artifact: &str, attribute: &str) {
    tracing::debug!(artifact, attribute, "Extracting class file attribute");
}

/// Log start of verification.
pub fn log_verify_start(artifact: &str, resolved: bool) {
    tracing::info!(artifact, resolved, "Verifying SMAP");
}

/// Log a section marker reached by the decoder.
pub fn log_section(section: char, line: usize, depth: usize) {
    tracing::trace!(section = %section, line, depth, "SMAP section");
}

pub fn log_stratum_opened(stratum: &str, depth: usize) {
    tracing::debug!(stratum, depth, "Stratum opened");
}

/// Log descent into an embedded SMAP.
pub fn log_embedded_smap(depth: usize, line: usize) {
    tracing::debug!(depth, line, "Decoding embedded SMAP");
}

/// Log verification success.
pub fn log_verify_complete(artifact: &str, strata: usize, files: usize, lines: usize) {
    tracing::info!(artifact, strata, files, lines, "SMAP verified");
}

/// Log verification failure.
pub fn log_verify_failed(artifact: &str, code: &str) {
    tracing::warn!(artifact, code, "SMAP verification failed");
}
