#![allow(dead_code)]
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Temporary directory holding the inputs of one CLI test
pub struct TestContext {
    pub temp_dir: TempDir,
}

impl TestContext {
    pub fn new() -> Result<Self, std::io::Error> {
        let temp_dir = TempDir::new()?;
        Ok(TestContext { temp_dir })
    }

    pub fn temp_path(&self) -> PathBuf {
        self.temp_dir.path().to_path_buf()
    }

    /// Create a file with the given content
    pub fn create_file(&self, name: &str, content: &[u8]) -> Result<PathBuf, std::io::Error> {
        let file_path = self.temp_path().join(name);
        fs::write(&file_path, content)?;
        Ok(file_path)
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new().expect("Failed to create test context")
    }
}

/// The smap-verify command, with colors and logging quieted for stable
/// output.
#[allow(deprecated)]
pub fn cmd() -> assert_cmd::Command {
    let mut cmd =
        assert_cmd::Command::cargo_bin("smap-verify").expect("Failed to find smap-verify binary");
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}
