use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::extract::DocumentKind;

/// An uploaded document staged on disk for the extractors.
///
/// The file is deleted when this value is dropped, on every exit path of the
/// request that owns it.
#[derive(Debug)]
pub struct StagedUpload {
    file: NamedTempFile,
    kind: DocumentKind,
}

impl StagedUpload {
    /// Writes `bytes` to a fresh `resume-*<ext>` file inside `dir`.
    pub fn write(dir: &Path, kind: DocumentKind, bytes: &[u8]) -> Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix("resume-")
            .suffix(kind.extension())
            .tempfile_in(dir)
            .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
        file.write_all(bytes).context("Failed to write upload to temp file")?;
        file.flush().context("Failed to flush temp file")?;
        debug!("Staged {} bytes at {}", bytes.len(), file.path().display());
        Ok(Self { file, kind })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }
}
