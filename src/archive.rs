//! archive
//!
//! Archive extraction seam.
//!
//! Expanding a zip-like container into a flat file list is a collaborator
//! concern; this crate only defines the interface and consumes the result.
//! An empty archive is valid and yields an empty list.

use thiserror::Error;

/// One file extracted from an archive.
#[derive(Debug, Clone)]
pub struct ArchiveEntry {
    /// File name within the archive, forward-slash separated
    pub name: String,
    /// Raw file bytes
    pub bytes: Vec<u8>,
}

/// Errors from archive extraction.
#[derive(Debug, Clone, Error)]
pub enum ArchiveError {
    /// The container could not be read.
    #[error("failed to extract archive: {0}")]
    Malformed(String),
}

/// Expands an archive into a flat list of named byte blobs.
pub trait ArchiveExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8]) -> Result<Vec<ArchiveEntry>, ArchiveError>;
}

impl ArchiveEntry {
    /// Convert this entry into a [`crate::github::FileChange`], base64-encoding
    /// the bytes.
    pub fn into_file_change(self) -> crate::github::FileChange {
        crate::github::FileChange::from_bytes(self.name, &self.bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_converts_to_file_change() {
        let entry = ArchiveEntry {
            name: "dist/app.js".into(),
            bytes: b"console.log(1)".to_vec(),
        };
        let change = entry.into_file_change();
        assert_eq!(change.path, "dist/app.js");
        assert!(!change.content.is_empty());
    }
}
