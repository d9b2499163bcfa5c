//! Tarball extraction via the system archive tool.

use std::path::Path;
use std::process::Command;

use crate::error::ExtractionError;

const TAR: &str = "tar";

/// Capability to unpack an archive into a directory. Injected into
/// the provisioner so tests substitute an in-memory fake for the
/// system tool.
pub trait Extractor {
    fn extract(&self, archive: &Path, dest_dir: &Path) -> Result<(), ExtractionError>;
}

/// Production extractor: runs `tar -xJf <archive> -C <dest>`. The
/// tool is a black box; success is exit status 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct TarExtractor;

impl Extractor for TarExtractor {
    fn extract(&self, archive: &Path, dest_dir: &Path) -> Result<(), ExtractionError> {
        let status = Command::new(TAR)
            .arg("-xJf")
            .arg(archive)
            .arg("-C")
            .arg(dest_dir)
            .status()
            .map_err(|source| ExtractionError::Spawn {
                tool: TAR.to_string(),
                source,
            })?;

        if !status.success() {
            return Err(ExtractionError::ExitStatus {
                tool: TAR.to_string(),
                status,
                archive: archive.to_path_buf(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    #[ignore] // Requires system tar
    fn test_corrupt_archive_fails_with_exit_status() {
        let dir = tempfile::TempDir::new().unwrap();
        let archive = dir.path().join("corrupt.tar.xz");
        let mut f = std::fs::File::create(&archive).unwrap();
        f.write_all(b"not an archive").unwrap();

        let err = TarExtractor.extract(&archive, dir.path()).unwrap_err();
        assert!(matches!(err, ExtractionError::ExitStatus { .. }));
    }
}
