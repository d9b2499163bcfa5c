//! SHA-512 verification of downloaded archives.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha512};

use crate::error::IntegrityError;

const BUF_SIZE: usize = 128 * 1024;

/// Compute SHA-512 of a file and return the digest as lowercase hex.
/// Reads in chunks to keep memory use bounded; suitable for large
/// tarballs.
pub fn sha512_file(path: &Path) -> Result<String, IntegrityError> {
    let mut file = File::open(path).map_err(|source| IntegrityError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut hasher = Sha512::new();
    let mut buf = [0u8; BUF_SIZE];
    loop {
        let n = file.read(&mut buf).map_err(|source| IntegrityError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(format!("{:x}", hasher.finalize()))
}

/// Verify a file against a known-good SHA-512 hex digest.
///
/// Comparison is case-insensitive. On mismatch the error carries both
/// digests; the file itself is left untouched.
pub fn verify(path: &Path, expected: &str) -> Result<(), IntegrityError> {
    let actual = sha512_file(path)?;
    if actual.eq_ignore_ascii_case(expected) {
        Ok(())
    } else {
        Err(IntegrityError::ChecksumMismatch {
            path: path.to_path_buf(),
            expected: expected.to_ascii_lowercase(),
            actual,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HELLO_WORLD_SHA512: &str = "309ecc489c12d6eb4cc40f50c902f2b4d0ed77ee511a7c7a9bcd3ca86d4cd86f989dd35bc5ff499670da34255b45b0cfd830e81f605dcf7dc5542e93ae9cd76f";

    #[test]
    fn test_sha512_empty_file() {
        let f = tempfile::NamedTempFile::new().unwrap();
        let digest = sha512_file(f.path()).unwrap();
        assert_eq!(
            digest,
            "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"
        );
    }

    #[test]
    fn test_sha512_known_content() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"hello world").unwrap();
        f.flush().unwrap();
        let digest = sha512_file(f.path()).unwrap();
        assert_eq!(digest, HELLO_WORLD_SHA512);
    }

    #[test]
    fn test_verify_match() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"hello world").unwrap();
        f.flush().unwrap();
        assert!(verify(f.path(), HELLO_WORLD_SHA512).is_ok());
    }

    #[test]
    fn test_verify_is_case_insensitive() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"hello world").unwrap();
        f.flush().unwrap();
        assert!(verify(f.path(), &HELLO_WORLD_SHA512.to_ascii_uppercase()).is_ok());
    }

    #[test]
    fn test_verify_mismatch() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"hello world").unwrap();
        f.flush().unwrap();

        let wrong = "0".repeat(128);
        let err = verify(f.path(), &wrong).unwrap_err();
        match err {
            IntegrityError::ChecksumMismatch {
                expected, actual, ..
            } => {
                assert_eq!(expected, wrong);
                assert_eq!(actual, HELLO_WORLD_SHA512);
            }
            other => panic!("expected ChecksumMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = sha512_file(Path::new("/nonexistent/archive.tar.xz")).unwrap_err();
        assert!(matches!(err, IntegrityError::Io { .. }));
    }
}
