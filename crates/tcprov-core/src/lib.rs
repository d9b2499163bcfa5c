//! Provisioning of pinned toolchain source archives.
//!
//! Downloads a fixed release tarball, verifies it against an embedded
//! SHA-512 digest, extracts it into a working directory and marks the
//! extracted tree as ignored by version control. Build drivers call
//! [`ArchiveProvisioner::ensure`] once before relying on the tree;
//! a second call with the tree already present is a no-op.

pub mod artifact;
pub mod checksum;
pub mod download;
pub mod error;
pub mod extract;
pub mod provision;

pub use artifact::ArchiveSpec;
pub use download::{Downloader, HttpDownloader};
pub use error::{DownloadError, ExtractionError, IntegrityError, ProvisionError, Result};
pub use extract::{Extractor, TarExtractor};
pub use provision::ArchiveProvisioner;
