//! The provisioning sequence: cache check, stale cleanup, download,
//! verify, extract, ignore-mark, tarball cleanup.

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::artifact::ArchiveSpec;
use crate::checksum;
use crate::download::{Downloader, HttpDownloader};
use crate::error::{DownloadError, Result};
use crate::extract::{Extractor, TarExtractor};

const IGNORE_MARKER: &str = ".gitignore";

/// Ensures a pinned archive's extracted contents exist in a working
/// directory, downloading and verifying them if not already present.
pub struct ArchiveProvisioner<D, E> {
    spec: ArchiveSpec,
    downloader: D,
    extractor: E,
}

impl ArchiveProvisioner<HttpDownloader, TarExtractor> {
    /// Provisioner wired with the production downloader and extractor.
    pub fn with_defaults(spec: ArchiveSpec) -> Result<Self> {
        let downloader = HttpDownloader::new().map_err(DownloadError::from)?;
        Ok(Self::new(spec, downloader, TarExtractor))
    }
}

impl<D: Downloader, E: Extractor> ArchiveProvisioner<D, E> {
    pub fn new(spec: ArchiveSpec, downloader: D, extractor: E) -> Self {
        Self {
            spec,
            downloader,
            extractor,
        }
    }

    pub fn spec(&self) -> &ArchiveSpec {
        &self.spec
    }

    /// Ensure `working_dir/{name}/` exists.
    ///
    /// A no-op when that directory is already present. Otherwise every
    /// same-family entry in `working_dir` is removed, the tarball is
    /// downloaded, verified against the pinned SHA-512, extracted in
    /// place, marked as ignored by version control and deleted.
    ///
    /// On a checksum mismatch the operation aborts before extraction
    /// and the bad tarball is left on disk for inspection. A tarball
    /// is also left behind when extraction fails.
    ///
    /// Not safe to call concurrently against the same working
    /// directory; callers must serialize invocations.
    pub fn ensure(&self, working_dir: &Path) -> Result<()> {
        let target = working_dir.join(&self.spec.name);
        if target.is_dir() {
            debug!("{} already provisioned", self.spec.name);
            return Ok(());
        }

        self.clean_stale(working_dir)?;

        let url = self.spec.download_url();
        let tarball = working_dir.join(self.spec.tarball_name());
        info!("downloading {url}");
        let body = self.downloader.fetch(&url)?;
        fs::write(&tarball, body).map_err(DownloadError::from)?;

        checksum::verify(&tarball, &self.spec.sha512)?;

        info!("extracting {}", tarball.display());
        self.extractor.extract(&tarball, working_dir)?;

        write_ignore_marker(&target)?;
        fs::remove_file(&tarball)?;

        Ok(())
    }

    /// Remove every entry in `working_dir` whose name carries this
    /// archive's family prefix: obsolete releases, old tarballs and
    /// partially extracted leftovers. Runs before every download.
    fn clean_stale(&self, working_dir: &Path) -> Result<()> {
        let prefix = self.spec.family_prefix();
        for entry in fs::read_dir(working_dir)? {
            let entry = entry?;
            let file_name = entry.file_name();
            let name = match file_name.to_str() {
                Some(name) => name,
                None => continue,
            };
            if !name.starts_with(prefix) {
                continue;
            }

            let path = entry.path();
            debug!("removing stale {}", path.display());
            if path.is_dir() {
                fs::remove_dir_all(&path)?;
            } else {
                fs::remove_file(&path)?;
            }
        }
        Ok(())
    }
}

/// Write `{dir}/.gitignore` containing `*` so the generated tree never
/// shows up as untracked in the caller's repository.
fn write_ignore_marker(dir: &Path) -> Result<()> {
    fs::write(dir.join(IGNORE_MARKER), "*")?;
    Ok(())
}
