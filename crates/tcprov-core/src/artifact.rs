//! Identity of the archive to provision.

/// Current stable binutils release.
const BINUTILS_NAME: &str = "binutils-2.36.1";
const BINUTILS_BASE_URL: &str = "https://ftp.gnu.org/gnu/binutils";
/// Known-good SHA-512 of the release tarball, taken from the upstream
/// manifest: <https://sourceware.org/pub/binutils/releases/sha512.sum>
const BINUTILS_SHA512: &str = "cc24590bcead10b90763386b6f96bb027d7594c659c2d95174a6352e8b98465a50ec3e4088d0da038428abe059bbc4ae5f37b269f31a40fc048072c8a234f4e9";

/// Pinned identity of a source archive: the component-version name,
/// the base URL its tarball is published under, and the known-good
/// SHA-512 digest of that tarball.
///
/// One value per supported release; bumping the release means editing
/// the constants behind [`ArchiveSpec::binutils`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveSpec {
    pub name: String,
    pub base_url: String,
    pub sha512: String,
}

impl ArchiveSpec {
    pub fn new(
        name: impl Into<String>,
        base_url: impl Into<String>,
        sha512: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            base_url: base_url.into(),
            sha512: sha512.into(),
        }
    }

    /// The current stable binutils release.
    pub fn binutils() -> Self {
        Self::new(BINUTILS_NAME, BINUTILS_BASE_URL, BINUTILS_SHA512)
    }

    /// URL the tarball is fetched from, derived from the name.
    pub fn download_url(&self) -> String {
        format!("{}/{}", self.base_url, self.tarball_name())
    }

    /// File name the tarball is saved under in the working directory.
    pub fn tarball_name(&self) -> String {
        format!("{}.tar.xz", self.name)
    }

    /// Component prefix shared by every release of this archive's
    /// family (`binutils-` for `binutils-2.36.1`). Stale entries in
    /// the working directory are matched against it. A name without a
    /// version suffix is its own family prefix.
    pub fn family_prefix(&self) -> &str {
        match self.name.find('-') {
            Some(idx) => &self.name[..=idx],
            None => &self.name,
        }
    }
}
