//! HTTP fetching of release tarballs.

use crate::error::DownloadError;

const USER_AGENT: &str = concat!("tcprov/", env!("CARGO_PKG_VERSION"));

/// Capability to fetch a URL into memory. Injected into the
/// provisioner so tests run without network access.
pub trait Downloader {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, DownloadError>;
}

/// Production downloader over a blocking reqwest client.
///
/// One GET per fetch, no retries. No overall request deadline is set:
/// release tarballs on slow mirrors take as long as they take, and
/// the transport's own defaults bound connect failures.
pub struct HttpDownloader {
    client: reqwest::blocking::Client,
}

impl HttpDownloader {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(None)
            .build()?;
        Ok(Self { client })
    }
}

impl Downloader for HttpDownloader {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, DownloadError> {
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response.bytes()?;
        Ok(bytes.to_vec())
    }
}
