//! Retrieval of source items.
use std::path::{Path, PathBuf};

use log::debug;
use url::Url;

use crate::error::Error;

/// Default base for relative addresses (such as the ones found in `wet.paths` files).
pub const BASE_URL: &str = "https://data.commoncrawl.org/";

/// Retrieves the raw content behind an address.
pub trait Fetch {
    fn fetch(&self, address: &str) -> Result<Vec<u8>, Error>;
}

/// Where an address points to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Local(PathBuf),
    Remote(Url),
}

/// Fetches local files from disk and remote ones over HTTP.
pub struct Fetcher {
    base_url: Url,
    client: reqwest::blocking::Client,
}

impl Fetcher {
    /// Create a fetcher that resolves relative addresses against [BASE_URL].
    pub fn new() -> Result<Self, Error> {
        Ok(Self::with_base_url(Url::parse(BASE_URL)?))
    }

    /// Create a fetcher that resolves relative addresses against `base_url`.
    ///
    /// `base_url` should end with a `/`, otherwise its last segment gets replaced.
    pub fn with_base_url(base_url: Url) -> Self {
        Self {
            base_url,
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Get a reference to the base url.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an address.
    ///
    /// - absolute `file://` urls and existing paths are local,
    /// - other absolute urls are remote,
    /// - other relative addresses are joined onto the base url.
    pub fn resolve(&self, address: &str) -> Result<Location, Error> {
        match Url::parse(address) {
            Ok(url) if url.scheme() == "file" => url
                .to_file_path()
                .map(Location::Local)
                .map_err(|_| Error::SourceName(address.to_string())),
            Ok(url) => Ok(Location::Remote(url)),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let path = Path::new(address);
                if path.exists() {
                    Ok(Location::Local(path.to_path_buf()))
                } else {
                    Ok(Location::Remote(self.base_url.join(address)?))
                }
            }
            Err(e) => Err(e.into()),
        }
    }

    /// fire blocking request and load content into buffer.
    fn download(&self, url: &Url) -> Result<Vec<u8>, Error> {
        debug!("downloading {}", url);
        let mut response = self.client.get(url.clone()).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Fetch {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let mut buf = Vec::new();
        response.copy_to(&mut buf)?;
        debug!("downloaded {} bytes from {}", buf.len(), url);
        Ok(buf)
    }
}

impl Fetch for Fetcher {
    fn fetch(&self, address: &str) -> Result<Vec<u8>, Error> {
        match self.resolve(address)? {
            Location::Local(path) => {
                debug!("reading {:?}", path);
                Ok(std::fs::read(path)?)
            }
            Location::Remote(url) => self.download(&url),
        }
    }
}
