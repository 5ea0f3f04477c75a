// src/api/client.rs
//! Listing client: the seam the controller talks to, plus the reqwest-backed
//! implementation.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use tracing::debug;
use url::Url;

use super::{FileEntry, ListingError};

/// Path of the listing endpoint, relative to the server root.
pub const LISTING_ENDPOINT: &str = "/api/files";

/// Anything that can list the children of a backend directory.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ListingClient: Send + Sync {
    /// Fetch the listing for `path` (`.` for the root).
    async fn list_directory(&self, path: &str) -> Result<Vec<FileEntry>, ListingError>;
}

/// Build the request URL for `path`, percent-encoding it into the query.
///
/// `/` is encoded too, so `a/b` becomes `path=a%2Fb`.
pub fn listing_url(endpoint: &Url, path: &str) -> Url {
    let mut url = endpoint.clone();
    url.query_pairs_mut().clear().append_pair("path", path);
    url
}

/// Talks to a fileshare backend over HTTP.
#[derive(Debug, Clone)]
pub struct HttpListingClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpListingClient {
    /// Create a client for the backend rooted at `server`.
    pub fn new(server: &Url) -> Result<Self, url::ParseError> {
        Ok(Self {
            http: reqwest::Client::new(),
            endpoint: server.join(LISTING_ENDPOINT)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ListingClient for HttpListingClient {
    async fn list_directory(&self, path: &str) -> Result<Vec<FileEntry>, ListingError> {
        let url = listing_url(&self.endpoint, path);
        debug!(%url, "requesting listing");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ListingError::Status(status));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
