//! Obtaining document bytes.

use std::{path::PathBuf, result::Result as StdResult, sync::Arc};

use async_trait::async_trait;
use config::{BasicAuth, SourceSpec};
use tokio::fs;
use tracing::{debug, trace};

use crate::{FetchError, Result};

/// Where a screen's document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// Bytes already in memory, e.g. a document compiled into the binary.
    Memory(Arc<[u8]>),
    /// A file on disk.
    File(PathBuf),
    /// An HTTP(S) GET.
    Url {
        /// Endpoint URL.
        url: String,
        /// Optional basic auth.
        auth: Option<BasicAuth>,
    },
}

impl DocumentSource {
    /// Resolve a configured source. `bundled` backs [`SourceSpec::Bundled`];
    /// URL credentials are read from the environment here.
    pub fn from_spec(spec: &SourceSpec, bundled: &[u8]) -> Result<Self> {
        Ok(match spec {
            SourceSpec::Bundled => Self::Memory(Arc::from(bundled)),
            SourceSpec::File(path) => Self::File(path.clone()),
            SourceSpec::Url { url, credentials } => Self::Url {
                url: url.clone(),
                auth: credentials.as_ref().map(|c| c.resolve()).transpose()?,
            },
        })
    }

    /// Short description for logs. Never includes credentials.
    pub fn describe(&self) -> String {
        match self {
            Self::Memory(bytes) => format!("memory ({} bytes)", bytes.len()),
            Self::File(path) => path.display().to_string(),
            Self::Url { url, .. } => url.clone(),
        }
    }
}

/// Fetches document bytes. Invoked once per render or reload.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch the raw document at `source`.
    async fn fetch(&self, source: &DocumentSource) -> StdResult<Vec<u8>, FetchError>;
}

/// Reads files with `tokio::fs` and URLs with `reqwest`.
#[derive(Debug, Clone, Default)]
pub struct SourceFetcher {
    /// Shared HTTP connection pool.
    client: reqwest::Client,
}

impl SourceFetcher {
    /// A fetcher with a default HTTP client.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Fetcher for SourceFetcher {
    async fn fetch(&self, source: &DocumentSource) -> StdResult<Vec<u8>, FetchError> {
        trace!(source = %source.describe(), "fetching document");
        let bytes = match source {
            DocumentSource::Memory(bytes) => bytes.to_vec(),
            DocumentSource::File(path) => {
                fs::read(path).await.map_err(|source| FetchError::Io {
                    path: path.clone(),
                    source,
                })?
            }
            DocumentSource::Url { url, auth } => {
                let mut req = self.client.get(url);
                if let Some(auth) = auth {
                    req = req.basic_auth(&auth.username, Some(&auth.password));
                }
                let resp = req.send().await?;
                let status = resp.status();
                if !status.is_success() {
                    return Err(FetchError::Status {
                        url: url.clone(),
                        status: status.as_u16(),
                    });
                }
                resp.bytes().await?.to_vec()
            }
        };
        debug!(source = %source.describe(), bytes = bytes.len(), "document fetched");
        Ok(bytes)
    }
}
