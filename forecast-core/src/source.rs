//! Abstraction over payload acquisition.
//!
//! Fetching is an external collaborator's job: this core never performs
//! HTTP, retries, or caching. Anything that can hand over a parsed
//! [`ProviderPayload`] — an HTTP client, a file, a test fixture — plugs in
//! through this trait. Acquisition failures stay on this side of the
//! boundary; the normalization core itself never errors.

use async_trait::async_trait;
use std::fmt::Debug;
use std::path::PathBuf;

use crate::payload::ProviderPayload;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read payload from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("payload is not valid provider JSON")]
    Malformed(#[from] serde_json::Error),
}

/// A collaborator that can produce one provider payload per invocation.
#[async_trait]
pub trait ForecastSource: Send + Sync + Debug {
    async fn fetch(&self) -> Result<ProviderPayload, SourceError>;
}
