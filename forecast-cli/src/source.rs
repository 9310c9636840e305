use async_trait::async_trait;
use std::path::PathBuf;

use forecast_core::{ForecastSource, ProviderPayload, SourceError};

/// File-backed payload source; `-` reads from stdin. Stands in for the
/// HTTP fetch collaborator, which is out of scope for these tools.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl ForecastSource for FileSource {
    async fn fetch(&self) -> Result<ProviderPayload, SourceError> {
        let raw = if self.path.as_os_str() == "-" {
            std::io::read_to_string(std::io::stdin()).map_err(|source| SourceError::Read {
                path: self.path.clone(),
                source,
            })?
        } else {
            tokio::fs::read_to_string(&self.path)
                .await
                .map_err(|source| SourceError::Read {
                    path: self.path.clone(),
                    source,
                })?
        };

        Ok(serde_json::from_str(&raw)?)
    }
}
