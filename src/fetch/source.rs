use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::SourceConfig;
use crate::fetch::error::FetchError;
use crate::model::Dataset;

/// Something that can produce the full record list in one read.
///
/// The HTTP endpoint is the production implementation; tests plug in
/// scripted sources.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Short name for logging.
    fn name(&self) -> &str;

    /// Perform exactly one read. No retries.
    async fn fetch(&self) -> Result<Dataset, FetchError>;
}

/// Unparameterized GET against a fixed endpoint returning a JSON array.
pub struct HttpSource {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpSource {
    pub fn new(config: &SourceConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            timeout: Duration::from_secs(config.timeout_seconds.into()),
        })
    }
}

#[async_trait]
impl RecordSource for HttpSource {
    fn name(&self) -> &str {
        &self.endpoint
    }

    async fn fetch(&self) -> Result<Dataset, FetchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let dataset: Dataset = serde_json::from_slice(&body)?;

        tracing::debug!(
            endpoint = %self.endpoint,
            records = dataset.len(),
            bytes = body.len(),
            "Fetched record list"
        );

        Ok(dataset)
    }
}
