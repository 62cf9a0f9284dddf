use crate::core::{PartSummary, PartsService};
use crate::utils::error::{CatalogueError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Compatible-parts lookup over HTTP.
///
/// Issues `GET {endpoint}/parts/{part_number}/compatible` and expects a JSON
/// array of part summaries. No retries.
#[derive(Debug, Clone)]
pub struct HttpPartsService {
    client: Client,
    endpoint: String,
    api_token: Option<String>,
    timeout: Duration,
}

impl HttpPartsService {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            api_token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn compatible_parts_url(&self, part_number: &str) -> String {
        format!("{}/parts/{}/compatible", self.endpoint, part_number)
    }
}

#[async_trait]
impl PartsService for HttpPartsService {
    async fn find_all_compatible_parts(&self, part_number: &str) -> Result<Vec<PartSummary>> {
        let url = self.compatible_parts_url(part_number);
        tracing::debug!("Making lookup request to: {}", url);

        let mut request = self.client.get(&url).timeout(self.timeout);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("Lookup response status: {}", status);

        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("unknown status");
            let message = match response.text().await {
                Ok(body) if !body.trim().is_empty() => body,
                Ok(_) => reason.to_string(),
                Err(e) => {
                    tracing::debug!("Could not read lookup error body: {}", e);
                    reason.to_string()
                }
            };
            return Err(CatalogueError::LookupError {
                status: status.as_u16(),
                message,
            });
        }

        let parts: Vec<PartSummary> = response.json().await?;
        Ok(parts)
    }
}
