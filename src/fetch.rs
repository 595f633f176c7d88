use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use crate::error::{Result, SeedError};

/// Source of the raw registry document.
#[async_trait]
pub trait RegistryFetcher {
    async fn fetch(&self) -> Result<String>;
}

/// Downloads the registry with a single GET. No retries.
pub struct HttpFetcher {
    client: reqwest::Client,
    url: String,
}

impl HttpFetcher {
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            url: url.into(),
        })
    }
}

#[async_trait]
impl RegistryFetcher for HttpFetcher {
    async fn fetch(&self) -> Result<String> {
        debug!(url = %self.url, "fetching registry");
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SeedError::HttpStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "registry downloaded");
        Ok(body)
    }
}
