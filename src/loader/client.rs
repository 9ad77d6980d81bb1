use std::time::Duration;
use async_trait::async_trait;
use tracing::debug;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::loader::BookSource;

#[derive(Debug, Clone)]
pub struct HttpBookSource {
    client: reqwest::Client,
}

impl HttpBookSource {
    pub fn new(config: &Configuration) -> LibraryResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;
        Ok(Self {
            client,
        })
    }
}

#[async_trait]
impl BookSource for HttpBookSource {
    // non-2xx responses are errors
    async fn fetch(&self, url: &str) -> LibraryResult<String> {
        debug!("fetching books from {}", url);
        let res = self.client.get(url).send().await?.error_for_status()?;
        Ok(res.text().await?)
    }
}
