//! Data loading: fetch a CSV payload and parse it into rows.
//!
//! The widget only sees the [`DataLoader`] boundary. [`HttpLoader`] is the
//! production implementation; [`StaticLoader`] serves payloads the host
//! already holds.

use crate::data::csv_parser::parse_csv_content;
use crate::data::error::{DataError, DataResult};
use crate::types::Row;
use std::collections::HashMap;
use std::future::Future;
use std::time::Instant;

/// Source of raw CSV text for a URL.
pub trait DataLoader {
    /// Fetch the payload behind `url`. Single attempt, no retries.
    fn fetch(&self, url: &str) -> impl Future<Output = DataResult<String>>;
}

/// Fetch `url` through `loader` and parse the payload.
pub async fn load_rows<L: DataLoader>(loader: &L, url: &str) -> DataResult<Vec<Row>> {
    let start = Instant::now();
    let content = loader.fetch(url).await?;
    let rows = parse_csv_content(&content)?;
    tracing::debug!(
        url,
        rows = rows.len(),
        bytes = content.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Loaded CSV"
    );
    Ok(rows)
}

/// Fetches payloads over HTTP(S).
#[derive(Clone, Debug, Default)]
pub struct HttpLoader {
    client: reqwest::Client,
}

impl HttpLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured client (timeouts, proxies, headers).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl DataLoader for HttpLoader {
    fn fetch(&self, url: &str) -> impl Future<Output = DataResult<String>> {
        async move {
            let response = self.client.get(url).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(DataError::Http {
                    status: status.as_u16(),
                    url: url.to_string(),
                });
            }
            Ok(response.text().await?)
        }
    }
}

/// Serves in-memory payloads keyed by URL.
///
/// URLs without an entry fail with [`DataError::InvalidUrl`].
#[derive(Clone, Debug, Default)]
pub struct StaticLoader {
    payloads: HashMap<String, Result<String, String>>,
}

impl StaticLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a payload for `url`.
    pub fn with_body(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.payloads.insert(url.into(), Ok(body.into()));
        self
    }

    /// Make every fetch of `url` fail with `message`.
    pub fn with_failure(mut self, url: impl Into<String>, message: impl Into<String>) -> Self {
        self.payloads.insert(url.into(), Err(message.into()));
        self
    }
}

impl DataLoader for StaticLoader {
    fn fetch(&self, url: &str) -> impl Future<Output = DataResult<String>> {
        let result = match self.payloads.get(url) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(message)) => Err(DataError::Other(message.clone())),
            None => Err(DataError::InvalidUrl(url.to_string())),
        };
        std::future::ready(result)
    }
}
