// src/fetch/mod.rs

use anyhow::{Context, Result};
use futures::future::{BoxFuture, FutureExt};
use reqwest::Client;
use std::path::Path;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::model::{ApiResponse, StateRecord};

/// DataUSA population by state, latest year only.
pub const DEFAULT_API_URL: &str =
    "https://datausa.io/api/data?drilldowns=State&measures=Population&year=latest";

/// Source of the raw state records.
///
/// `Ok(None)` means the payload arrived but had no `data` field.
pub trait DataProvider {
    fn fetch(&self) -> BoxFuture<'_, Result<Option<Vec<StateRecord>>>>;
}

/// Decode an API body. Unknown top-level keys (e.g. `source`) are ignored.
///
/// Rows that don't decode as a [`StateRecord`] are logged and skipped; the
/// rest of the dataset is kept.
pub fn parse_response(body: &str) -> Result<Option<Vec<StateRecord>>> {
    let resp: ApiResponse = serde_json::from_str(body).context("decoding API response")?;
    let Some(rows) = resp.data else {
        return Ok(None);
    };

    let mut records = Vec::with_capacity(rows.len());
    for (i, row) in rows.into_iter().enumerate() {
        match serde_json::from_value::<StateRecord>(row) {
            Ok(rec) => records.push(rec),
            Err(e) => warn!(row = i, error = %e, "skipping malformed record"),
        }
    }
    Ok(Some(records))
}

/// Fetches the dataset with a single GET. No retries.
#[derive(Clone, Debug)]
pub struct HttpProvider {
    client: Client,
    url: Url,
}

impl HttpProvider {
    pub fn new(client: Client, url: Url) -> Self {
        Self { client, url }
    }

    #[instrument(level = "info", skip(self), fields(url = %self.url))]
    async fn get(&self) -> Result<Option<Vec<StateRecord>>> {
        debug!("requesting dataset");
        let body = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .with_context(|| format!("GET {} failed", self.url))?
            .error_for_status()
            .with_context(|| format!("Non-success status {}", self.url))?
            .text()
            .await
            .with_context(|| format!("Reading body from {}", self.url))?;
        info!(bytes = body.len(), "received response");
        parse_response(&body)
    }
}

impl DataProvider for HttpProvider {
    fn fetch(&self) -> BoxFuture<'_, Result<Option<Vec<StateRecord>>>> {
        self.get().boxed()
    }
}

/// Serves a fixed JSON payload, e.g. a saved API response on disk.
#[derive(Clone, Debug)]
pub struct StaticProvider {
    body: String,
}

impl StaticProvider {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let body = std::fs::read_to_string(path)
            .with_context(|| format!("reading payload from {}", path.display()))?;
        Ok(Self { body })
    }
}

impl DataProvider for StaticProvider {
    fn fetch(&self) -> BoxFuture<'_, Result<Option<Vec<StateRecord>>>> {
        async move { parse_response(&self.body) }.boxed()
    }
}
