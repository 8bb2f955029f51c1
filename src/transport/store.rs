//! REST adapter for the hosted directory table.
//!
//! Speaks the PostgREST dialect the hosting service exposes: column
//! projection via `select`, paging via the `Range` header, and the total row
//! count read back from `Content-Range` when `Prefer: count=exact` is set.

use async_trait::async_trait;

use super::{DirectoryPage, DirectoryStore, StoreError};
use crate::directory::record::ProviderRecord;

/// reqwest-backed [`DirectoryStore`] against the hosted table endpoint.
pub struct RestDirectoryStore {
    client: reqwest::Client,
    table_url: String,
    api_key: String,
}

impl RestDirectoryStore {
    /// `table_url` is the full REST URL of the providers table, e.g.
    /// `https://db.example.com/rest/v1/providers`.
    pub fn new(table_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            table_url: table_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl DirectoryStore for RestDirectoryStore {
    async fn fetch_page(
        &self,
        columns: &[&str],
        start: u64,
        end: u64,
    ) -> Result<DirectoryPage, StoreError> {
        let select = if columns.is_empty() {
            "*".to_string()
        } else {
            columns.join(",")
        };

        let resp = self
            .client
            .get(&self.table_url)
            .query(&[("select", select.as_str())])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Range", format!("{start}-{end}"))
            .header("Prefer", "count=exact")
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;

        let status = resp.status();
        // 206 Partial Content is the normal answer to a ranged request.
        if !status.is_success() {
            let detail = resp.text().await.unwrap_or_default();
            return Err(StoreError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        let total = resp
            .headers()
            .get("content-range")
            .and_then(|v| v.to_str().ok())
            .and_then(parse_content_range_total);

        let rows: Vec<ProviderRecord> = resp
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;

        Ok(DirectoryPage { rows, total })
    }
}

/// Extract the total from a `Content-Range` value like `0-499/1200`.
/// A `*` total (unknown) yields `None`.
fn parse_content_range_total(value: &str) -> Option<u64> {
    value.rsplit('/').next()?.trim().parse().ok()
}
