//! Fetch the complete provider table through bounded range requests.
//!
//! Pages are requested one at a time in increasing offset order. The loop
//! stops on an empty page or once the cumulative row count reaches the
//! source-reported total; a hard page cap turns a misbehaving source (a
//! total that never converges) into an error instead of an endless loop.

use thiserror::Error;
use tracing::debug;

use crate::transport::{DirectoryStore, StoreError};
use crate::ProviderRecord;

/// Rows requested per range query.
pub const PAGE_SIZE: u64 = 500;

/// Hard cap on page requests per fetch. 40 pages = 20k rows, well above the
/// directory's actual size; hitting the cap means the source is misreporting
/// its total.
pub const MAX_PAGES: u64 = 40;

/// Full-table fetch failure.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("directory exceeded expected size: {fetched} rows after {MAX_PAGES} pages")]
    ExceededExpectedSize { fetched: usize },
}

/// Fetch every row of the directory table, projecting `columns` (empty slice
/// = all columns). Rows come back in retrieval order. Any page failure aborts
/// the whole fetch; no partial results are returned.
pub async fn fetch_all(
    store: &dyn DirectoryStore,
    columns: &[&str],
) -> Result<Vec<ProviderRecord>, DirectoryError> {
    let mut rows: Vec<ProviderRecord> = Vec::new();
    let mut offset: u64 = 0;

    for page_no in 0..MAX_PAGES {
        let page = store
            .fetch_page(columns, offset, offset + PAGE_SIZE - 1)
            .await?;
        debug!(
            page = page_no,
            rows = page.rows.len(),
            total = ?page.total,
            "fetched directory page"
        );

        if page.rows.is_empty() {
            return Ok(rows);
        }

        rows.extend(page.rows);
        offset += PAGE_SIZE;

        if let Some(total) = page.total {
            if rows.len() as u64 >= total {
                return Ok(rows);
            }
        }
    }

    Err(DirectoryError::ExceededExpectedSize {
        fetched: rows.len(),
    })
}
