//! Generate a sitemap document to stdout.
//!
//! Lets operators verify generation against the live directory table without
//! going through the HTTP layer.

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::config::AppConfig;
use crate::directory::fetch_all;
use crate::sitemap;
use crate::transport::store::RestDirectoryStore;

/// Which document to generate.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SitemapKind {
    /// Quality-filtered provider directory sitemap.
    Directory,
    /// Legacy full sitemap: static pages plus every provider row.
    Pages,
    /// Index listing the two sub-sitemaps.
    Index,
}

pub async fn run(kind: SitemapKind) -> Result<()> {
    let config = AppConfig::from_env().context("configuration error")?;

    let xml = match kind {
        SitemapKind::Index => sitemap::sitemap_index(&config.base_url)?,
        SitemapKind::Directory | SitemapKind::Pages => {
            let store =
                RestDirectoryStore::new(config.directory_api_url, config.directory_api_key);
            let columns: &[&str] = match kind {
                SitemapKind::Pages => &["id", "updated_at"],
                _ => &[],
            };
            let rows = fetch_all(&store, columns)
                .await
                .context("directory fetch failed")?;
            match kind {
                SitemapKind::Directory => sitemap::directory_sitemap(&config.base_url, &rows)?,
                _ => sitemap::pages_sitemap(&config.base_url, &rows)?,
            }
        }
    };

    println!("{xml}");
    Ok(())
}
