//! Sitemap documents for the marketing site: the quality-filtered provider
//! directory sitemap, the legacy full sitemap, and the index tying them
//! together.

pub mod build;

pub use build::{directory_sitemap, pages_sitemap, sitemap_index, ChangeFreq, SitemapEntry};
