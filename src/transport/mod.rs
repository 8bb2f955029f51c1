//! Ports for the two external collaborators: the transactional email API and
//! the remote provider-directory table. Concrete adapters are constructed once
//! at startup and injected, so tests can substitute doubles.

pub mod email;
pub mod store;

use async_trait::async_trait;
use thiserror::Error;

use crate::directory::record::ProviderRecord;

/// An email ready to hand to the transport. Ephemeral; built per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html_body: String,
    pub reply_to: Option<String>,
}

/// Email transport failure. All failures are fatal to the current request;
/// there is no transient/permanent distinction and no retry.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("email transport request failed: {0}")]
    Request(String),
    #[error("email transport rejected the message: {status} {detail}")]
    Rejected { status: u16, detail: String },
}

/// Outbound email delivery.
#[async_trait]
pub trait EmailTransport: Send + Sync {
    /// Send one email. Returns the transport-assigned message identifier
    /// when the transport provides one.
    async fn send(&self, email: &OutboundEmail) -> Result<Option<String>, TransportError>;
}

/// One page of provider rows plus the source-reported total, when known.
#[derive(Debug, Clone)]
pub struct DirectoryPage {
    pub rows: Vec<ProviderRecord>,
    pub total: Option<u64>,
}

/// Data-source failure. Aborts the whole fetch; no partial results.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("directory request failed: {0}")]
    Request(String),
    #[error("directory returned {status}: {detail}")]
    Status { status: u16, detail: String },
    #[error("directory response could not be decoded: {0}")]
    Decode(String),
}

/// Read-only access to the provider directory table.
#[async_trait]
pub trait DirectoryStore: Send + Sync {
    /// Fetch rows in the inclusive range `[start, end]`, projecting `columns`
    /// (empty slice = all columns).
    async fn fetch_page(
        &self,
        columns: &[&str],
        start: u64,
        end: u64,
    ) -> Result<DirectoryPage, StoreError>;
}
