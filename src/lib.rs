//! Backend for the Vitalis marketing site.
//!
//! Two independent, stateless request paths:
//!
//! - **Enquiry**: an untyped contact-form payload is classified into one of
//!   three variants, rendered as HTML, and dispatched as two emails (an
//!   operational notification, then an acknowledgement) through the email
//!   transport.
//! - **Sitemap**: the hosted provider-directory table is paged through in
//!   full and serialized as sitemap XML — a quality-filtered directory
//!   sitemap, a legacy full sitemap, and an index listing both.
//!
//! External collaborators (the email API and the directory table) sit behind
//! traits in [`transport`] and are injected at startup.

pub mod cli;
pub mod config;
pub mod directory;
pub mod enquiry;
pub mod server;
pub mod sitemap;
pub mod transport;

pub use config::AppConfig;
pub use directory::ProviderRecord;
pub use enquiry::EnquiryForm;
