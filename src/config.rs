//! Environment configuration.
//!
//! Everything the service needs comes from the environment: the public base
//! URL for generated links, the hosted directory table, the email API, and
//! the per-variant enquiry routing. Required variables fail fast by name.

use thiserror::Error;
use url::Url;

use crate::enquiry::{EnquiryRouting, Route};

/// Default listen port for `serve`.
pub const DEFAULT_PORT: u16 = 3000;

/// Variables the service reads, with whether each is required. `doctor`
/// walks this list.
pub const ENV_VARS: [(&str, bool); 10] = [
    ("VITALIS_BASE_URL", true),
    ("DIRECTORY_API_URL", true),
    ("DIRECTORY_API_KEY", true),
    ("EMAIL_API_URL", true),
    ("EMAIL_API_KEY", true),
    ("ENQUIRY_MEMBERS_TO", true),
    ("ENQUIRY_CLIENTS_TO", true),
    ("ENQUIRY_QUOTES_TO", true),
    ("ENQUIRY_FROM", true),
    ("ENQUIRY_DISPLAY_TO", false),
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("{name} is not a valid URL: {source}")]
    InvalidUrl {
        name: &'static str,
        source: url::ParseError,
    },
}

/// Runtime configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Public site base, no trailing slash. Generated sitemap locations and
    /// sub-sitemap references are rooted here.
    pub base_url: String,
    pub directory_api_url: String,
    pub directory_api_key: String,
    pub email_api_url: String,
    pub email_api_key: String,
    pub routing: EnquiryRouting,
}

impl AppConfig {
    /// Read and validate configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = required("VITALIS_BASE_URL")?;
        Url::parse(&base_url).map_err(|source| ConfigError::InvalidUrl {
            name: "VITALIS_BASE_URL",
            source,
        })?;
        let base_url = base_url.trim_end_matches('/').to_string();

        let from = required("ENQUIRY_FROM")?;
        let members_to = required("ENQUIRY_MEMBERS_TO")?;
        let routing = EnquiryRouting {
            // The display label defaults to the member desk address.
            display_to: optional("ENQUIRY_DISPLAY_TO").unwrap_or_else(|| members_to.clone()),
            existing_member: Route {
                to: members_to,
                from: from.clone(),
            },
            prospective_client: Route {
                to: required("ENQUIRY_CLIENTS_TO")?,
                from: from.clone(),
            },
            quote_request: Route {
                to: required("ENQUIRY_QUOTES_TO")?,
                from,
            },
        };

        Ok(Self {
            base_url,
            directory_api_url: required("DIRECTORY_API_URL")?,
            directory_api_key: required("DIRECTORY_API_KEY")?,
            email_api_url: required("EMAIL_API_URL")?,
            email_api_key: required("EMAIL_API_KEY")?,
            routing,
        })
    }

    /// Listen port from `PORT`, falling back to [`DEFAULT_PORT`].
    pub fn port_from_env() -> u16 {
        std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT)
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    optional(name).ok_or(ConfigError::Missing(name))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
