//! Run the HTTP API.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::AppConfig;
use crate::enquiry::Dispatcher;
use crate::server::{self, AppState};
use crate::transport::email::HttpEmailTransport;
use crate::transport::store::RestDirectoryStore;

/// Start the server: load config, wire the collaborators, bind, serve.
pub async fn run(port: Option<u16>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vitalis_api=info".parse()?),
        )
        .init();

    let config = AppConfig::from_env().context("configuration error")?;
    let port = port.unwrap_or_else(AppConfig::port_from_env);

    info!("starting vitalis-api v{}", env!("CARGO_PKG_VERSION"));

    let transport = Arc::new(HttpEmailTransport::new(
        config.email_api_url.clone(),
        config.email_api_key.clone(),
    ));
    let dispatcher = Arc::new(Dispatcher::new(transport, config.routing.clone()));
    let store = Arc::new(RestDirectoryStore::new(
        config.directory_api_url.clone(),
        config.directory_api_key.clone(),
    ));

    let state = AppState {
        config: Arc::new(config),
        dispatcher,
        store,
    };

    server::serve(state, port).await
}
