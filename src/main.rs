//! vitalis-api binary entry point.

use clap::{Parser, Subcommand};

use vitalis_api::cli::sitemap_cmd::SitemapKind;
use vitalis_api::cli::{doctor, serve, sitemap_cmd};

#[derive(Parser)]
#[command(name = "vitalis-api", version, about = "Vitalis marketing site backend")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP API (default).
    Serve {
        /// Listen port; falls back to $PORT, then 3000.
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print a sitemap document to stdout.
    Sitemap {
        #[arg(value_enum)]
        kind: SitemapKind,
    },
    /// Check environment configuration.
    Doctor,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Serve { port: None }) {
        Command::Serve { port } => serve::run(port).await,
        Command::Sitemap { kind } => sitemap_cmd::run(kind).await,
        Command::Doctor => doctor::run(),
    }
}
