use std::path::PathBuf;

use clap::{
    Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};

use spinlist::{config, error, info, management::SessionManager, server, warning};
use tokio::net::TcpListener;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Address to listen on, e.g. 127.0.0.1:8080
    #[clap(long)]
    address: Option<String>,

    /// Load environment variables from this file instead of ./.env
    #[clap(long)]
    env_file: Option<PathBuf>,

    /// Do not open the browser after startup
    #[clap(long)]
    no_open: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = config::load_env(cli.env_file.as_deref()) {
        error!("Cannot load environment. Err: {}", e);
    }
    if let Err(missing) = config::validate() {
        error!("Missing configuration: {} is not set", missing);
    }

    let addr = cli.address.unwrap_or_else(config::server_addr);
    let sessions = SessionManager::new();

    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", addr, e),
    };

    let page_url = format!("http://{}/", addr);
    info!("Listening on {}", page_url);

    if !cli.no_open && webbrowser::open(&page_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            page_url
        )
    }

    if let Err(e) = server::serve(listener, sessions).await {
        error!("Server stopped: {}", e);
    }
}
