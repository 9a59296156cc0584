use clap::Parser;
use news_core::config::DEFAULT_BASE_URL;
use news_core::{Article, NewsApiConfig, Result};
use news_fetch::{HttpNewsClient, NewsService};
use news_storage::DEFAULT_DATABASE_PATH;
use news_web::AppState;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

mod logging;

#[derive(Parser, Debug)]
#[command(author, version, about = "Fetch news articles into a local store and serve them over HTTP", long_about = None)]
pub struct Cli {
    /// Base URL of the news API, including the trailing slash
    #[arg(long, env = "NEWSAPI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
    #[arg(long, env = "NEWSAPI_API_KEY", default_value = "", hide_env_values = true)]
    api_key: String,
    /// Storage backend: memory or sqlite
    #[arg(long, env = "NEWS_STORAGE", default_value = "memory")]
    storage: String,
    #[arg(long, env = "NEWS_DATABASE_PATH", default_value = DEFAULT_DATABASE_PATH)]
    database_path: PathBuf,
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve the HTTP API
    Serve {
        #[arg(long, env = "NEWS_LISTEN_ADDR", default_value = "0.0.0.0:8080")]
        addr: SocketAddr,
    },
    /// Fetch once and print the stored articles
    Fetch {
        /// Path relative to the base URL, with its own query string (e.g. "everything?q=rust")
        #[arg(long)]
        path: Option<String>,
    },
    /// Print one page of stored articles, newest first
    List {
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        page: i64,
        #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
        size: i64,
    },
}

fn print_articles(articles: &[Article]) -> Result<()> {
    if articles.is_empty() {
        info!("📭 No articles");
        return Ok(());
    }
    println!("{}", serde_json::to_string_pretty(articles)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let config = NewsApiConfig::new(cli.base_url, cli.api_key);
    if let Err(e) = config.validate() {
        warn!("⚠️ {}; fetch requests will fail until it is set", e);
    }

    let store = news_storage::create_storage(&cli.storage, Some(cli.database_path.as_path())).await?;
    let service = NewsService::new(config, Arc::new(HttpNewsClient::new()), store);

    let stored = service.store().count().await?;
    info!("✨ Storage initialized ({} articles stored, using {})", stored, cli.storage);

    match cli.command {
        Commands::Serve { addr } => news_web::serve(AppState::new(service), addr).await,
        Commands::Fetch { path } => {
            let articles = match path {
                Some(path) => service.fetch_articles_with_path(&path).await?,
                None => service.fetch_articles().await?,
            };
            print_articles(&articles)
        }
        Commands::List { page, size } => {
            let articles = service.find_paginated(page, size).await?;
            print_articles(&articles)
        }
    }
}
