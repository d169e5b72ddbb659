mod api;
mod error;
mod models;

use std::sync::Arc;

use anyhow::Result;
use clap::{Arg, Command};

use api::AppState;
use models::publishers::{LinkedInPublisher, Publisher};
use models::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let matches = Command::new("AutoBlog Publisher")
        .version("0.1")
        .about("AutoBlog Publisher API - posts blog entries to social platforms")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Configuration file path")
                .default_value("config.toml"),
        )
        .get_matches();

    let config_file = matches.get_one::<String>("config").unwrap();

    log::info!("Starting AutoBlog Publisher API");
    log::info!("Config file: {}", config_file);

    // Load configuration
    let config = AppConfig::load(config_file)?;

    // Initialize the publisher once; it lives for the process lifetime
    let publisher: Arc<dyn Publisher> = Arc::new(LinkedInPublisher::new(
        config.linkedin.access_token.clone(),
        config.linkedin.client_id.clone(),
        config.linkedin.client_secret.clone(),
    ));
    log::info!("Initialized publisher: {}", publisher.get_type());

    let app = api::routes(AppState { publisher });

    let addr = format!("{}:{}", config.server.host, config.server.port);
    log::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("AutoBlog Publisher stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    log::info!("Shutdown signal received, stopping server");
}
