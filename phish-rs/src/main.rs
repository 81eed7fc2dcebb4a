//! phish-rs: Phishing Email Detection API
//!
//! Serves a pre-trained phishing/legitimate email classifier
//! over a small HTTP API.

use anyhow::Context;
use phish_rs::api::ApiServer;
use phish_rs::config::Config;
use phish_rs::inference::InferenceContext;
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "phish_rs=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting phish-rs v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let mut config = if let Some(config_path) = std::env::args().nth(1) {
        info!("Loading configuration from {}", config_path);
        Config::from_file(Path::new(&config_path))?
    } else {
        info!("No config file specified, using development defaults");
        Config::development()
    };

    // PORT environment variable takes precedence over the config file
    if let Ok(port) = std::env::var("PORT") {
        config.server.port = port
            .parse()
            .with_context(|| format!("Invalid PORT value '{}'", port))?;
    }

    // Load artifacts once, before accepting requests. A failure leaves the
    // service running in degraded mode rather than aborting.
    let inference = match InferenceContext::load(&config.model) {
        Ok(context) => Some(context),
        Err(e) => {
            error!("Error loading model/vectorizer: {}", e);
            None
        }
    };

    let server = ApiServer::new(inference, config.server.listen_addr());
    server.run().await?;

    Ok(())
}
