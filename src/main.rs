use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use travel_destinations::utils::logger;
use travel_destinations::{
    router, serve, CliArgs, DestinationService, InMemoryDestinationStore, ServerConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let config = match ServerConfig::load(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration validation failed: {}", e);
            std::process::exit(1);
        }
    };

    logger::init_logger(&config.log_level, config.json_logs);

    tracing::info!("Starting travel-destinations {}", env!("CARGO_PKG_VERSION"));
    if config.verbose {
        tracing::debug!("Server config: {:?}", config);
    }

    let addr = config.socket_addr()?;

    // Store lives for the whole process; nothing is persisted across restarts.
    let service = Arc::new(DestinationService::new(InMemoryDestinationStore::new()));
    let app = router(service);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    serve(listener, app).await?;

    Ok(())
}
