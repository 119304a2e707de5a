use anyhow::Result;
use clap::Parser;
use money_map_server::config::ServerConfig;
use money_map_server::logging::init_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::parse();

    init_logging(config.verbose);

    let result = money_map_server::serve(config).await;
    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
