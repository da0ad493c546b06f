use std::sync::Arc;

use clap::Parser;
use demo_server::{logger, ServerConfig};
use reply_core::ReplyClient;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let config = ServerConfig::parse();
    logger::init_logger(config.verbose);

    let client = ReplyClient::with_base_url(config.api_key.as_str(), &config.base_url);
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(base_url = %client.base_url(), "server running on http://{addr}");

    axum::serve(listener, demo_server::app(Arc::new(client)))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutting down");
        })
        .await
}
