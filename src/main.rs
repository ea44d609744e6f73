//! docdrop - HTTP backend for single-file uploads
//!
//! This binary serves the upload/extraction API and the static frontend.
//! Configuration comes from the environment (and an optional `.env` file);
//! a missing API key aborts startup before any request is served.

use docdrop::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up a local .env file before resolving configuration
    dotenvy::dotenv().ok();

    let config = ServerConfig::load()?;

    docdrop::start_server(config).await?;

    Ok(())
}
