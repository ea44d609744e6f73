//! docdrop - HTTP backend for single-file uploads
//!
//! This crate provides a small HTTP server that accepts one uploaded file per
//! request (an image or a PDF) and returns a JSON extraction result:
//!
//! - **PDF uploads**: extracted plain text, page count, and document metadata
//! - **Image uploads**: the raw bytes base64-encoded, paired with the MIME type
//!
//! It also exposes a configuration value (an API key) to its frontend and
//! serves a static asset directory for all non-API paths.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use docdrop::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     docdrop::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /api/key` - the configured API key as `{ "apiKey": ... }`
//! - `POST /api/process-pdf` - multipart upload of one file under the `pdf`
//!   field; responds `{ "type": "pdf", ... }` or `{ "type": "image", ... }`
//! - `GET /*` - static assets from the configured public directory

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
