use crate::config::ServerConfig;
use crate::extract::PdfEngine;
use std::sync::Arc;

/// Shared application state
///
/// Constructed once at startup and never mutated afterwards, so concurrent
/// request handlers read it without synchronization.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// PDF extraction capability, resolved once at startup
    pub pdf: PdfEngine,
}

impl ServerState {
    /// Create new server state
    pub fn new(config: ServerConfig) -> Self {
        let pdf = if config.pdf_enabled {
            PdfEngine::Enabled
        } else {
            tracing::warn!("PDF extraction disabled; PDF uploads will be rejected");
            PdfEngine::Disabled
        };

        Self {
            config: Arc::new(config),
            pdf,
        }
    }
}
