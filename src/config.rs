use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

/// Extra request-body headroom on top of the per-file upload ceiling, so the
/// multipart framing (boundaries, part headers) never eats into the limit a
/// client was promised for the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum uploaded file size in MB
    #[serde(default = "default_max_upload_size_mb")]
    pub max_upload_size_mb: usize,

    /// API key handed to the frontend via `GET /api/key`. Required: startup
    /// fails if this is unset or empty.
    #[serde(default)]
    pub api_key: String,

    /// Whether PDF extraction is available. When disabled, PDF uploads fail
    /// with a deterministic error instead of being parsed.
    #[serde(default = "default_true")]
    pub pdf_enabled: bool,

    /// Directory served for all non-API paths
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            max_upload_size_mb: default_max_upload_size_mb(),
            api_key: String::new(),
            pdf_enabled: true,
            static_dir: default_static_dir(),
            enable_cors: true,
            log_level: default_log_level(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and an optional config file
    ///
    /// The API key is a startup precondition: if it resolves to an empty
    /// string the returned error is fatal and the process must not serve.
    pub fn load() -> anyhow::Result<Self> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("docdrop").required(false))
            // Override with environment variables
            .add_source(config::Environment::with_prefix("DOCDROP").separator("__"));

        let config: ServerConfig = builder.build()?.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Check startup preconditions
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_key.trim().is_empty() {
            anyhow::bail!(
                "api_key is not configured; set DOCDROP__API_KEY in the environment \
                 (or api_key in docdrop.toml)"
            );
        }
        Ok(())
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get max uploaded file size in bytes
    pub fn max_upload_size(&self) -> usize {
        self.max_upload_size_mb * 1024 * 1024
    }

    /// Get the request body cap: the upload ceiling plus multipart framing slack
    pub fn body_limit(&self) -> usize {
        self.max_upload_size() + MULTIPART_OVERHEAD_BYTES
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_upload_size_mb() -> usize {
    10
}

fn default_true() -> bool {
    true
}

fn default_static_dir() -> String {
    "public".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
