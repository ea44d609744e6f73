//! API route handlers
//!
//! - `key`: exposes the configured API key to the frontend
//! - `process`: multipart upload acceptance and extraction dispatch
//!
//! Everything outside `/api/*` falls through to the static asset service
//! mounted in `server::build_router`.

pub mod key;
pub mod process;
