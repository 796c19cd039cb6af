//! Error type for dashboard core operations.
//!
//! The core is pure computation, so very little can actually fail: the only
//! fallible surface is serialising presentation structures for machine-
//! readable output. Data-shape gaps (missing optional fields, unknown status
//! strings) are handled by fallback rendering, never by raising.

#[derive(Debug, thiserror::Error)]
pub enum OpsError {
    #[error("failed to serialize view: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type OpsResult<T> = std::result::Result<T, OpsError>;
