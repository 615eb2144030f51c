use std::path::PathBuf;

/// Errors surfaced by strict parsing and settings loading.
///
/// View lookups never fail: they are total over [`crate::DrugId`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown drug `{0}` (expected one of: alcohol, marihuana, nicotina, cocaina)")]
    UnknownDrug(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings document {path}: {source}")]
    Settings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

pub type Result<T> = std::result::Result<T, Error>;
