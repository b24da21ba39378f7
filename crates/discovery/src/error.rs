use thiserror::Error;

pub type Result<T> = std::result::Result<T, DiscoveryError>;

#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed registry snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("Registry snapshot not found at {0}")]
    SnapshotMissing(String),
}
