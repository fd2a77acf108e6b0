use thiserror::Error;

/// Errors produced while building or analyzing an import profile tree.
#[derive(Error, Debug)]
pub enum ProfileError {
    /// An operation that reads cumulative times ran before aggregation.
    #[error("missing computed field `total_time` on node '{node}' (run calculate_total_time first)")]
    MissingTotalTime { node: String },

    #[error("malformed node: {0}")]
    MalformedNode(String),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ProfileError>;
