use serde::Serialize;

use crate::locate::PATH_SEPARATOR;

/// A chain of frames whose cumulative time exceeded the threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotPath {
    /// Names from the root down to the reported frame, inclusive
    pub path: Vec<String>,
    pub total_time: f64,
}

impl HotPath {
    /// Depth of the reported frame, the root being 0.
    pub fn depth(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Name of the reported frame.
    pub fn leaf_name(&self) -> &str {
        self.path.last().map(String::as_str).unwrap_or_default()
    }

    /// The path joined with [`PATH_SEPARATOR`].
    pub fn to_path_string(&self) -> String {
        self.path.join(PATH_SEPARATOR)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub hot_paths: Vec<HotPath>,
    /// Cumulative time of the whole profile
    pub total_time: f64,
    /// Absolute threshold the paths were compared against
    pub threshold: f64,
    pub nodes_analyzed: usize,
}
