use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use import_timer_core::Result;

/// How the reporting cutoff is expressed by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Threshold {
    /// Absolute cutoff in seconds
    Seconds(f64),
    /// Share of the profile's total time, in `0.0..=1.0`
    FractionOfTotal(f64),
}

impl Threshold {
    pub fn percent(percent: f64) -> Self {
        Threshold::FractionOfTotal(percent / 100.0)
    }

    /// Converts to an absolute cutoff for a profile whose root totals `total_time`.
    pub fn resolve(&self, total_time: f64) -> f64 {
        match *self {
            Threshold::Seconds(secs) => secs,
            Threshold::FractionOfTotal(fraction) => total_time * fraction,
        }
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Threshold::percent(20.0)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Threshold::Seconds(secs) => write!(f, "{secs}s"),
            Threshold::FractionOfTotal(fraction) => write!(f, "{}% of total", fraction * 100.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub threshold: Threshold,

    /// Deepest frame to report, the root being depth 0
    pub max_depth: usize,

    /// Reorder children by descending total time before filtering
    pub sort: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self { threshold: Threshold::default(), max_depth: 7, sort: true }
    }
}

impl AnalysisConfig {
    pub fn from_json_str(content: &str) -> Result<Self> {
        let cfg: AnalysisConfig = serde_json::from_str(content)?;
        debug!("Loaded analysis config: {:?}", cfg);
        Ok(cfg)
    }
}
