//! Hot-path analysis for import-time profiles.
//!
//! This crate works on an [`ImportNode`] tree built by a profile loader and
//! locates the import chains that cost the most time:
//! - [`calculate_total_time`] stores the cumulative time of every subtree
//! - [`sort_nodes_by_total_time`] orders each level slowest-first
//! - [`find_path_by_string`] finds a chain such as `accelerate->torch`
//! - [`get_paths_above_threshold`] lists every chain above a cutoff
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use import_timer_analysis::{AnalysisConfig, Threshold, run_analysis};
//! use import_timer_core::ImportNode;
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut root = ImportNode::from_json_str(
//!     r#"{"text": ["main"], "children": [
//!         {"text": ["torch"], "value": 0.6, "children": []},
//!         {"text": ["json"], "value": 0.01}
//!     ]}"#,
//! )?;
//!
//! let cfg = AnalysisConfig { threshold: Threshold::percent(20.0), ..Default::default() };
//! let result = run_analysis(&mut root, &cfg)?;
//!
//! let mut stdout = BufWriter::new(std::io::stdout());
//! if result.hot_paths.is_empty() {
//!     import_timer_analysis::print_no_hot_paths_message(&mut stdout, result.threshold)?;
//! } else {
//!     import_timer_analysis::print_hot_paths(&mut stdout, &result)?;
//! }
//! stdout.flush()?;
//! # Ok(())
//! # }
//! ```
//!
//! [`ImportNode`]: import_timer_core::ImportNode

mod aggregate;
mod checker;
mod config;
mod locate;
mod reporter;
mod sort;
mod threshold;
mod types;

#[cfg(test)]
mod test_utils;

// Re-export public API
pub use aggregate::calculate_total_time;
pub use checker::run_analysis;
pub use config::{AnalysisConfig, Threshold};
pub use locate::{PATH_SEPARATOR, find_first_descendant, find_path_by_string};
pub use reporter::{format_seconds, print_hot_paths, print_no_hot_paths_message};
pub use sort::sort_nodes_by_total_time;
pub use threshold::get_paths_above_threshold;
pub use types::{AnalysisResult, HotPath};
