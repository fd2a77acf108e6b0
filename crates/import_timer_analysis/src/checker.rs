use log::{debug, info};

use import_timer_core::{ImportNode, Result};

use crate::{
    aggregate::calculate_total_time, config::AnalysisConfig, sort::sort_nodes_by_total_time,
    threshold::get_paths_above_threshold, types::AnalysisResult,
};

/// Aggregates, optionally sorts, and filters `root` according to `cfg`.
///
/// A [`Threshold::FractionOfTotal`] is resolved against the root's total time
/// before filtering.
///
/// [`Threshold::FractionOfTotal`]: crate::Threshold::FractionOfTotal
pub fn run_analysis(root: &mut ImportNode, cfg: &AnalysisConfig) -> Result<AnalysisResult> {
    info!("Starting import time analysis of '{}'", root.display_name());

    let total_time = calculate_total_time(root);
    let nodes_analyzed = root.node_count();
    info!("Profile has {} nodes, total time {:.6}s", nodes_analyzed, total_time);

    if cfg.sort {
        debug!("Sorting children by total time");
        sort_nodes_by_total_time(root)?;
    }

    let threshold = cfg.threshold.resolve(total_time);
    info!("Using threshold {:.6}s ({}) up to depth {}", threshold, cfg.threshold, cfg.max_depth);

    let hot_paths = get_paths_above_threshold(root, threshold, cfg.max_depth)?;
    info!("Import time analysis complete. Found {} hot paths", hot_paths.len());

    Ok(AnalysisResult { hot_paths, total_time, threshold, nodes_analyzed })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Threshold,
        test_utils::{assert_close, names, scenario_tree},
    };
    use import_timer_core::load_profile_json;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_run_analysis_absolute() {
        let mut root = scenario_tree();
        let cfg = AnalysisConfig { threshold: Threshold::Seconds(0.15), max_depth: 5, sort: true };
        let result = run_analysis(&mut root, &cfg).unwrap();

        assert_close(result.total_time, 0.8);
        assert_eq!(result.threshold, 0.15);
        assert_eq!(result.nodes_analyzed, 4);
        assert_eq!(result.hot_paths.len(), 3);
        assert_eq!(names(root.children().unwrap()), vec!["B", "A"]);
    }

    #[test]
    fn test_run_analysis_percent_of_total() {
        let mut root = scenario_tree();
        let cfg = AnalysisConfig { threshold: Threshold::percent(50.0), ..Default::default() };
        let result = run_analysis(&mut root, &cfg).unwrap();

        assert_close(result.threshold, 0.4);
        let paths: Vec<_> = result.hot_paths.iter().map(|h| h.to_path_string()).collect();
        assert_eq!(paths, vec!["root", "root->B"]);
    }

    #[test]
    fn test_run_analysis_without_sort_keeps_order() {
        let mut root = scenario_tree();
        let cfg = AnalysisConfig { sort: false, ..Default::default() };
        let result = run_analysis(&mut root, &cfg).unwrap();

        assert_eq!(names(root.children().unwrap()), vec!["A", "B"]);
        assert!(!result.hot_paths.is_empty());
    }

    #[test]
    fn test_run_analysis_max_depth_zero() {
        let mut root = scenario_tree();
        let cfg = AnalysisConfig { threshold: Threshold::Seconds(0.0), max_depth: 0, sort: true };
        let result = run_analysis(&mut root, &cfg).unwrap();
        assert_eq!(result.hot_paths.len(), 1);
        assert_eq!(result.hot_paths[0].path, vec!["root"]);
    }

    #[test]
    fn test_run_analysis_on_loaded_profile() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("accelerate.json");
        fs::write(
            &file,
            r#"
{
  "text": ["main"],
  "children": [
    { "text": ["json"], "value": 0.002 },
    { "text": ["accelerate"], "value": 0.01, "children": [
      { "text": ["accelerate.accelerator"], "value": 0.015, "children": [
        { "text": ["torch"], "value": 0.6, "children": [] }
      ] },
      { "text": ["accelerate.utils"], "value": 0.03, "children": [] }
    ] }
  ]
}
"#,
        )
        .unwrap();

        let mut root = load_profile_json(&file).unwrap();
        let result = run_analysis(&mut root, &AnalysisConfig::default()).unwrap();

        assert_close(result.total_time, 0.657);
        let paths: Vec<_> = result.hot_paths.iter().map(|h| h.to_path_string()).collect();
        assert_eq!(
            paths,
            vec![
                "main",
                "main->accelerate",
                "main->accelerate->accelerate.accelerator",
                "main->accelerate->accelerate.accelerator->torch",
            ]
        );
        assert_eq!(names(root.children().unwrap()), vec!["accelerate", "json"]);
    }
}
