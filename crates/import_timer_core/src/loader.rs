use log::{debug, trace};
use serde::Deserialize;
use std::{fs, path::Path};

use crate::{error::Result, types::ImportNode};

impl ImportNode {
    /// Builds a tree from the JSON document emitted by a profile loader.
    ///
    /// Each object carries `text`, an optional `value` and, for frames that
    /// imported something, a `children` array.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let mut deserializer = serde_json::Deserializer::from_str(content);
        // Each frame nests two levels (object and `children` array), and import
        // chains can run hundreds of frames deep.
        deserializer.disable_recursion_limit();
        let root = ImportNode::deserialize(&mut deserializer)?;
        deserializer.end()?;
        debug!("Loaded profile tree '{}' with {} nodes", root.display_name(), root.node_count());
        Ok(root)
    }
}

/// Reads a JSON profile tree from `path`.
pub fn load_profile_json(path: &Path) -> Result<ImportNode> {
    debug!("Reading profile tree from {}", path.display());
    let content = fs::read_to_string(path)?;
    trace!("Read {} bytes from {}", content.len(), path.display());
    ImportNode::from_json_str(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProfileError;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn create_test_file(dir: &Path, path: &str, content: &str) -> PathBuf {
        let file_path = dir.join(path);
        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    #[test]
    fn test_load_profile_json() {
        let temp_dir = TempDir::new().unwrap();
        let file = create_test_file(
            temp_dir.path(),
            "profile.json",
            r#"
{
  "text": ["main"],
  "children": [
    { "text": ["accelerate"], "value": 0.01, "children": [
      { "text": ["torch"], "value": 0.6, "children": [] }
    ] },
    { "text": ["json", "stdlib"], "value": 0.002 }
  ]
}
"#,
        );

        let root = load_profile_json(&file).unwrap();
        assert_eq!(root.name().unwrap(), "main");
        assert_eq!(root.value, 0.0);
        assert_eq!(root.node_count(), 4);

        let children = root.children().unwrap();
        assert_eq!(children[1].text, vec!["json".to_string(), "stdlib".to_string()]);
        assert!(children[1].is_leaf());
    }

    #[test]
    fn test_load_profile_json_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_profile_json(&temp_dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ProfileError::Io(_)));
    }

    fn nested_profile(depth: usize) -> String {
        let mut json = String::from(r#"{"text": ["leaf"], "value": 0.001}"#);
        for i in (0..depth).rev() {
            json = format!(r#"{{"text": ["m{i}"], "value": 0.001, "children": [{json}]}}"#);
        }
        json
    }

    #[test]
    fn test_from_json_str_deep_chain() {
        // Deserializing and dropping a deep tree recurses; give it room.
        let handle = std::thread::Builder::new()
            .stack_size(16 * 1024 * 1024)
            .spawn(|| {
                let root = ImportNode::from_json_str(&nested_profile(300)).unwrap();
                assert_eq!(root.node_count(), 301);
                assert_eq!(root.name().unwrap(), "m0");
            })
            .unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn test_from_json_str_trailing_content() {
        let err = ImportNode::from_json_str(r#"{"text": ["a"]} {"text": ["b"]}"#).unwrap_err();
        assert!(matches!(err, ProfileError::Json(_)));
    }

    #[test]
    fn test_from_json_str_invalid() {
        let err = ImportNode::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ProfileError::Json(_)));
    }

    #[test]
    fn test_from_json_str_wrong_value_type() -> anyhow::Result<()> {
        assert!(ImportNode::from_json_str(r#"{"text": ["a"], "value": "slow"}"#).is_err());
        let ok = ImportNode::from_json_str(r#"{"text": ["a"], "value": 3}"#)?;
        assert_eq!(ok.value, 3.0);
        Ok(())
    }
}
