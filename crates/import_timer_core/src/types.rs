use serde::{Deserialize, Serialize, Serializer, ser::SerializeStruct};

use crate::error::{ProfileError, Result};

/// Label used in diagnostics for nodes whose `text` is empty.
const UNNAMED: &str = "<unnamed>";

/// Distinguishes frames that can be descended into from terminal ones.
///
/// An `Internal` node with no children is still internal: it was recorded as
/// an import frame, it just did not import anything itself.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Leaf,
    Internal(Vec<ImportNode>),
}

/// A single import frame in a profile tree.
///
/// `text[0]` is the module name used for identity; any further entries are
/// free-form annotations. `value` is the time spent in this frame alone, in
/// seconds. `total_time` is absent until the tree has been aggregated.
///
/// Trees are mutated in place by aggregation and sorting. Those calls take
/// `&mut` so the borrow checker serializes them; read-only analyses may share
/// an aggregated tree across threads.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawNode")]
pub struct ImportNode {
    pub text: Vec<String>,
    pub value: f64,
    pub total_time: Option<f64>,
    pub kind: NodeKind,
}

/// Wire shape of a node: the presence of `children` decides leaf vs internal.
#[derive(Deserialize)]
struct RawNode {
    #[serde(default)]
    text: Vec<String>,
    #[serde(default)]
    value: f64,
    #[serde(default)]
    total_time: Option<f64>,
    #[serde(default)]
    children: Option<Vec<ImportNode>>,
}

impl From<RawNode> for ImportNode {
    fn from(raw: RawNode) -> Self {
        let kind = match raw.children {
            Some(children) => NodeKind::Internal(children),
            None => NodeKind::Leaf,
        };
        Self { text: raw.text, value: raw.value, total_time: raw.total_time, kind }
    }
}

impl Serialize for ImportNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let children = self.children();
        let len = 2 + usize::from(self.total_time.is_some()) + usize::from(children.is_some());

        let mut state = serializer.serialize_struct("ImportNode", len)?;
        state.serialize_field("text", &self.text)?;
        state.serialize_field("value", &self.value)?;
        if let Some(total) = self.total_time {
            state.serialize_field("total_time", &total)?;
        }
        if let Some(children) = children {
            state.serialize_field("children", children)?;
        }
        state.end()
    }
}

impl ImportNode {
    pub fn leaf(name: impl Into<String>, value: f64) -> Self {
        Self { text: vec![name.into()], value, total_time: None, kind: NodeKind::Leaf }
    }

    pub fn internal(name: impl Into<String>, value: f64, children: Vec<ImportNode>) -> Self {
        Self {
            text: vec![name.into()],
            value,
            total_time: None,
            kind: NodeKind::Internal(children),
        }
    }

    /// Appends a supplementary label after the identifying name.
    pub fn with_annotation(mut self, label: impl Into<String>) -> Self {
        self.text.push(label.into());
        self
    }

    /// The identifying name, `text[0]`.
    pub fn name(&self) -> Result<&str> {
        self.text.first().map(String::as_str).ok_or_else(|| {
            ProfileError::MalformedNode(format!(
                "node with value {} has an empty `text` label list",
                self.value
            ))
        })
    }

    /// The cumulative time of this subtree, as stored by aggregation.
    pub fn total_time(&self) -> Result<f64> {
        self.total_time.ok_or_else(|| ProfileError::MissingTotalTime {
            node: self.display_name().to_string(),
        })
    }

    /// Name for logs and diagnostics; never fails.
    pub fn display_name(&self) -> &str {
        self.text.first().map(String::as_str).unwrap_or(UNNAMED)
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf)
    }

    pub fn children(&self) -> Option<&[ImportNode]> {
        match &self.kind {
            NodeKind::Internal(children) => Some(children),
            NodeKind::Leaf => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<ImportNode>> {
        match &mut self.kind {
            NodeKind::Internal(children) => Some(children),
            NodeKind::Leaf => None,
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&ImportNode> = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            if let Some(children) = node.children() {
                stack.extend(children);
            }
        }
        count
    }
}
