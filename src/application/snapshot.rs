//! Rendered-board snapshots serialized by a browser harness.
//!
//! A snapshot is a JSON document:
//!
//! ```json
//! {
//!   "root": { "kind": "div", "class": "results", "children": [ ... ] },
//!   "stylesheet": { "cell-hit": "rgb(34, 238, 51)" }
//! }
//! ```
//!
//! Every node has a `kind` and optional `class`, `text`, `background` and
//! `children`. `background` is the computed background color captured by the
//! harness; `stylesheet` supplies colors for classes whose nodes carry none.

use std::collections::BTreeMap;
use std::path::Path;

use generational_arena::Index;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::{ApplicationResult, JsonResultExt};
use crate::domain::{ComputedStyle, DomArena, NodeData};

/// Color reported for nodes without any background.
pub const TRANSPARENT: &str = "rgba(0, 0, 0, 0)";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotNode {
    pub kind: String,
    #[serde(default, rename = "class")]
    pub class_name: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SnapshotNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotDocument {
    pub root: SnapshotNode,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub stylesheet: BTreeMap<String, String>,
}

/// A parsed snapshot: the rendered tree plus its class colors.
#[derive(Debug)]
pub struct Snapshot {
    pub tree: DomArena,
    pub root: Index,
    pub stylesheet: BTreeMap<String, String>,
}

impl Snapshot {
    /// Parse snapshot JSON. `path` is only used in error messages.
    pub fn parse(json: &str, path: &Path) -> ApplicationResult<Self> {
        let document: SnapshotDocument = serde_json::from_str(json).with_snapshot_path(path)?;
        Ok(Self::from_document(document))
    }

    pub fn from_document(document: SnapshotDocument) -> Self {
        let mut tree = DomArena::new();
        let root = insert(&mut tree, document.root, None);
        debug!("snapshot has {} nodes", tree.len());
        Self {
            tree,
            root,
            stylesheet: document.stylesheet,
        }
    }

    /// Style lookup for this snapshot, falling back to `fallback` for classes
    /// the snapshot has no color for.
    pub fn styles<'a>(&'a self, fallback: &'a BTreeMap<String, String>) -> SnapshotStyles<'a> {
        SnapshotStyles {
            tree: &self.tree,
            stylesheet: &self.stylesheet,
            fallback,
        }
    }
}

fn insert(tree: &mut DomArena, node: SnapshotNode, parent: Option<Index>) -> Index {
    let SnapshotNode {
        kind,
        class_name,
        text,
        background,
        children,
    } = node;
    let idx = tree.insert_node(
        NodeData {
            kind,
            class_name,
            text,
            background,
        },
        parent,
    );
    for child in children {
        insert(tree, child, Some(idx));
    }
    idx
}

/// Computed background colors for snapshot nodes.
///
/// Resolution order: the node's captured `background`, the snapshot
/// stylesheet entry for its class, the fallback entry for its class, then
/// [`TRANSPARENT`].
#[derive(Debug, Clone, Copy)]
pub struct SnapshotStyles<'a> {
    tree: &'a DomArena,
    stylesheet: &'a BTreeMap<String, String>,
    fallback: &'a BTreeMap<String, String>,
}

impl ComputedStyle<Index> for SnapshotStyles<'_> {
    fn background_color(&self, node: Index) -> String {
        let Some(node) = self.tree.get_node(node) else {
            return TRANSPARENT.to_string();
        };
        node.data
            .background
            .as_ref()
            .or_else(|| self.stylesheet.get(&node.data.class_name))
            .or_else(|| self.fallback.get(&node.data.class_name))
            .cloned()
            .unwrap_or_else(|| TRANSPARENT.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::domain::RenderedTree;
    use std::path::PathBuf;

    const DOC: &str = r#"{
        "root": {
            "kind": "div",
            "class": "results",
            "children": [
                {"kind": "div", "class": "a", "text": "X", "background": "rgb(1, 2, 3)"},
                {"kind": "div", "class": "b", "text": "Y"},
                {"kind": "div", "class": "c"},
                {"kind": "div"}
            ]
        },
        "stylesheet": {"b": "rgb(4, 5, 6)"}
    }"#;

    #[test]
    fn given_json_when_parsing_then_builds_tree_in_order() {
        let snapshot = Snapshot::parse(DOC, Path::new("doc.json")).unwrap();

        assert_eq!(snapshot.tree.len(), 5);
        assert_eq!(snapshot.tree.text_content(snapshot.root), "XY");
        let classes: Vec<_> = snapshot
            .tree
            .children(snapshot.root)
            .into_iter()
            .map(|c| snapshot.tree.style_class(c).to_string())
            .collect();
        assert_eq!(classes, vec!["a", "b", "c", ""]);
    }

    #[test]
    fn given_nodes_when_resolving_colors_then_follows_precedence() {
        let snapshot = Snapshot::parse(DOC, Path::new("doc.json")).unwrap();
        let mut fallback = BTreeMap::new();
        fallback.insert("b".to_string(), "rgb(9, 9, 9)".to_string());
        fallback.insert("c".to_string(), "rgb(7, 8, 9)".to_string());
        let styles = snapshot.styles(&fallback);

        let colors: Vec<_> = snapshot
            .tree
            .children(snapshot.root)
            .into_iter()
            .map(|c| styles.background_color(c))
            .collect();

        assert_eq!(
            colors,
            vec!["rgb(1, 2, 3)", "rgb(4, 5, 6)", "rgb(7, 8, 9)", TRANSPARENT]
        );
    }

    #[test]
    fn given_invalid_json_when_parsing_then_reports_path() {
        let err = Snapshot::parse("{\"root\": 3}", Path::new("broken.json")).unwrap_err();

        match err {
            ApplicationError::Snapshot { path, .. } => assert_eq!(path, PathBuf::from("broken.json")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
