//! Arena-backed snapshot of a rendered display tree.

use std::fmt;

use generational_arena::{Arena, Index};
use termtree::Tree;
use tracing::instrument;

use crate::domain::dom::RenderedTree;

/// Data payload of one rendered node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeData {
    /// Tag or kind, e.g. `div`
    pub kind: String,
    /// Style class identifier (may be shared across many nodes)
    pub class_name: String,
    /// Text owned directly by this node (not including descendants)
    pub text: String,
    /// Computed background color, if the snapshot recorded one
    pub background: Option<String>,
}

impl NodeData {
    pub fn new(kind: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            class_name: class_name.into(),
            ..Self::default()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = Some(background.into());
        self
    }
}

impl fmt::Display for NodeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.kind)?;
        if !self.class_name.is_empty() {
            write!(f, " class=\"{}\"", self.class_name)?;
        }
        if let Some(background) = &self.background {
            write!(f, " bg=\"{}\"", background)?;
        }
        write!(f, ">")?;
        if !self.text.is_empty() {
            write!(f, " {:?}", self.text)?;
        }
        Ok(())
    }
}

/// Tree node in the arena.
#[derive(Debug)]
pub struct DomNode {
    pub data: NodeData,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes in document order
    pub children: Vec<Index>,
}

/// Owned, arena-based rendered tree.
///
/// Uses a generational arena so node handles are `Copy` and stale handles
/// are detected instead of aliasing a different node.
#[derive(Debug)]
pub struct DomArena {
    arena: Arena<DomNode>,
    root: Option<Index>,
}

impl Default for DomArena {
    fn default() -> Self {
        Self::new()
    }
}

impl DomArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Insert a node, appending it as the last child of `parent`.
    ///
    /// A node inserted without a parent becomes the root.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(&mut self, data: NodeData, parent: Option<Index>) -> Index {
        let node = DomNode {
            data,
            parent,
            children: Vec::new(),
        };
        let node_idx = self.arena.insert(node);

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(node_idx);
            }
        } else {
            self.root = Some(node_idx);
        }

        node_idx
    }

    pub fn get_node(&self, idx: Index) -> Option<&DomNode> {
        self.arena.get(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Pre-order iterator in document order, starting at the root.
    pub fn iter(&self) -> DocumentOrderIterator<'_> {
        DocumentOrderIterator::new(self)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        if let Some(root) = self.root {
            self.calculate_depth(root)
        } else {
            0
        }
    }

    fn calculate_depth(&self, node_idx: Index) -> usize {
        if let Some(node) = self.get_node(node_idx) {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }

    fn collect_text(&self, node_idx: Index, out: &mut String) {
        if let Some(node) = self.get_node(node_idx) {
            out.push_str(&node.data.text);
            for &child in &node.children {
                self.collect_text(child, out);
            }
        }
    }

    /// Render the tree for terminal display.
    pub fn to_tree_string(&self) -> Tree<String> {
        fn build(arena: &DomArena, node_idx: Index) -> Tree<String> {
            match arena.get_node(node_idx) {
                Some(node) => Tree::new(node.data.to_string()).with_leaves(
                    node.children.iter().map(|&child| build(arena, child)),
                ),
                None => Tree::new(String::from("<stale>")),
            }
        }

        match self.root {
            Some(root) => build(self, root),
            None => Tree::new(String::from("<empty>")),
        }
    }
}

impl RenderedTree for DomArena {
    type Node = Index;

    fn kind(&self, node: Index) -> &str {
        self.get_node(node).map(|n| n.data.kind.as_str()).unwrap_or("")
    }

    fn style_class(&self, node: Index) -> &str {
        self.get_node(node)
            .map(|n| n.data.class_name.as_str())
            .unwrap_or("")
    }

    fn text_content(&self, node: Index) -> String {
        let mut text = String::new();
        self.collect_text(node, &mut text);
        text
    }

    fn children(&self, node: Index) -> Vec<Index> {
        self.get_node(node)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }
}

pub struct DocumentOrderIterator<'a> {
    arena: &'a DomArena,
    stack: Vec<Index>,
}

impl<'a> DocumentOrderIterator<'a> {
    fn new(arena: &'a DomArena) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = arena.root() {
            stack.push(root);
        }
        Self { arena, stack }
    }
}

impl<'a> Iterator for DocumentOrderIterator<'a> {
    type Item = (Index, &'a DomNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (DomArena, Index) {
        let mut arena = DomArena::new();
        let root = arena.insert_node(NodeData::new("div", "board"), None);
        let row = arena.insert_node(NodeData::new("div", "row"), Some(root));
        arena.insert_node(NodeData::new("div", "cell").with_text("A"), Some(row));
        arena.insert_node(NodeData::new("div", "cell").with_text("B"), Some(row));
        let tail = arena.insert_node(NodeData::new("span", "tail"), Some(root));
        arena.insert_node(NodeData::new("b", "").with_text("C"), Some(tail));
        (arena, root)
    }

    #[test]
    fn given_nested_nodes_when_reading_text_then_concatenates_in_document_order() {
        let (arena, root) = sample();
        assert_eq!(arena.text_content(root), "ABC");
    }

    #[test]
    fn given_tree_when_iterating_then_visits_pre_order() {
        let (arena, _) = sample();
        let kinds: Vec<_> = arena.iter().map(|(_, n)| n.data.class_name.clone()).collect();
        assert_eq!(kinds, vec!["board", "row", "cell", "cell", "tail", ""]);
    }

    #[test]
    fn given_tree_when_listing_descendants_then_matches_iterator_without_root() {
        let (arena, root) = sample();
        let from_trait = arena.descendants(root);
        let from_iter: Vec<_> = arena.iter().skip(1).map(|(idx, _)| idx).collect();
        assert_eq!(from_trait, from_iter);
    }

    #[test]
    fn given_tree_when_measuring_then_reports_depth_and_len() {
        let (arena, _) = sample();
        assert_eq!(arena.depth(), 3);
        assert_eq!(arena.len(), 6);
        assert!(!arena.is_empty());
        assert_eq!(DomArena::new().depth(), 0);
    }

    #[test]
    fn given_tree_when_rendering_then_includes_node_labels() {
        let (arena, _) = sample();
        let rendered = arena.to_tree_string().to_string();
        assert!(rendered.contains("<div class=\"board\">"));
        assert!(rendered.contains("\"A\""));
    }
}
