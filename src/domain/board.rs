//! Board selection among the children of the board root.

use tracing::debug;

use crate::domain::dom::RenderedTree;

/// Decides whether a top-level child is a finalized board to be skipped.
pub trait BoardFilter {
    fn is_finalized_board<T: RenderedTree>(&self, tree: &T, node: T::Node) -> bool;
}

/// Skips boards whose text contains a marker character.
///
/// Finalized boards collapse into a summary whose text carries the marker
/// (`+` by default) instead of a guess grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerFilter {
    pub marker: char,
}

impl Default for MarkerFilter {
    fn default() -> Self {
        Self { marker: '+' }
    }
}

impl MarkerFilter {
    pub fn new(marker: char) -> Self {
        Self { marker }
    }
}

impl BoardFilter for MarkerFilter {
    fn is_finalized_board<T: RenderedTree>(&self, tree: &T, node: T::Node) -> bool {
        tree.text_content(node).contains(self.marker)
    }
}

/// Children of `root` that are active boards, with their child position.
pub fn board_candidates<T, F>(tree: &T, root: T::Node, filter: &F) -> Vec<(usize, T::Node)>
where
    T: RenderedTree,
    F: BoardFilter,
{
    tree.children(root)
        .into_iter()
        .enumerate()
        .filter(|&(position, node)| {
            let finalized = filter.is_finalized_board(tree, node);
            if finalized {
                debug!("skipping finalized board {}", position);
            }
            !finalized
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::arena::{DomArena, NodeData};

    #[test]
    fn given_marker_in_text_when_selecting_then_board_is_skipped() {
        let mut arena = DomArena::new();
        let root = arena.insert_node(NodeData::new("div", "results"), None);
        let first = arena.insert_node(NodeData::new("div", "col"), Some(root));
        let done = arena.insert_node(NodeData::new("div", "col"), Some(root));
        arena.insert_node(NodeData::new("span", "").with_text("+3"), Some(done));
        let third = arena.insert_node(NodeData::new("div", "col"), Some(root));

        let boards = board_candidates(&arena, root, &MarkerFilter::default());

        assert_eq!(boards, vec![(0, first), (2, third)]);
    }

    #[test]
    fn given_custom_marker_when_selecting_then_uses_it() {
        let mut arena = DomArena::new();
        let root = arena.insert_node(NodeData::new("div", "results"), None);
        let plus = arena.insert_node(NodeData::new("div", "col").with_text("+"), Some(root));
        arena.insert_node(NodeData::new("div", "col").with_text("✓"), Some(root));

        let boards = board_candidates(&arena, root, &MarkerFilter::new('✓'));

        assert_eq!(boards, vec![(0, plus)]);
    }
}
