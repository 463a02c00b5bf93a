//! Read-only capabilities over a rendered display tree.
//!
//! The extraction pipeline never owns the tree it walks. It only needs to ask
//! a node for its kind, its style class, its text and its children, and it
//! needs an external way to compute a node's effective background color.

/// Read-only view of an externally owned tree of styled display nodes.
pub trait RenderedTree {
    /// Cheap handle identifying one node of the tree.
    type Node: Copy;

    /// Tag or kind of the node (e.g. `div`).
    fn kind(&self, node: Self::Node) -> &str;

    /// Style class identifier, possibly shared by many nodes.
    fn style_class(&self, node: Self::Node) -> &str;

    /// Concatenated text of the node and all of its descendants.
    fn text_content(&self, node: Self::Node) -> String;

    /// Direct children, in document order.
    fn children(&self, node: Self::Node) -> Vec<Self::Node>;

    /// All descendants of `node` in document order, `node` itself excluded.
    fn descendants(&self, node: Self::Node) -> Vec<Self::Node> {
        let mut result = Vec::new();
        let mut stack: Vec<Self::Node> = self.children(node).into_iter().rev().collect();
        while let Some(current) = stack.pop() {
            result.push(current);
            // Push children in reverse order for left-to-right traversal
            stack.extend(self.children(current).into_iter().rev());
        }
        result
    }
}

/// Computes the effective background color of a node.
///
/// The returned string is whatever the style engine reports, e.g.
/// `rgb(34, 238, 51)`.
pub trait ComputedStyle<N> {
    fn background_color(&self, node: N) -> String;
}

impl<N, F> ComputedStyle<N> for F
where
    F: Fn(N) -> String,
{
    fn background_color(&self, node: N) -> String {
        self(node)
    }
}
