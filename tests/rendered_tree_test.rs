//! Extraction over a tree type that is not the crate's own arena

use std::collections::HashMap;

use gridread::domain::{extract_boards, ExtractError, RenderedTree, HIT_COLOR, NEAR_COLOR};

/// Flat node table addressed by position, as a DOM binding might expose it.
#[derive(Default)]
struct FlatTree {
    kinds: Vec<&'static str>,
    classes: Vec<&'static str>,
    texts: Vec<String>,
    children: Vec<Vec<usize>>,
}

impl FlatTree {
    fn add(&mut self, parent: Option<usize>, kind: &'static str, class: &'static str, text: &str) -> usize {
        let id = self.kinds.len();
        self.kinds.push(kind);
        self.classes.push(class);
        self.texts.push(text.to_string());
        self.children.push(Vec::new());
        if let Some(parent) = parent {
            self.children[parent].push(id);
        }
        id
    }

    fn add_row(&mut self, board: usize, cells: &[(&'static str, &str)]) {
        let row = self.add(Some(board), "DIV", "r", "");
        for (class, letter) in cells {
            self.add(Some(row), "DIV", class, letter);
        }
    }
}

impl RenderedTree for FlatTree {
    type Node = usize;

    fn kind(&self, node: usize) -> &str {
        self.kinds[node]
    }

    fn style_class(&self, node: usize) -> &str {
        self.classes[node]
    }

    fn text_content(&self, node: usize) -> String {
        let mut text = self.texts[node].clone();
        for &child in &self.children[node] {
            text.push_str(&self.text_content(child));
        }
        text
    }

    fn children(&self, node: usize) -> Vec<usize> {
        self.children[node].clone()
    }
}

fn palette() -> HashMap<&'static str, &'static str> {
    HashMap::from([("g", HIT_COLOR), ("y", NEAR_COLOR), ("b", "rgb(58, 58, 60)")])
}

#[test]
fn given_flat_tree_when_extracting_then_reads_two_boards() {
    // Arrange
    let mut tree = FlatTree::default();
    let root = tree.add(None, "DIV", "results", "");
    for pattern in [["g", "g", "y", "b", "b"], ["b", "b", "b", "b", "y"]] {
        let board = tree.add(Some(root), "DIV", "c", "");
        let cells: Vec<_> = pattern.iter().copied().zip(["a", "p", "p", "l", "e"]).collect();
        tree.add_row(board, &cells);
        tree.add_row(board, &[]);
    }
    let palette = palette();
    let styles = |n: usize| {
        palette
            .get(tree.style_class(n))
            .map(|c| c.to_string())
            .unwrap_or_default()
    };

    // Act
    let boards = extract_boards(&tree, root, &styles).unwrap();

    // Assert
    assert_eq!(boards.len(), 2);
    assert_eq!(boards[0].guess_history, vec!["apple"]);
    assert_eq!(boards[0].result_history, vec!["OOo  "]);
    assert_eq!(boards[1].result_history, vec!["    o"]);
}

#[test]
fn given_flat_tree_when_listing_descendants_then_order_is_document_order() {
    let mut tree = FlatTree::default();
    let root = tree.add(None, "DIV", "results", "");
    let a = tree.add(Some(root), "DIV", "a", "");
    let a1 = tree.add(Some(a), "DIV", "a1", "");
    let b = tree.add(Some(root), "DIV", "b", "");
    let a2 = tree.add(Some(a), "DIV", "a2", "");

    assert_eq!(tree.descendants(root), vec![a, a1, a2, b]);
    assert!(tree.descendants(a1).is_empty());
}

#[test]
fn given_flat_tree_with_empty_board_when_extracting_then_fails() {
    let mut tree = FlatTree::default();
    let root = tree.add(None, "DIV", "results", "");
    tree.add(Some(root), "DIV", "c", "");

    let err = extract_boards(&tree, root, &|_: usize| String::new()).unwrap_err();

    assert_eq!(err, ExtractError::EmptyBoard { board: 0 });
}
