//! Style class to outcome classification.
//!
//! Style classes are recycled between renders, so the mapping is rebuilt on
//! every extraction call from computed colors and never cached.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::domain::dom::{ComputedStyle, RenderedTree};
use crate::domain::outcome::{ColorTable, Outcome};

/// Per-call mapping from style class identifier to outcome.
///
/// The first node seen with a class decides its outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassOutcomeMap {
    classes: HashMap<String, Outcome>,
}

impl ClassOutcomeMap {
    /// Outcome for `class`, [`Outcome::Miss`] if it was never sampled.
    pub fn get(&self, class: &str) -> Outcome {
        self.classes.get(class).copied().unwrap_or(Outcome::Miss)
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains_key(class)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Outcome)> {
        self.classes.iter().map(|(class, &outcome)| (class.as_str(), outcome))
    }
}

/// Sample one computed background color per style class under `root`.
///
/// Every descendant is sampled, whatever its kind, so a non-row node that
/// shares a class with grid cells can decide that class's outcome first.
pub fn classify<T, S>(tree: &T, root: T::Node, styles: &S, table: &ColorTable) -> ClassOutcomeMap
where
    T: RenderedTree,
    S: ComputedStyle<T::Node> + ?Sized,
{
    let mut map = ClassOutcomeMap::default();
    for node in tree.descendants(root) {
        let class = tree.style_class(node);
        if map.classes.contains_key(class) {
            continue;
        }
        let color = styles.background_color(node);
        let outcome = table.lookup(&color);
        trace!(class, color = %color, symbol = %outcome, "sampled class");
        map.classes.insert(class.to_string(), outcome);
    }
    debug!("classified {} style classes", map.len());
    map
}
