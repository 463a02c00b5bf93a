//! Extraction pipeline: classify, select boards, assemble histories.

use tracing::{debug, instrument};

use crate::domain::board::{board_candidates, BoardFilter, MarkerFilter};
use crate::domain::classifier::classify;
use crate::domain::dom::{ComputedStyle, RenderedTree};
use crate::domain::entities::BoardHistory;
use crate::domain::error::ExtractResult;
use crate::domain::outcome::ColorTable;
use crate::domain::rows::assemble_board;

/// Node kind expected for grid rows.
pub const DEFAULT_ROW_KIND: &str = "div";

/// Reads board histories from a rendered board root.
///
/// Holds only configuration. Each call to [`Extractor::extract`] builds its
/// own class map, so repeated calls on an unchanged tree give equal results.
#[derive(Debug, Clone)]
pub struct Extractor<F = MarkerFilter> {
    table: ColorTable,
    filter: F,
    row_kind: String,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor {
    pub fn new() -> Self {
        Self {
            table: ColorTable::default(),
            filter: MarkerFilter::default(),
            row_kind: DEFAULT_ROW_KIND.to_string(),
        }
    }
}

impl<F: BoardFilter> Extractor<F> {
    pub fn with_color_table(mut self, table: ColorTable) -> Self {
        self.table = table;
        self
    }

    pub fn with_row_kind(mut self, row_kind: impl Into<String>) -> Self {
        self.row_kind = row_kind.into();
        self
    }

    /// Replace the finalized-board predicate.
    pub fn with_filter<G: BoardFilter>(self, filter: G) -> Extractor<G> {
        Extractor {
            table: self.table,
            filter,
            row_kind: self.row_kind,
        }
    }

    pub fn color_table(&self) -> &ColorTable {
        &self.table
    }

    /// Extract one history per active board, in document order.
    ///
    /// The first structural violation aborts the call; boards already read
    /// are discarded.
    #[instrument(level = "debug", skip_all)]
    pub fn extract<T, S>(&self, tree: &T, root: T::Node, styles: &S) -> ExtractResult<Vec<BoardHistory>>
    where
        T: RenderedTree,
        S: ComputedStyle<T::Node> + ?Sized,
    {
        let classes = classify(tree, root, styles, &self.table);
        let boards = board_candidates(tree, root, &self.filter);
        debug!("{} active boards", boards.len());

        boards
            .into_iter()
            .map(|(position, board)| assemble_board(tree, board, position, &classes, &self.row_kind))
            .collect()
    }
}

/// Extract board histories with the default color table, `+` marker and
/// `div` rows.
pub fn extract_boards<T, S>(tree: &T, root: T::Node, styles: &S) -> ExtractResult<Vec<BoardHistory>>
where
    T: RenderedTree,
    S: ComputedStyle<T::Node> + ?Sized,
{
    Extractor::new().extract(tree, root, styles)
}
