//! Row validation and history assembly for a single board.

use tracing::{instrument, trace};

use crate::domain::classifier::ClassOutcomeMap;
use crate::domain::dom::RenderedTree;
use crate::domain::entities::BoardHistory;
use crate::domain::error::{ExtractError, ExtractResult};
use crate::domain::WORD_LENGTH;

/// Validate the grid of one board and read its guesses and outcomes.
///
/// Every direct child of `board` must be a `row_kind` node. The last row is
/// the empty input row of the grid and is dropped; every other row must hold
/// exactly [`WORD_LENGTH`] cells. `board_index` is only used in errors.
#[instrument(level = "debug", skip(tree, board, classes))]
pub fn assemble_board<T: RenderedTree>(
    tree: &T,
    board: T::Node,
    board_index: usize,
    classes: &ClassOutcomeMap,
    row_kind: &str,
) -> ExtractResult<BoardHistory> {
    let mut rows = tree.children(board);
    for (row, &node) in rows.iter().enumerate() {
        let kind = tree.kind(node);
        if !kind.eq_ignore_ascii_case(row_kind) {
            return Err(ExtractError::UnexpectedNodeKind {
                board: board_index,
                row,
                kind: kind.to_string(),
            });
        }
    }

    let Some(&sentinel) = rows.last() else {
        return Err(ExtractError::EmptyBoard { board: board_index });
    };
    let sentinel_text = tree.text_content(sentinel);
    if !sentinel_text.trim().is_empty() {
        return Err(ExtractError::MissingSentinelRow {
            board: board_index,
            text: sentinel_text,
        });
    }
    rows.pop();

    let mut history = BoardHistory::default();
    for (row, node) in rows.into_iter().enumerate() {
        let cells = tree.children(node);
        if cells.len() != WORD_LENGTH {
            return Err(ExtractError::MalformedRow {
                board: board_index,
                row,
                cells: cells.len(),
            });
        }

        let mut guess = String::new();
        let mut result = String::with_capacity(WORD_LENGTH);
        for cell in cells {
            guess.push_str(&tree.text_content(cell));
            result.push(classes.get(tree.style_class(cell)).symbol());
        }
        trace!(row, guess = %guess, result = ?result, "assembled row");
        history.push(guess, result);
    }

    Ok(history)
}
