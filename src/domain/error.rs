//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Structural violations of the rendered board grid.
///
/// Any of these aborts the whole extraction call; no partial result is
/// returned. `board` is the position of the board among the root's children,
/// `row` the position of the row inside that board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("board {board}: row {row} is a <{kind}>, expected a row node")]
    UnexpectedNodeKind {
        board: usize,
        row: usize,
        kind: String,
    },

    #[error("board {board}: no rows found")]
    EmptyBoard { board: usize },

    #[error("board {board}: last row is not empty: {text:?}")]
    MissingSentinelRow { board: usize, text: String },

    #[error("board {board}: row {row} has {cells} cells, expected {expected}", expected = crate::domain::WORD_LENGTH)]
    MalformedRow {
        board: usize,
        row: usize,
        cells: usize,
    },
}

/// Errors merging per-board histories into one game state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameStateError {
    #[error("guess history of board {board} differs from board 0")]
    GuessHistoryMismatch { board: usize },
}

/// Result type for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;
