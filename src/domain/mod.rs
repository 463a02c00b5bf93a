//! Domain layer: board extraction over a rendered tree
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod board;
pub mod classifier;
pub mod dom;
pub mod entities;
pub mod error;
pub mod extractor;
pub mod outcome;
pub mod rows;

/// Letters per guess, and cells per grid row.
pub const WORD_LENGTH: usize = 5;

pub use arena::{DomArena, DomNode, NodeData};
pub use board::{board_candidates, BoardFilter, MarkerFilter};
pub use classifier::{classify, ClassOutcomeMap};
pub use dom::{ComputedStyle, RenderedTree};
pub use entities::{BoardHistory, GameState};
pub use error::{ExtractError, ExtractResult, GameStateError};
pub use extractor::{extract_boards, Extractor, DEFAULT_ROW_KIND};
pub use outcome::{normalize_color, ColorTable, Outcome, HIT_COLOR, NEAR_COLOR};
pub use rows::assemble_board;
