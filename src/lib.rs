//! # gridread
//!
//! Reads per-board guess and outcome histories from a rendered multi-board
//! word-puzzle grid. The only signal is a tree of styled display nodes:
//! letters come from cell text, outcomes from each cell's computed
//! background color, looked up once per style class.
//!
//! The [`domain`] layer works over any tree implementing
//! [`domain::RenderedTree`]; [`application`] adds JSON snapshots captured by
//! a browser harness.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use domain::{
    extract_boards, BoardHistory, ColorTable, ComputedStyle, ExtractError, Extractor, GameState,
    Outcome, RenderedTree,
};
