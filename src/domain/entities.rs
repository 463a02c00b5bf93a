//! Domain entities: extraction results

use serde::{Deserialize, Serialize};

use crate::domain::error::GameStateError;

/// Guesses and outcomes read from one board, oldest first.
///
/// `guess_history[i]` and `result_history[i]` describe the same row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardHistory {
    /// Five-letter guess per row, cell text concatenated as rendered
    pub guess_history: Vec<String>,
    /// Five outcome symbols per row: `O` hit, `o` near, ` ` miss
    pub result_history: Vec<String>,
}

impl BoardHistory {
    pub fn push(&mut self, guess: String, result: String) {
        self.guess_history.push(guess);
        self.result_history.push(result);
    }

    pub fn len(&self) -> usize {
        self.guess_history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guess_history.is_empty()
    }

    /// Rows as `(guess, result)` pairs.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &str)> {
        self.guess_history
            .iter()
            .zip(self.result_history.iter())
            .map(|(g, r)| (g.as_str(), r.as_str()))
    }
}

/// Shared guess history with the outcome history of every active board.
///
/// All boards receive the same guesses, so only the outcomes differ.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub guess_history: Vec<String>,
    pub result_histories: Vec<Vec<String>>,
}

impl GameState {
    /// Merge per-board histories, checking that every board saw the same guesses.
    pub fn from_boards(boards: &[BoardHistory]) -> Result<Self, GameStateError> {
        let Some(first) = boards.first() else {
            return Ok(Self::default());
        };
        if let Some(board) = boards
            .iter()
            .position(|b| b.guess_history != first.guess_history)
        {
            return Err(GameStateError::GuessHistoryMismatch { board });
        }
        Ok(Self {
            guess_history: first.guess_history.clone(),
            result_histories: boards.iter().map(|b| b.result_history.clone()).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(guesses: &[&str], results: &[&str]) -> BoardHistory {
        BoardHistory {
            guess_history: guesses.iter().map(|s| s.to_string()).collect(),
            result_history: results.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn given_board_when_serializing_then_uses_camel_case_keys() {
        let json = serde_json::to_string(&board(&["APPLE"], &["OOo  "])).unwrap();
        assert_eq!(json, r#"{"guessHistory":["APPLE"],"resultHistory":["OOo  "]}"#);
    }

    #[test]
    fn given_boards_with_same_guesses_when_merging_then_collects_results() {
        let boards = vec![
            board(&["crane", "spilt"], &["  o  ", "O    "]),
            board(&["crane", "spilt"], &["OOOOO", "     "]),
        ];

        let state = GameState::from_boards(&boards).unwrap();

        assert_eq!(state.guess_history, vec!["crane", "spilt"]);
        assert_eq!(state.result_histories.len(), 2);
        assert_eq!(state.result_histories[1][0], "OOOOO");
    }

    #[test]
    fn given_diverging_guesses_when_merging_then_reports_board() {
        let boards = vec![
            board(&["crane"], &["     "]),
            board(&["crane"], &["     "]),
            board(&["slate"], &["     "]),
        ];

        let err = GameState::from_boards(&boards).unwrap_err();

        assert_eq!(err, GameStateError::GuessHistoryMismatch { board: 2 });
    }

    #[test]
    fn given_no_boards_when_merging_then_state_is_empty() {
        let state = GameState::from_boards(&[]).unwrap();
        assert!(state.guess_history.is_empty());
        assert!(state.result_histories.is_empty());
    }

    #[test]
    fn given_board_when_iterating_rows_then_pairs_are_aligned() {
        let b = board(&["apple", "grape"], &["OOo  ", "OOOOO"]);
        let rows: Vec<_> = b.rows().collect();
        assert_eq!(rows, vec![("apple", "OOo  "), ("grape", "OOOOO")]);
        assert_eq!(b.len(), 2);
    }
}
