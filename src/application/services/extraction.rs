//! Snapshot extraction service
//!
//! Loads rendered-board snapshots and reads their board histories.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt, Snapshot};
use crate::config::Settings;
use crate::domain::{classify, BoardHistory, ClassOutcomeMap, GameState};
use crate::infrastructure::traits::FileSystem;

/// Service extracting board histories from snapshot files.
pub struct ExtractionService {
    fs: Arc<dyn FileSystem>,
    settings: Arc<Settings>,
}

impl ExtractionService {
    /// Create a new extraction service.
    pub fn new(fs: Arc<dyn FileSystem>, settings: Arc<Settings>) -> Self {
        Self { fs, settings }
    }

    /// Read and parse a snapshot file.
    ///
    /// Directories and missing paths are both reported as not found.
    #[instrument(level = "debug", skip(self))]
    pub fn load_snapshot(&self, path: &Path) -> ApplicationResult<Snapshot> {
        if !self.fs.is_file(path) {
            return Err(ApplicationError::OperationFailed {
                context: format!("snapshot not found: {}", path.display()),
                source: Box::new(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "file does not exist",
                )),
            });
        }
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read snapshot", path)?;
        Snapshot::parse(&content, path)
    }

    /// Extract board histories from a parsed snapshot.
    ///
    /// A fresh extraction runs on every call; nothing is cached between calls.
    pub fn extract(&self, snapshot: &Snapshot) -> ApplicationResult<Vec<BoardHistory>> {
        let styles = snapshot.styles(&self.settings.stylesheet);
        let boards = self
            .settings
            .extractor()
            .extract(&snapshot.tree, snapshot.root, &styles)?;
        debug!("extracted {} boards", boards.len());
        Ok(boards)
    }

    /// Style class classification of a snapshot, as used by [`Self::extract`].
    pub fn classes(&self, snapshot: &Snapshot) -> ClassOutcomeMap {
        let styles = snapshot.styles(&self.settings.stylesheet);
        classify(
            &snapshot.tree,
            snapshot.root,
            &styles,
            &self.settings.color_table(),
        )
    }

    /// Extract board histories from snapshot JSON held in memory.
    pub fn extract_str(&self, json: &str, source: &Path) -> ApplicationResult<Vec<BoardHistory>> {
        let snapshot = Snapshot::parse(json, source)?;
        self.extract(&snapshot)
    }

    /// Extract board histories from a snapshot file.
    pub fn extract_file(&self, path: &Path) -> ApplicationResult<Vec<BoardHistory>> {
        let snapshot = self.load_snapshot(path)?;
        self.extract(&snapshot)
    }

    /// Extract and merge into a single game state.
    ///
    /// Fails if boards disagree on the guesses made.
    pub fn game_state_file(&self, path: &Path) -> ApplicationResult<GameState> {
        let boards = self.extract_file(path)?;
        Ok(GameState::from_boards(&boards)?)
    }
}
