//! Attach the offending path to I/O and snapshot parse errors.

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};

pub trait IoResultExt<T> {
    /// Turn an I/O failure into [`ApplicationError::OperationFailed`].
    ///
    /// ```ignore
    /// fs.read_to_string(&snapshot)
    ///     .with_path_context("read snapshot", &snapshot)?;
    /// ```
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::OperationFailed {
            context: format!("{}: {}", action, path.display()),
            source: Box::new(e),
        })
    }
}

pub trait JsonResultExt<T> {
    /// Turn a JSON decoding failure into [`ApplicationError::Snapshot`] for `path`.
    fn with_snapshot_path(self, path: &Path) -> ApplicationResult<T>;
}

impl<T> JsonResultExt<T> for serde_json::Result<T> {
    fn with_snapshot_path(self, path: &Path) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::Snapshot {
            path: path.to_path_buf(),
            message: format!("line {} column {}: {}", e.line(), e.column(), e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_missing_file_when_reading_then_context_names_path() {
        let err = std::fs::read_to_string("/nonexistent/snap.json")
            .with_path_context("read snapshot", Path::new("/nonexistent/snap.json"))
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "operation failed: read snapshot: /nonexistent/snap.json"
        );
    }

    #[test]
    fn given_bad_json_when_decoding_then_snapshot_error_carries_position() {
        let err = serde_json::from_str::<Vec<u8>>("[1,\n x]")
            .with_snapshot_path(Path::new("snap.json"))
            .unwrap_err();

        match err {
            ApplicationError::Snapshot { path, message } => {
                assert_eq!(path, Path::new("snap.json"));
                assert!(message.starts_with("line 2 column"), "{message}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
