//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("{0}")]
    Usage(String),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Infra(e) => match e {
                InfraError::Io { .. } => crate::exitcode::IOERR,
                InfraError::Output(_) => crate::exitcode::SOFTWARE,
                InfraError::Application(app) => match app {
                    ApplicationError::Extract(_)
                    | ApplicationError::GameState(_)
                    | ApplicationError::Snapshot { .. } => crate::exitcode::DATAERR,
                    ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                    ApplicationError::OperationFailed { .. } => crate::exitcode::NOINPUT,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ExtractError;
    use rstest::rstest;

    #[rstest]
    #[case(CliError::Usage("x".into()), crate::exitcode::USAGE)]
    #[case(ApplicationError::Extract(ExtractError::EmptyBoard { board: 0 }).into(), crate::exitcode::DATAERR)]
    #[case(ApplicationError::Config { message: "x".into() }.into(), crate::exitcode::CONFIG)]
    #[case(InfraError::io("write", std::io::Error::other("x")).into(), crate::exitcode::IOERR)]
    #[case(InfraError::from(serde_json::from_str::<u8>("x").unwrap_err()).into(), crate::exitcode::SOFTWARE)]
    #[case(ApplicationError::OperationFailed {
        context: "snapshot not found".into(),
        source: Box::new(std::io::Error::other("x")),
    }.into(), crate::exitcode::NOINPUT)]
    fn test_exit_code(#[case] error: CliError, #[case] expected: i32) {
        assert_eq!(error.exit_code(), expected);
    }
}
