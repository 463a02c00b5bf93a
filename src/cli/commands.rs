//! Command dispatch

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::ApplicationError;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, local_config_path, OutputFormat, Settings};
use crate::domain::{BoardHistory, GameState};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

/// Path argument meaning "read from stdin".
const STDIN_PATH: &str = "-";

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let config_dir = match &cli.config_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()
            .map_err(|e| InfraError::io("determine current directory", e))?,
    };

    match &cli.command {
        Some(Commands::Extract {
            snapshot,
            format,
            merged,
        }) => _extract(&load_container(&config_dir)?, snapshot, *format, *merged),
        Some(Commands::Tree { snapshot }) => _tree(&load_container(&config_dir)?, snapshot),
        Some(Commands::Classes { snapshot }) => {
            _classes(&load_container(&config_dir)?, snapshot)
        }
        Some(Commands::Config { command }) => _config(command, &config_dir),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::Usage("no command given, see --help".to_string())),
    }
}

fn load_container(config_dir: &Path) -> CliResult<ServiceContainer> {
    let settings = Settings::load(Some(config_dir))?;
    Ok(ServiceContainer::new(settings))
}

#[instrument(skip(container))]
fn _extract(
    container: &ServiceContainer,
    snapshot: &Path,
    format: Option<OutputFormat>,
    merged: bool,
) -> CliResult<()> {
    let boards = if snapshot == Path::new(STDIN_PATH) {
        let mut json = String::new();
        io::stdin()
            .read_to_string(&mut json)
            .map_err(|e| InfraError::io("read snapshot from stdin", e))?;
        container.extraction.extract_str(&json, snapshot)?
    } else {
        container.extraction.extract_file(snapshot)?
    };
    debug!("boards: {}", boards.len());

    let format = format.unwrap_or(container.settings.output);
    if merged {
        let state = GameState::from_boards(&boards).map_err(ApplicationError::from)?;
        print_state(&state, format)
    } else {
        print_boards(&boards, format)
    }
}

fn print_boards(boards: &[BoardHistory], format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => output::info(&to_json(boards)?),
        OutputFormat::Table => {
            if boards.is_empty() {
                output::warning("no active boards");
            }
            for (i, board) in boards.iter().enumerate() {
                output::board(i, board);
            }
        }
    }
    Ok(())
}

fn print_state(state: &GameState, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => output::info(&to_json(state)?),
        OutputFormat::Table => {
            output::header(&format!("guesses: {}", state.guess_history.iter().join(" ")));
            for (i, results) in state.result_histories.iter().enumerate() {
                output::detail(&format!(
                    "{:>4}: {}",
                    i,
                    results.iter().map(|r| format!("[{}]", r)).join(" ")
                ));
            }
        }
    }
    Ok(())
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(value).map_err(InfraError::from)?)
}

#[instrument(skip(container))]
fn _tree(container: &ServiceContainer, snapshot: &Path) -> CliResult<()> {
    let snapshot = container.extraction.load_snapshot(snapshot)?;
    output::info(&snapshot.tree.to_tree_string());
    Ok(())
}

#[instrument(skip(container))]
fn _classes(container: &ServiceContainer, snapshot: &Path) -> CliResult<()> {
    let snapshot = container.extraction.load_snapshot(snapshot)?;
    let classes = container.extraction.classes(&snapshot);
    for (class, outcome) in classes.iter().sorted_by_key(|(class, _)| *class) {
        output::detail(&format!("[{}] {}", outcome, class));
    }
    Ok(())
}

fn _config(command: &ConfigCommands, config_dir: &Path) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load(Some(config_dir))?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => output::action("global", &path.display()),
                None => output::warning("no global config directory on this platform"),
            }
            output::action("local", &local_config_path(config_dir).display());
        }
        ConfigCommands::Init { global } => {
            let path: PathBuf = if *global {
                global_config_path().ok_or_else(|| {
                    CliError::Usage("no global config directory on this platform".into())
                })?
            } else {
                local_config_path(config_dir)
            };
            let container = ServiceContainer::new(Settings::default());
            if container.fs.exists(&path) {
                return Err(CliError::Usage(format!(
                    "config already exists: {}",
                    path.display()
                )));
            }
            container
                .fs
                .ensure_parent(&path)
                .and_then(|_| container.fs.write(&path, &Settings::template()))
                .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
            output::action("Created", &path.display());
        }
    }
    Ok(())
}
