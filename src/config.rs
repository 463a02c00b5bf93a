//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/gridread/gridread.toml`
//! 3. Local config: `<dir>/.gridread.toml` (usually the working directory)
//! 4. Environment variables: `GRIDREAD_*` prefix

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::{ColorTable, Extractor, MarkerFilter, DEFAULT_ROW_KIND, HIT_COLOR, NEAR_COLOR};

/// How extraction results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON array of `{guessHistory, resultHistory}` records
    #[default]
    Json,
    /// One line per row, boards separated by headers
    Table,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Table => write!(f, "table"),
        }
    }
}

/// Background colors recognized as outcomes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ColorSettings {
    /// Correct letter in correct position
    pub hit: String,
    /// Correct letter in wrong position
    pub near: String,
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            hit: HIT_COLOR.into(),
            near: NEAR_COLOR.into(),
        }
    }
}

/// Raw color settings for intermediate parsing (None means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawColorSettings {
    pub hit: Option<String>,
    pub near: Option<String>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub finalized_marker: Option<char>,
    pub row_kind: Option<String>,
    pub output: Option<OutputFormat>,
    pub colors: RawColorSettings,
    pub stylesheet: BTreeMap<String, String>,
}

/// Unified configuration for gridread.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Character whose presence in a board's text marks it as finalized
    pub finalized_marker: char,
    /// Node kind of grid rows (default: div)
    pub row_kind: String,
    /// Default output format
    pub output: OutputFormat,
    /// Outcome colors
    pub colors: ColorSettings,
    /// Fallback class -> color table used when a snapshot has no color for a node
    pub stylesheet: BTreeMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            finalized_marker: '+',
            row_kind: DEFAULT_ROW_KIND.into(),
            output: OutputFormat::default(),
            colors: ColorSettings::default(),
            stylesheet: BTreeMap::new(),
        }
    }
}

/// Get the XDG config directory for gridread.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "gridread").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("gridread.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".gridread.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Merge overlay config onto self (base).
    ///
    /// - Scalar options: overlay wins if Some, otherwise keep base
    /// - Stylesheet: entries are merged by class, overlay wins
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        let mut stylesheet = self.stylesheet.clone();
        stylesheet.extend(
            overlay
                .stylesheet
                .iter()
                .map(|(class, color)| (class.clone(), color.clone())),
        );
        Self {
            finalized_marker: overlay.finalized_marker.unwrap_or(self.finalized_marker),
            row_kind: overlay
                .row_kind
                .clone()
                .unwrap_or_else(|| self.row_kind.clone()),
            output: overlay.output.unwrap_or(self.output),
            colors: ColorSettings {
                hit: overlay
                    .colors
                    .hit
                    .clone()
                    .unwrap_or_else(|| self.colors.hit.clone()),
                near: overlay
                    .colors
                    .near
                    .clone()
                    .unwrap_or_else(|| self.colors.near.clone()),
            },
            stylesheet,
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.gridread.toml`
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/gridread/gridread.toml`
    /// 3. Local config: `<local_dir>/.gridread.toml`
    /// 4. Environment variables: `GRIDREAD_*` prefix
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                let raw = load_raw_settings(&local_path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.validate()?;

        Ok(current)
    }

    /// Apply GRIDREAD_* environment variables as explicit overrides.
    ///
    /// `GRIDREAD_ROW_KIND` sets `row_kind`, `GRIDREAD_COLORS__HIT` sets `colors.hit`.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("GRIDREAD")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("finalized_marker") {
            settings.finalized_marker = single_char(&val)?;
        }
        if let Ok(val) = config.get_string("row_kind") {
            settings.row_kind = val;
        }
        if let Ok(val) = config.get::<OutputFormat>("output") {
            settings.output = val;
        }
        if let Ok(val) = config.get_string("colors.hit") {
            settings.colors.hit = val;
        }
        if let Ok(val) = config.get_string("colors.near") {
            settings.colors.near = val;
        }

        Ok(settings)
    }

    fn validate(&self) -> Result<(), ApplicationError> {
        if self.row_kind.trim().is_empty() {
            return Err(ApplicationError::Config {
                message: "row_kind must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Color table built from the configured outcome colors.
    pub fn color_table(&self) -> ColorTable {
        ColorTable::new(&self.colors.hit, &self.colors.near)
    }

    /// Extractor configured from these settings.
    pub fn extractor(&self) -> Extractor {
        Extractor::new()
            .with_color_table(self.color_table())
            .with_row_kind(self.row_kind.clone())
            .with_filter(MarkerFilter::new(self.finalized_marker))
    }

    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    pub fn template() -> String {
        r#"# gridread configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/gridread/gridread.toml
#   Local:  ./.gridread.toml
#   Env:    GRIDREAD_* environment variables (e.g. GRIDREAD_COLORS__HIT)

# Boards whose text contains this character are finalized and skipped
# finalized_marker = "+"

# Node kind of grid rows
# row_kind = "div"

# Default output format: "json" or "table"
# output = "json"

[colors]
# Background color of a correct letter in the correct position
# hit = "rgb(34, 238, 51)"

# Background color of a correct letter in the wrong position
# near = "rgb(238, 222, 35)"

[stylesheet]
# Fallback colors per style class, used when a snapshot node has no color
# "cell-hit" = "rgb(34, 238, 51)"
"#
        .to_string()
    }
}

fn single_char(value: &str) -> Result<char, ApplicationError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ApplicationError::Config {
            message: format!("finalized_marker must be a single character, got {value:?}"),
        }),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Outcome;

    #[test]
    fn given_no_config_when_loading_then_uses_defaults() {
        let settings = Settings::load(None).expect("load defaults");
        assert_eq!(settings.row_kind, "div");
        assert_eq!(settings.colors.hit, HIT_COLOR);
    }

    #[test]
    fn given_overlay_when_merging_then_scalars_override_and_stylesheet_unions() {
        let mut base = Settings::default();
        base.stylesheet.insert("a".into(), "rgb(1, 1, 1)".into());
        base.stylesheet.insert("b".into(), "rgb(2, 2, 2)".into());
        let overlay: RawSettings = toml::from_str(
            r#"
finalized_marker = "*"
[colors]
near = "rgb(255, 255, 0)"
[stylesheet]
b = "rgb(3, 3, 3)"
c = "rgb(4, 4, 4)"
"#,
        )
        .unwrap();

        let merged = base.merge_with(&overlay);

        assert_eq!(merged.finalized_marker, '*');
        assert_eq!(merged.row_kind, "div");
        assert_eq!(merged.colors.hit, HIT_COLOR);
        assert_eq!(merged.colors.near, "rgb(255, 255, 0)");
        assert_eq!(merged.stylesheet.len(), 3);
        assert_eq!(merged.stylesheet["b"], "rgb(3, 3, 3)");
    }

    #[test]
    fn given_custom_colors_when_building_table_then_table_uses_them() {
        let mut settings = Settings::default();
        settings.colors.hit = "rgb(0, 128, 0)".into();

        let table = settings.color_table();

        assert_eq!(table.lookup("rgb(0, 128, 0)"), Outcome::Hit);
        assert_eq!(table.lookup(NEAR_COLOR), Outcome::Near);
    }

    #[test]
    fn test_single_char() {
        assert_eq!(single_char("+").unwrap(), '+');
        assert!(single_char("").is_err());
        assert!(single_char("++").is_err());
    }

    #[test]
    fn given_template_when_parsing_then_is_valid_toml() {
        let raw: RawSettings = toml::from_str(&Settings::template()).unwrap();
        assert!(raw.finalized_marker.is_none());
        assert!(raw.stylesheet.is_empty());
    }

    #[test]
    fn given_settings_when_serializing_then_round_trips_through_toml() {
        let settings = Settings::default();
        let text = settings.to_toml().unwrap();
        let parsed: Settings = toml::from_str(&text).unwrap();
        assert_eq!(parsed, settings);
    }
}
