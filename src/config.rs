use crate::convert::Style;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".caseconv.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub acronyms: Vec<String>,
    pub acronyms_file: Option<PathBuf>,
    pub default_style: Style,
}

/// One config file layer. Only keys present in the file override the layer
/// below it.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    acronyms: Option<Vec<String>>,
    acronyms_file: Option<PathBuf>,
    default_style: Option<Style>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            acronyms: Vec::new(),
            acronyms_file: None,
            default_style: Style::Snake,
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(
        cli_acronyms: Vec<String>,
        acronyms_file: Option<PathBuf>,
        style: Option<Style>,
    ) -> Result<Self> {
        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        Self::load_from(
            Self::global_config_path().as_deref(),
            &local_path,
            cli_acronyms,
            acronyms_file,
            style,
        )
    }

    fn load_from(
        global_path: Option<&Path>,
        local_path: &Path,
        cli_acronyms: Vec<String>,
        acronyms_file: Option<PathBuf>,
        style: Option<Style>,
    ) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = global_path {
            if global_path.exists() {
                tracing::debug!(path = %global_path.display(), "loading global config");
                config = config.merge(ConfigFile::read(global_path)?);
            }
        }

        if local_path.exists() {
            tracing::debug!(path = %local_path.display(), "loading local config");
            config = config.merge(ConfigFile::read(local_path)?);
        }

        // Apply CLI overrides
        config.acronyms.extend(cli_acronyms);
        if let Some(file) = acronyms_file {
            config.acronyms_file = Some(file);
        }
        if let Some(style) = style {
            config.default_style = style;
        }

        Ok(config)
    }

    fn merge(mut self, other: ConfigFile) -> Self {
        if let Some(acronyms) = other.acronyms {
            self.acronyms = acronyms;
        }
        if let Some(file) = other.acronyms_file {
            self.acronyms_file = Some(file);
        }
        if let Some(style) = other.default_style {
            self.default_style = style;
        }
        self
    }

    /// Inline acronyms followed by the entries of the acronym file, if any.
    pub fn acronyms(&self) -> Result<Vec<String>> {
        let mut acronyms = self.acronyms.clone();

        if let Some(path) = &self.acronyms_file {
            if path.exists() {
                acronyms.extend(read_acronym_file(path)?);
            } else {
                tracing::warn!(path = %path.display(), "acronym file not found, skipping");
            }
        }

        Ok(acronyms)
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "caseconv").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

impl ConfigFile {
    /// Parse a config file. A relative `acronyms_file` is resolved against
    /// the directory holding the config file.
    fn read(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let mut file: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        if let Some(dir) = path.parent() {
            file.acronyms_file = file.acronyms_file.map(|acronyms_file| {
                if acronyms_file.is_relative() {
                    dir.join(acronyms_file)
                } else {
                    acronyms_file
                }
            });
        }
        Ok(file)
    }
}

/// One acronym per line; blank lines and `#` comments are skipped.
fn read_acronym_file(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read acronym file: {}", path.display()))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}
