//! # Responder Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module loads, merges and validates the Responder configuration. The
//! configuration only covers the surroundings of the core: where the fallback
//! responses live, what the chat session looks like, and an optional seed for
//! reproducible sessions. The keyword table itself is literal data and is never
//! configurable.
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line flags (applied by the command handlers)
//! 2. Project-specific `.responder.toml` in current directory or ancestors
//! 3. User-specific `<config dir>/responder/config.toml`
//! 4. Default values defined in the code
//!
//! Each file only overrides the keys it actually sets, even when the value it
//! sets equals the built-in default. A relative `fallback.file` is resolved
//! against the directory of the file that sets it, so a project file found in
//! an ancestor directory keeps pointing at the same responses.
//!
//! ## Examples
//!
//! ```toml
//! [fallback]
//! file = "~/support/default.txt"
//!
//! [chat]
//! bot_name = "Support"
//! exit_word = "quit"
//! seed = 42
//! ```
//!
//! ```rust,ignore
//! let cfg = config::load_config()?;
//! let pool = FallbackPool::load(&cfg.fallback.file);
//! ```
//!
use crate::core::error::{ResponderError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// The resolved configuration the commands work with.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Config {
    pub fallback: FallbackConfig,
    pub chat: ChatConfig,
}

/// Where the fallback (default) responses are read from.
#[derive(Debug, Clone, PartialEq)]
pub struct FallbackConfig {
    /// Line-oriented ASCII file, one response per line. When the path comes
    /// from the built-in default it is relative to the working directory.
    pub file: String,
}

/// Settings for the interactive session (`responder chat`).
#[derive(Debug, Clone, PartialEq)]
pub struct ChatConfig {
    /// Name shown in the welcome banner.
    pub bot_name: String,
    /// Word that ends the session.
    pub exit_word: String,
    /// Seed for the fallback selection. Unset means seeded from OS entropy.
    pub seed: Option<u64>,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            file: default_fallback_file(),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            bot_name: default_bot_name(),
            exit_word: default_exit_word(),
            seed: None,
        }
    }
}

/// One configuration file as written on disk. Unset keys stay `None` so the
/// merge can tell "not set" apart from "set to the default value".
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    fallback: FallbackSection,
    #[serde(default)]
    chat: ChatSection,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct FallbackSection {
    /// Can use ~. Relative paths are relative to the config file's directory.
    file: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct ChatSection {
    bot_name: Option<String>,
    exit_word: Option<String>,
    seed: Option<u64>,
}

fn default_fallback_file() -> String {
    "default.txt".to_string()
}
fn default_bot_name() -> String {
    "DodgySoft Technical Support".to_string()
}
fn default_exit_word() -> String {
    "bye".to_string()
}

const PROJECT_CONFIG_FILENAME: &str = ".responder.toml";

pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let merged_config = merge_configs(user_config, project_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<ConfigFile>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Responder", "responder") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<ConfigFile>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.responder.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks from `start` towards the filesystem root. Stops at the first
/// directory holding `.responder.toml`, or at a repository root (`.git`).
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

/// Parses one config file and anchors its `fallback.file` to the file's
/// directory.
fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    let mut config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))?;
    if let (Some(file), Some(base_dir)) = (config.fallback.file.as_mut(), path.parent()) {
        *file = resolve_fallback_file(file, base_dir);
    }
    Ok(config)
}

/// Expands `~`, then joins relative paths onto `base_dir`. Blank values are
/// left alone so validation can reject them.
fn resolve_fallback_file(file: &str, base_dir: &Path) -> String {
    if file.trim().is_empty() {
        return file.to_string();
    }
    let expanded = shellexpand::tilde(file).into_owned();
    let resolved = if Path::new(&expanded).is_relative() {
        base_dir.join(&expanded).to_string_lossy().into_owned()
    } else {
        expanded
    };
    debug!("Resolved fallback file path: {}", resolved);
    resolved
}

/// Project keys win over user keys, which win over the built-in defaults.
fn merge_configs(user: Option<ConfigFile>, project: Option<ConfigFile>) -> Config {
    let user = user.unwrap_or_default();
    let project = project.unwrap_or_default();
    Config {
        fallback: FallbackConfig {
            file: project
                .fallback
                .file
                .or(user.fallback.file)
                .unwrap_or_else(default_fallback_file),
        },
        chat: ChatConfig {
            bot_name: project
                .chat
                .bot_name
                .or(user.chat.bot_name)
                .unwrap_or_else(default_bot_name),
            exit_word: project
                .chat
                .exit_word
                .or(user.chat.exit_word)
                .unwrap_or_else(default_exit_word),
            seed: project.chat.seed.or(user.chat.seed),
        },
    }
}

fn validate_config(config: &Config) -> Result<()> {
    if config.fallback.file.trim().is_empty() {
        return Err(anyhow!(ResponderError::Config(
            "fallback.file cannot be empty.".to_string()
        )));
    }
    let exit_word = config.chat.exit_word.trim();
    if exit_word.is_empty() || exit_word.split_whitespace().count() != 1 {
        return Err(anyhow!(ResponderError::Config(format!(
            "Invalid exit_word '{}'. Expected a single word.",
            config.chat.exit_word
        ))));
    }
    debug!("Configuration validation successful.");
    Ok(())
}
