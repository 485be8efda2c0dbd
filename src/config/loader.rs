use std::path::{Path, PathBuf};

use crate::error::{Result, StreakCardError};

use super::filesystem::{EnvSource, FileSystem, RealFileSystem};
use super::model::{
    Config, Credential, DEFAULT_ENDPOINT, DEFAULT_LOGIN, DEFAULT_OUTPUT, LOGIN_ENV, Overrides,
    Settings, TOKEN_ENV,
};

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location.
    ///
    /// # Errors
    /// Returns an error if a discovered config file cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

const LOCAL_CONFIG_NAME: &str = ".streak-card.toml";
const USER_CONFIG_NAME: &str = "config.toml";

/// Loads configuration from the filesystem.
///
/// Search order:
/// 1. `.streak-card.toml` in current directory
/// 2. Platform-specific user config directory (`config.toml`)
/// 3. Returns `Config::default()` if no config found
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn local_config_path(&self) -> Option<PathBuf> {
        self.fs
            .current_dir()
            .ok()
            .map(|dir| dir.join(LOCAL_CONFIG_NAME))
    }

    fn user_config_path(&self) -> Option<PathBuf> {
        self.fs.config_dir().map(|dir| dir.join(USER_CONFIG_NAME))
    }

    fn parse_config(path: &Path, content: &str) -> Result<Config> {
        toml::from_str(content).map_err(|source| StreakCardError::ConfigFile {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<Config> {
        let candidates = [self.local_config_path(), self.user_config_path()];
        for path in candidates.into_iter().flatten() {
            if self.fs.exists(&path) {
                return self.load_from_path(&path);
            }
        }
        Ok(Config::default())
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| StreakCardError::FileAccess {
                path: path.to_path_buf(),
                source,
            })?;
        Self::parse_config(path, &content)
    }
}

/// Check if a string is a valid remote URL (http:// or https://).
#[must_use]
pub fn is_remote_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Resolve the settings for one run.
///
/// Precedence: command line, then environment, then config file, then defaults.
/// The credential is checked first so that a missing token fails before
/// anything else is inspected.
///
/// # Errors
///
/// Returns [`StreakCardError::Config`] if `GITHUB_TOKEN` is unset or empty, or
/// if the endpoint is not an `http(s)://` URL.
pub fn resolve_settings(
    config: &Config,
    env: &impl EnvSource,
    overrides: &Overrides,
) -> Result<Settings> {
    let credential = non_empty(env.var(TOKEN_ENV))
        .map(Credential::new)
        .ok_or_else(|| StreakCardError::Config(format!("{TOKEN_ENV} is missing")))?;

    let login = non_empty(overrides.user.clone())
        .or_else(|| non_empty(env.var(LOGIN_ENV)))
        .or_else(|| non_empty(config.user.clone()))
        .unwrap_or_else(|| DEFAULT_LOGIN.to_string());

    let endpoint = overrides
        .endpoint
        .clone()
        .or_else(|| config.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    if !is_remote_url(&endpoint) {
        return Err(StreakCardError::Config(format!(
            "Invalid endpoint (must start with http:// or https://): {endpoint}"
        )));
    }

    let output = overrides
        .output
        .clone()
        .or_else(|| config.output.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    Ok(Settings {
        login,
        credential,
        endpoint,
        output,
    })
}

#[cfg(test)]
#[path = "loader_tests/mod.rs"]
mod tests;
