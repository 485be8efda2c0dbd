use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// A single entry of an API-level error list.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct RemoteErrorEntry {
    pub message: String,
    /// GraphQL error classification, e.g. `NOT_FOUND`.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// Error payload returned by the remote API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteErrors(pub Vec<RemoteErrorEntry>);

impl fmt::Display for RemoteErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            match &entry.kind {
                Some(kind) => write!(f, "[{kind}] {}", entry.message)?,
                None => write!(f, "{}", entry.message)?,
            }
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum StreakCardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read config file: {path}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("Malformed API response: {0}")]
    Parse(String),

    #[error("API returned errors: {0}")]
    Remote(RemoteErrors),

    #[error("Failed to write {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<serde_json::Error> for StreakCardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl StreakCardError {
    /// Short category label used as the error heading.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::FileAccess { .. } | Self::ConfigFile { .. } => "Config",
            Self::Transport { .. } => "Transport",
            Self::Parse(_) => "Parse",
            Self::Remote(_) => "Remote",
            Self::FileWrite { .. } => "IO",
        }
    }

    /// Whether this error happened before any work was attempted.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::FileAccess { .. } | Self::ConfigFile { .. }
        )
    }

    /// Underlying cause, if any, rendered for the detail line.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileAccess { source, .. } | Self::FileWrite { source, .. } => {
                Some(source.to_string())
            }
            _ => None,
        }
    }

    /// Actionable hint for the user.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Config(msg) if msg.contains("GITHUB_TOKEN") => {
                Some("Export a personal access token: export GITHUB_TOKEN=<token>")
            }
            Self::ConfigFile { .. } => {
                Some("Supported keys are `user`, `output` and `endpoint`")
            }
            Self::Transport { .. } => Some("Check your network connection and the --endpoint URL"),
            Self::Remote(errors) if errors.0.iter().any(|e| e.message.contains("401")) => {
                Some("The token was rejected; make sure GITHUB_TOKEN is valid")
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, StreakCardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
