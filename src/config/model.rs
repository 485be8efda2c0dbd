use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Login used when neither `--user`, `USERNAME` nor the config file names one.
pub const DEFAULT_LOGIN: &str = "farhanchowdhury738";

/// GitHub GraphQL endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/graphql";

/// Output file written to the working directory.
pub const DEFAULT_OUTPUT: &str = "streak.svg";

/// Environment variable holding the login.
pub const LOGIN_ENV: &str = "USERNAME";

/// Environment variable holding the access token.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Contents of a `.streak-card.toml` file. Every key is optional.
///
/// The access token is deliberately not a key: it only comes from the environment.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// GitHub login whose calendar is fetched.
    ///
    /// `USERNAME` wins over this key. Windows always sets `USERNAME` to the
    /// account name, so use `--user` there instead.
    #[serde(default)]
    pub user: Option<String>,

    /// Path of the rendered SVG.
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// GraphQL endpoint URL.
    #[serde(default)]
    pub endpoint: Option<String>,
}

/// Bearer token. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub login: String,
    pub credential: Credential,
    pub endpoint: String,
    pub output: PathBuf,
}

/// Values given on the command line, which win over every other source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub user: Option<String>,
    pub output: Option<PathBuf>,
    pub endpoint: Option<String>,
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
