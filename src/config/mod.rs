mod filesystem;
mod loader;
mod model;

pub use filesystem::{EnvSource, FileSystem, ProcessEnv, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, is_remote_url, resolve_settings};
pub use model::{
    Config, Credential, DEFAULT_ENDPOINT, DEFAULT_LOGIN, DEFAULT_OUTPUT, LOGIN_ENV, Overrides,
    Settings, TOKEN_ENV,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_url_detection() {
        assert!(is_remote_url("https://api.github.com/graphql"));
        assert!(is_remote_url("http://localhost:8080/graphql"));
        assert!(!is_remote_url("/local/path"));
        assert!(!is_remote_url("ftp://example.com"));
    }
}
