use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

use crate::config::Credential;
use crate::error::{RemoteErrorEntry, RemoteErrors, Result, StreakCardError};

/// Client identifier sent with every request.
pub const USER_AGENT: &str = "streak-card";

/// HTTP client abstraction for dependency injection.
pub trait HttpClient {
    /// POST a JSON `body` to `url` with a bearer token and return the response body.
    ///
    /// # Errors
    /// Returns [`StreakCardError::Transport`] on network failure and
    /// [`StreakCardError::Remote`] on a non-2xx status.
    fn post_json(&self, url: &str, credential: &Credential, body: String) -> Result<String>;
}

impl<T: HttpClient + ?Sized> HttpClient for &T {
    fn post_json(&self, url: &str, credential: &Credential, body: String) -> Result<String> {
        (**self).post_json(url, credential, body)
    }
}

/// Production HTTP client using reqwest.
///
/// This implementation cannot be unit tested without a real HTTP server,
/// so it is excluded from coverage measurement.
#[derive(Debug, Default)]
pub struct ReqwestClient;

fn transport_error(url: &str, err: &reqwest::Error) -> StreakCardError {
    let message = if err.is_timeout() {
        "request timed out".to_string()
    } else if err.is_connect() {
        format!("could not connect: {err}")
    } else {
        err.to_string()
    };
    StreakCardError::Transport {
        url: url.to_string(),
        message,
    }
}

#[cfg(not(tarpaulin_include))]
impl HttpClient for ReqwestClient {
    fn post_json(&self, url: &str, credential: &Credential, body: String) -> Result<String> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| transport_error(url, &e))?;

        let response = client
            .post(url)
            .header(AUTHORIZATION, format!("bearer {}", credential.expose()))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .map_err(|e| transport_error(url, &e))?;

        let status = response.status();
        let text = response.text().map_err(|e| transport_error(url, &e))?;

        if !status.is_success() {
            return Err(http_status_error(status.as_u16(), &text));
        }
        Ok(text)
    }
}

#[derive(serde::Deserialize)]
struct StatusBody {
    message: String,
}

/// Build the error for a non-2xx response.
///
/// GitHub answers authentication failures with `{"message": "..."}`; that
/// message is kept when present.
#[must_use]
pub fn http_status_error(status: u16, body: &str) -> StreakCardError {
    let message = match serde_json::from_str::<StatusBody>(body) {
        Ok(parsed) => format!("HTTP {status}: {}", parsed.message),
        Err(_) => format!("HTTP {status}"),
    };
    StreakCardError::Remote(RemoteErrors(vec![RemoteErrorEntry {
        message,
        kind: None,
    }]))
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
