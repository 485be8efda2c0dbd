//! Mock HTTP client shared by unit tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::config::Credential;
use crate::error::{Result, StreakCardError};

use super::HttpClient;

/// Mock HTTP client that records calls and returns a canned response.
pub struct MockHttpClient {
    response: Option<String>,
    error_message: Option<String>,
    call_count: AtomicUsize,
    last_request: Mutex<Option<(String, String, String)>>,
}

impl MockHttpClient {
    pub fn success(content: &str) -> Self {
        Self {
            response: Some(content.to_string()),
            error_message: None,
            call_count: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn error(msg: &str) -> Self {
        Self {
            response: None,
            error_message: Some(msg.to_string()),
            call_count: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// `(url, token, body)` of the last request.
    pub fn last_request(&self) -> Option<(String, String, String)> {
        self.last_request.lock().unwrap().clone()
    }
}

impl HttpClient for MockHttpClient {
    fn post_json(&self, url: &str, credential: &Credential, body: String) -> Result<String> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() =
            Some((url.to_string(), credential.expose().to_string(), body));
        self.response.as_ref().map_or_else(
            || {
                let msg = self
                    .error_message
                    .as_ref()
                    .map_or("No response configured", String::as_str);
                Err(StreakCardError::Transport {
                    url: url.to_string(),
                    message: msg.to_string(),
                })
            },
            |content| Ok(content.clone()),
        )
    }
}

/// Builds a calendar response body from `(date, count)` pairs, one week per seven days.
pub fn calendar_body(days: &[(&str, u32)]) -> String {
    let weeks: Vec<serde_json::Value> = days
        .chunks(7)
        .map(|week| {
            let entries: Vec<serde_json::Value> = week
                .iter()
                .map(|(date, count)| serde_json::json!({ "date": date, "contributionCount": count }))
                .collect();
            serde_json::json!({ "contributionDays": entries })
        })
        .collect();
    serde_json::json!({
        "data": { "user": { "contributionsCollection": { "contributionCalendar": { "weeks": weeks } } } }
    })
    .to_string()
}
