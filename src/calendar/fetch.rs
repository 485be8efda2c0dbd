use crate::config::{Credential, Settings};
use crate::error::Result;

use super::client::{HttpClient, ReqwestClient};
use super::query::{GraphqlRequest, parse_calendar};
use super::{DateWindow, Day};

/// Fetches one user's contribution calendar.
#[derive(Debug)]
pub struct CalendarFetcher<C: HttpClient = ReqwestClient> {
    client: C,
    endpoint: String,
    login: String,
    credential: Credential,
}

impl<C: HttpClient> CalendarFetcher<C> {
    #[must_use]
    pub fn new(client: C, settings: &Settings) -> Self {
        Self {
            client,
            endpoint: settings.endpoint.clone(),
            login: settings.login.clone(),
            credential: settings.credential.clone(),
        }
    }

    #[must_use]
    pub fn login(&self) -> &str {
        &self.login
    }

    /// Fetch every day in `window`, sorted ascending by date.
    ///
    /// Issues exactly one request. Duplicate dates are kept.
    ///
    /// # Errors
    ///
    /// Propagates transport, parse and remote errors unchanged.
    pub fn fetch(&self, window: &DateWindow) -> Result<Vec<Day>> {
        let request = GraphqlRequest::contributions(&self.login, window);
        let body = serde_json::to_string(&request)?;

        let response = self
            .client
            .post_json(&self.endpoint, &self.credential, body)?;

        let mut days = parse_calendar(&response)?;
        days.sort_by_key(|day| day.date);
        Ok(days)
    }
}

#[cfg(test)]
#[path = "fetch_tests.rs"]
mod tests;
