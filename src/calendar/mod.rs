//! Contribution calendar retrieval.
//!
//! One authenticated GraphQL round trip per run, normalized into a
//! date-ordered list of [`Day`] values.

mod client;
mod fetch;
mod query;

use chrono::{DateTime, Months, NaiveDate, SecondsFormat, TimeDelta, Utc};
use serde::Deserialize;

pub use client::{HttpClient, ReqwestClient, USER_AGENT, http_status_error};
pub use fetch::CalendarFetcher;
pub use query::{CONTRIBUTIONS_QUERY, GraphqlRequest, parse_calendar};

/// Contribution count for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    pub date: NaiveDate,
    pub contribution_count: u32,
}

impl Day {
    #[must_use]
    pub const fn new(date: NaiveDate, contribution_count: u32) -> Self {
        Self {
            date,
            contribution_count,
        }
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.contribution_count > 0
    }
}

/// Time range sent to the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl DateWindow {
    /// The calendar year ending at `to`.
    ///
    /// A window ending on Feb 29 starts on Feb 28 of the previous year.
    #[must_use]
    pub fn year_ending(to: DateTime<Utc>) -> Self {
        let from = to
            .checked_sub_months(Months::new(12))
            .unwrap_or_else(|| to - TimeDelta::days(365));
        Self { from, to }
    }

    /// RFC 3339 with millisecond precision, e.g. `2026-10-19T08:15:30.123Z`.
    #[must_use]
    pub fn from_iso(&self) -> String {
        self.from.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    #[must_use]
    pub fn to_iso(&self) -> String {
        self.to.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

#[cfg(test)]
pub mod mock_client;
