use serde::{Deserialize, Serialize};

use crate::error::{RemoteErrorEntry, RemoteErrors, Result, StreakCardError};

use super::{DateWindow, Day};

/// Contribution calendar query for one user and time range.
pub const CONTRIBUTIONS_QUERY: &str = r"
query ($login:String!, $from:DateTime!, $to:DateTime!) {
  user(login:$login){
    contributionsCollection(from:$from, to:$to){
      contributionCalendar{
        weeks{ contributionDays{ date contributionCount } }
      }
    }
  }
}";

/// POST body of a GraphQL request.
#[derive(Debug, Serialize)]
pub struct GraphqlRequest<'a> {
    query: &'a str,
    variables: Variables<'a>,
}

#[derive(Debug, Serialize)]
struct Variables<'a> {
    login: &'a str,
    from: String,
    to: String,
}

impl<'a> GraphqlRequest<'a> {
    #[must_use]
    pub fn contributions(login: &'a str, window: &DateWindow) -> Self {
        Self {
            query: CONTRIBUTIONS_QUERY,
            variables: Variables {
                login,
                from: window.from_iso(),
                to: window.to_iso(),
            },
        }
    }
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<serde_json::Value>,
    #[serde(default)]
    errors: Option<Vec<RemoteErrorEntry>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseData {
    user: Option<User>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct User {
    contributions_collection: ContributionsCollection,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContributionsCollection {
    contribution_calendar: ContributionCalendar,
}

#[derive(Deserialize)]
struct ContributionCalendar {
    weeks: Vec<Week>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Week {
    contribution_days: Vec<Day>,
}

/// Parse a response body into its days, week by week, in API order.
///
/// An `errors` list wins over any `data` that came with it.
///
/// # Errors
///
/// - [`StreakCardError::Parse`] if the body is not JSON or lacks the calendar
/// - [`StreakCardError::Remote`] if the body carries a non-empty `errors` list
pub fn parse_calendar(body: &str) -> Result<Vec<Day>> {
    let envelope: Envelope = serde_json::from_str(body)?;

    if let Some(errors) = envelope.errors
        && !errors.is_empty()
    {
        return Err(StreakCardError::Remote(RemoteErrors(errors)));
    }

    let data = envelope
        .data
        .ok_or_else(|| StreakCardError::Parse("response has no `data` field".to_string()))?;
    let data: ResponseData = serde_json::from_value(data)?;
    let user = data
        .user
        .ok_or_else(|| StreakCardError::Parse("response has no `data.user` entry".to_string()))?;

    Ok(user
        .contributions_collection
        .contribution_calendar
        .weeks
        .into_iter()
        .flat_map(|week| week.contribution_days)
        .collect())
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
