//! Current and longest contribution streaks.

use crate::calendar::Day;

/// Streak lengths in days.
///
/// `longest >= current` always holds: the current run is itself one of the
/// runs `longest` is the maximum of.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreakResult {
    pub current: u32,
    pub longest: u32,
}

/// Compute both streaks over days sorted ascending by date.
///
/// The current streak ends at the last day in `days`, whatever its date.
/// Only whether a count is positive matters.
#[must_use]
pub fn compute_streak(days: &[Day]) -> StreakResult {
    let mut longest = 0;
    let mut run = 0;
    for day in days {
        run = if day.is_active() { run + 1 } else { 0 };
        longest = longest.max(run);
    }

    let current = days
        .iter()
        .rev()
        .take_while(|day| day.is_active())
        .count();

    StreakResult {
        current: u32::try_from(current).unwrap_or(u32::MAX),
        longest,
    }
}

#[cfg(test)]
#[path = "streak_tests.rs"]
mod tests;
