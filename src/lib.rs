pub mod app;
pub mod calendar;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod streak;

pub use error::{Result, StreakCardError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_RUNTIME_ERROR: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Exit code for a failed run.
#[must_use]
pub const fn exit_code_for(err: &StreakCardError) -> i32 {
    if err.is_config_error() {
        EXIT_CONFIG_ERROR
    } else {
        EXIT_RUNTIME_ERROR
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
