use super::*;

#[test]
fn spinner_hidden_in_quiet_mode() {
    let spinner = FetchSpinner::new_with_visibility("octocat", true, true);
    assert!(spinner.is_hidden());
    spinner.finish();
}

#[test]
fn spinner_hidden_without_tty() {
    let spinner = FetchSpinner::new_with_visibility("octocat", false, false);
    assert!(spinner.is_hidden());
    spinner.finish();
}

#[test]
fn spinner_finish_is_idempotent() {
    let spinner = FetchSpinner::new("octocat", true);
    spinner.finish();
    spinner.finish();
}
