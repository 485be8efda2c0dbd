use std::path::PathBuf;

use super::*;

fn render(use_colors: bool, err: &StreakCardError) -> String {
    let out = ErrorOutput::new(if use_colors {
        ColorMode::Always
    } else {
        ColorMode::Never
    });
    let mut buf = Vec::new();
    out.write_report(&mut buf, err);
    String::from_utf8(buf).unwrap()
}

#[test]
fn error_without_colors_basic() {
    let out = ErrorOutput::new(ColorMode::Never);
    let mut buf = Vec::new();
    out.write_error(&mut buf, "Parse", "unexpected end of input", None, None);
    assert_eq!(String::from_utf8(buf).unwrap(), "✖ Parse: unexpected end of input\n");
}

#[test]
fn missing_token_report_has_help() {
    let err = StreakCardError::Config("GITHUB_TOKEN is missing".to_string());

    let result = render(false, &err);

    assert!(result.starts_with("✖ Config: Configuration error: GITHUB_TOKEN is missing\n"));
    assert!(result.contains("  help: Export a personal access token"));
}

#[test]
fn write_failure_report_has_detail() {
    let err = StreakCardError::FileWrite {
        path: PathBuf::from("out/streak.svg"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
    };

    let result = render(false, &err);

    assert!(result.contains("✖ IO: Failed to write out/streak.svg\n"));
    assert!(result.contains("  × no such directory\n"));
}

#[test]
fn colored_report_uses_ansi_codes() {
    let err = StreakCardError::Parse("bad".to_string());

    let result = render(true, &err);

    assert!(result.contains(ansi::RED));
    assert!(result.contains(ansi::RESET));
}

#[test]
fn plain_report_has_no_ansi_codes() {
    let err = StreakCardError::Parse("bad".to_string());
    assert!(!render(false, &err).contains('\x1b'));
}
