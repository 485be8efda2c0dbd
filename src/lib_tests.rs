use super::*;

#[test]
fn exit_codes_are_distinct() {
    assert_ne!(EXIT_SUCCESS, EXIT_RUNTIME_ERROR);
    assert_ne!(EXIT_SUCCESS, EXIT_CONFIG_ERROR);
    assert_ne!(EXIT_RUNTIME_ERROR, EXIT_CONFIG_ERROR);
}

#[test]
fn config_errors_exit_with_config_code() {
    let err = StreakCardError::Config("GITHUB_TOKEN is missing".to_string());
    assert_eq!(exit_code_for(&err), EXIT_CONFIG_ERROR);
}

#[test]
fn runtime_errors_exit_with_runtime_code() {
    assert_eq!(
        exit_code_for(&StreakCardError::Parse("eof".to_string())),
        EXIT_RUNTIME_ERROR
    );
    assert_eq!(
        exit_code_for(&StreakCardError::Transport {
            url: "https://api.github.com/graphql".to_string(),
            message: "dns".to_string(),
        }),
        EXIT_RUNTIME_ERROR
    );
}
