use std::collections::HashMap;

use ci_slack_notify::core::config::{MinimalMode, NotifyConfig, OptionalField};
use ci_slack_notify::errors::NotifyError;

fn load(vars: &[(&str, &str)]) -> Result<NotifyConfig, NotifyError> {
    let env: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    NotifyConfig::from_lookup(|name| env.get(name).cloned())
}

const REQUIRED: [(&str, &str); 2] = [
    ("SLACK_WEBHOOK", "https://hooks.example.test/T000/B000"),
    ("SLACK_MESSAGE", "Build finished"),
];

#[test]
fn test_missing_webhook_is_reported_first() {
    let err = load(&[]).unwrap_err();
    assert!(matches!(err, NotifyError::MissingVariable("SLACK_WEBHOOK")));
}

#[test]
fn test_empty_webhook_counts_as_missing() {
    let err = load(&[("SLACK_WEBHOOK", ""), ("SLACK_MESSAGE", "hi")]).unwrap_err();
    assert!(matches!(err, NotifyError::MissingVariable("SLACK_WEBHOOK")));
}

#[test]
fn test_missing_message() {
    let err = load(&[("SLACK_WEBHOOK", "https://hooks.example.test")]).unwrap_err();
    assert!(matches!(err, NotifyError::MissingVariable("SLACK_MESSAGE")));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_required_values_are_kept() {
    let config = load(&REQUIRED).unwrap();
    assert_eq!(config.webhook_url, "https://hooks.example.test/T000/B000");
    assert_eq!(config.message, "Build finished");
    assert_eq!(config.minimal, MinimalMode::Full);
}

#[test]
fn test_workflow_file_path_is_relabelled() {
    let mut vars = REQUIRED.to_vec();
    vars.push(("GITHUB_WORKFLOW", ".github/workflows/ci.yml"));
    let config = load(&vars).unwrap();
    assert_eq!(config.github.workflow, "Link to action run");

    let mut vars = REQUIRED.to_vec();
    vars.push(("GITHUB_WORKFLOW", "CI"));
    let config = load(&vars).unwrap();
    assert_eq!(config.github.workflow, "CI");
}

#[test]
fn test_set_but_empty_values_are_distinguished_from_unset() {
    let config = load(&REQUIRED).unwrap();
    assert_eq!(config.slack.color, None);
    assert_eq!(config.report.summary, None);

    let mut vars = REQUIRED.to_vec();
    vars.extend([("SLACK_COLOR", ""), ("TEST_SUMMARY", "")]);
    let config = load(&vars).unwrap();
    assert_eq!(config.slack.color.as_deref(), Some(""));
    assert_eq!(config.report.summary.as_deref(), Some(""));
}

#[test]
fn test_minimal_mode_is_parsed_from_env() {
    let mut vars = REQUIRED.to_vec();
    vars.push(("MSG_MINIMAL", "commit,Start"));
    let config = load(&vars).unwrap();
    assert_eq!(
        config.minimal,
        MinimalMode::Selected(vec![OptionalField::Commit, OptionalField::Start])
    );
}
