use std::env;

use tracing::debug;

use crate::errors::NotifyError;

/// Label used instead of a workflow name that is really a workflow file path.
pub const WORKFLOW_LINK_LABEL: &str = "Link to action run";

/// Read a process environment variable.
///
/// Values that are not valid UTF-8 are kept, with the invalid bytes replaced
/// by U+FFFD, rather than treated as unset.
#[must_use]
pub fn env_value(name: &str) -> Option<String> {
    env::var_os(name).map(|value| value.to_string_lossy().into_owned())
}

/// Which fields the notification carries, driven by `MSG_MINIMAL`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MinimalMode {
    /// Unset: every field.
    #[default]
    Full,
    /// `"true"`: only the title/summary field.
    SummaryOnly,
    /// A comma-separated list of optional fields, kept in the order given.
    Selected(Vec<OptionalField>),
}

impl MinimalMode {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "" => MinimalMode::Full,
            "true" => MinimalMode::SummaryOnly,
            list => MinimalMode::Selected(
                list.split(',')
                    .filter_map(|name| {
                        let field = OptionalField::parse(name);
                        if field.is_none() {
                            debug!("Ignoring unknown minimal field {:?}", name);
                        }
                        field
                    })
                    .collect(),
            ),
        }
    }
}

/// Fields that can be requested individually in minimal mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionalField {
    Duration,
    Start,
    ActionsUrl,
    Commit,
}

impl OptionalField {
    /// Case-insensitive; surrounding whitespace is significant.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "duration" => Some(OptionalField::Duration),
            "start" => Some(OptionalField::Start),
            "actions url" => Some(OptionalField::ActionsUrl),
            "commit" => Some(OptionalField::Commit),
            _ => None,
        }
    }
}

/// Presentation settings for the Slack message.
#[derive(Debug, Clone, Default)]
pub struct SlackSettings {
    pub username: String,
    pub icon_url: String,
    pub icon_emoji: String,
    pub channel: String,
    pub link_names: String,
    /// `None` when `SLACK_COLOR` is unset; an empty value is kept as-is.
    pub color: Option<String>,
    pub footer: Option<String>,
    pub title: String,
    pub at_user_id: String,
}

/// Values the CI runner exports about the repository and the run.
#[derive(Debug, Clone, Default)]
pub struct GithubContext {
    pub action: String,
    pub actor: String,
    pub event_name: String,
    pub git_ref: String,
    pub repository: String,
    pub server_url: String,
    pub sha: String,
    pub workflow: String,
    pub last_commit_author: String,
    pub last_commit_message: Option<String>,
    pub last_commit_long_sha: String,
    pub last_commit_short_sha: String,
}

/// Test run results reported by the pipeline.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub duration: String,
    pub start: String,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct HostInfo {
    pub site_title: String,
    pub site_name: String,
    pub host_title: String,
    pub host_name: String,
}

/// Everything the notifier needs, read once at startup.
#[derive(Debug, Clone)]
pub struct NotifyConfig {
    pub webhook_url: String,
    pub message: String,
    pub minimal: MinimalMode,
    pub slack: SlackSettings,
    pub github: GithubContext,
    pub report: RunReport,
    pub host: HostInfo,
}

impl NotifyConfig {
    pub fn from_env() -> Result<Self, NotifyError> {
        Self::from_lookup(env_value)
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// `lookup` returns `None` for unset variables. Variables whose default
    /// only applies when unset keep `Some("")` when set to an empty string.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, NotifyError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).unwrap_or_default();

        let webhook_url = var("SLACK_WEBHOOK");
        if webhook_url.is_empty() {
            return Err(NotifyError::MissingVariable("SLACK_WEBHOOK"));
        }
        let message = var("SLACK_MESSAGE");
        if message.is_empty() {
            return Err(NotifyError::MissingVariable("SLACK_MESSAGE"));
        }

        let mut workflow = var("GITHUB_WORKFLOW");
        if workflow.starts_with(".github") {
            workflow = WORKFLOW_LINK_LABEL.to_string();
        }

        Ok(Self {
            webhook_url,
            message,
            minimal: MinimalMode::parse(&var("MSG_MINIMAL")),
            slack: SlackSettings {
                username: var("SLACK_USERNAME"),
                icon_url: var("SLACK_ICON"),
                icon_emoji: var("SLACK_ICON_EMOJI"),
                channel: var("SLACK_CHANNEL"),
                link_names: var("SLACK_LINK_NAMES"),
                color: lookup("SLACK_COLOR"),
                footer: lookup("SLACK_FOOTER"),
                title: var("SLACK_TITLE"),
                at_user_id: var("SLACK_AT_USERID"),
            },
            github: GithubContext {
                action: var("GITHUB_ACTION"),
                actor: var("GITHUB_ACTOR"),
                event_name: var("GITHUB_EVENT_NAME"),
                git_ref: var("GITHUB_REF"),
                repository: var("GITHUB_REPOSITORY"),
                server_url: var("GITHUB_SERVER_URL"),
                sha: var("GITHUB_SHA"),
                workflow,
                last_commit_author: var("GITHUB_LAST_COMMIT_AUTHOR"),
                last_commit_message: lookup("GITHUB_LAST_COMMIT_MESSAGE"),
                last_commit_long_sha: var("GITHUB_LAST_COMMIT_LONG_SHA"),
                last_commit_short_sha: var("GITHUB_LAST_COMMIT_SHORT_SHA"),
            },
            report: RunReport {
                duration: var("TEST_DURATION"),
                start: var("TEST_START"),
                summary: lookup("TEST_SUMMARY"),
            },
            host: HostInfo {
                site_title: var("SITE_TITLE"),
                site_name: var("SITE_NAME"),
                host_title: var("HOST_TITLE"),
                host_name: var("HOST_NAME"),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_mode_parse() {
        assert_eq!(MinimalMode::parse(""), MinimalMode::Full);
        assert_eq!(MinimalMode::parse("true"), MinimalMode::SummaryOnly);
        assert_eq!(
            MinimalMode::parse("Duration,actions url,bogus,COMMIT"),
            MinimalMode::Selected(vec![
                OptionalField::Duration,
                OptionalField::ActionsUrl,
                OptionalField::Commit,
            ])
        );
    }

    #[test]
    fn test_optional_field_parse_keeps_whitespace_significant() {
        assert_eq!(OptionalField::parse("start"), Some(OptionalField::Start));
        assert_eq!(OptionalField::parse(" start"), None);
    }

    #[test]
    fn test_minimal_mode_other_than_true_is_a_list() {
        // "false" is not special; it names no known field.
        assert_eq!(MinimalMode::parse("false"), MinimalMode::Selected(vec![]));
    }
}
