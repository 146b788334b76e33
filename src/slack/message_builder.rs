//! Builds the webhook payload from a [`NotifyConfig`].
//!
//! All formatting decisions live here: which fields appear (minimal mode),
//! their order, the colour bar, the host block and the fallback text.

use crate::core::config::{MinimalMode, NotifyConfig, OptionalField};
use crate::core::models::{Attachment, Field, Message};

/// Footer used when `SLACK_FOOTER` is unset.
pub const DEFAULT_FOOTER: &str =
    "<https://github.com/poper-inc/action-slack-notify|Powered By poper-inc's gitHub actions library>";

/// Summary value used when `TEST_SUMMARY` is unset.
pub const DEFAULT_SUMMARY: &str = "EOM";

/// Map a semantic colour keyword to the token Slack understands.
///
/// Unknown values pass through unchanged; an unset colour is `good`.
///
/// # Examples
///
/// ```
/// use ci_slack_notify::slack::message_builder::resolve_color;
///
/// assert_eq!(resolve_color(Some("failure")), "danger");
/// assert_eq!(resolve_color(Some("#ff00ff")), "#ff00ff");
/// assert_eq!(resolve_color(None), "good");
/// ```
#[must_use]
pub fn resolve_color(color: Option<&str>) -> String {
    match color {
        Some("success") | None => "good".to_string(),
        Some("cancelled") => "#808080".to_string(),
        Some("failure") => "danger".to_string(),
        Some(other) => other.to_string(),
    }
}

fn slack_link(url: &str, label: &str) -> String {
    format!("<{url}|{label}>")
}

fn summary_field(config: &NotifyConfig) -> Field {
    Field::new(
        config.slack.title.clone(),
        config
            .report
            .summary
            .clone()
            .unwrap_or_else(|| DEFAULT_SUMMARY.to_string()),
        false,
    )
}

fn optional_field(config: &NotifyConfig, field: OptionalField) -> Field {
    let github = &config.github;
    match field {
        OptionalField::Duration => Field::new("Duration", config.report.duration.clone(), true),
        OptionalField::Start => Field::new("Start", config.report.start.clone(), true),
        OptionalField::ActionsUrl => {
            let checks = format!(
                "{}/{}/commit/{}/checks",
                github.server_url, github.repository, github.sha
            );
            Field::new("Actions URL", slack_link(&checks, &github.workflow), true)
        }
        OptionalField::Commit => {
            let commit = format!(
                "{}/{}/commit/{}",
                github.server_url, github.repository, github.last_commit_long_sha
            );
            Field::new(
                format!(
                    "Last Commit Message: {}",
                    github.last_commit_message.as_deref().unwrap_or("Commit")
                ),
                slack_link(&commit, &github.last_commit_short_sha),
                true,
            )
        }
    }
}

/// Assemble the ordered field list for the attachment.
///
/// In list mode each requested field is inserted ahead of the ones already
/// built, so `"duration,start"` yields Start, Duration, then the summary.
#[must_use]
pub fn build_fields(config: &NotifyConfig) -> Vec<Field> {
    let mut fields = match &config.minimal {
        MinimalMode::Full => vec![
            optional_field(config, OptionalField::Duration),
            optional_field(config, OptionalField::Start),
            optional_field(config, OptionalField::ActionsUrl),
            optional_field(config, OptionalField::Commit),
            summary_field(config),
        ],
        MinimalMode::SummaryOnly => vec![summary_field(config)],
        MinimalMode::Selected(requested) => {
            let mut fields = vec![summary_field(config)];
            for field in requested {
                fields.insert(0, optional_field(config, *field));
            }
            fields
        }
    };

    let host = &config.host;
    if !host.host_name.is_empty() {
        fields = [
            Field::new(host.site_title.clone(), host.site_name.clone(), true),
            Field::new(host.host_title.clone(), host.host_name.clone(), true),
        ]
        .into_iter()
        .chain(fields)
        .collect();
    }

    fields
}

/// Plain-text summary for clients that cannot render attachments.
#[must_use]
pub fn build_fallback(config: &NotifyConfig) -> String {
    if let Some(summary) = &config.report.summary {
        return summary.clone();
    }
    let github = &config.github;
    format!(
        "GITHUB_ACTION={} \n GITHUB_ACTOR={} \n GITHUB_EVENT_NAME={} \n GITHUB_REF={} \n GITHUB_REPOSITORY={} \n GITHUB_WORKFLOW={}",
        github.action,
        github.actor,
        github.event_name,
        github.git_ref,
        github.repository,
        github.workflow
    )
}

#[must_use]
pub fn build_message(config: &NotifyConfig) -> Message {
    let github = &config.github;
    let slack = &config.slack;
    let author_page = format!("{}/{}", github.server_url, github.last_commit_author);

    let attachment = Attachment {
        fallback: build_fallback(config),
        color: resolve_color(slack.color.as_deref()),
        author_name: format!("Last Commit Author: {}", github.last_commit_author),
        author_icon: format!("{author_page}.png?size=32"),
        author_link: author_page,
        footer: slack
            .footer
            .clone()
            .unwrap_or_else(|| DEFAULT_FOOTER.to_string()),
        at_someone: format!("<@{}>", slack.at_user_id),
        fields: build_fields(config),
    };

    Message {
        username: slack.username.clone(),
        icon_url: slack.icon_url.clone(),
        icon_emoji: slack.icon_emoji.clone(),
        channel: slack.channel.clone(),
        link_names: slack.link_names.clone(),
        unfurl_links: false,
        attachments: vec![attachment],
    }
}
