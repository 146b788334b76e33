// Entry point for the CI notification step.

#[tokio::main(flavor = "current_thread")]
async fn main() {
    ci_slack_notify::setup_logging();

    let code = ci_slack_notify::run(ci_slack_notify::core::config::env_value).await;
    std::process::exit(code);
}
