use pr_asana_link::ActionConfig;
use pr_asana_link::asana::AsanaClient;
use pr_asana_link::error::Result;
use pr_asana_link::event::{self, TriggerContext};
use pr_asana_link::github::GithubClient;
use pr_asana_link::linker::run_link_pipeline;
use pr_asana_link::outputs;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        error!("Run failed: {}", e);
        outputs::set_failed(&e.to_string());
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = ActionConfig::from_env()?;

    let asana = AsanaClient::new(config.asana_token, config.asana_base_url);
    let github = GithubClient::new(config.github_token, config.github_api_url);

    let payload = event::load_event()?;
    let ctx = TriggerContext::from_event(&payload)?;
    info!(
        "Linking PR #{} ({}) on {} from branch '{}'",
        ctx.issue_number, ctx.pr_url, ctx.full_name, ctx.branch_ref
    );

    let outcome = run_link_pipeline(&asana, &github, &ctx).await?;

    outputs::set_output("pr_url", &outcome.pr_url)?;
    outputs::set_output("asana_task_url", &outcome.asana_task_url)?;
    info!(
        "Linked PR {} <-> Asana task {}",
        outcome.pr_url, outcome.asana_task_url
    );

    Ok(())
}
