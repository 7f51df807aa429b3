//! The linking pipeline
//!
//! Drives the three remote steps strictly in order: leave the PR link on
//! the Asana task, read the task's permalink, then post the permalink back
//! on the pull request. The first failure aborts the remaining steps; a
//! comment already posted is never retracted.

use tracing::info;

use crate::asana::AsanaClient;
use crate::error::Result;
use crate::event::TriggerContext;
use crate::github::GithubClient;
use crate::utils::{split_full_name, task_gid_from_ref};

/// The two values published as step outputs after a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkOutcome {
    pub pr_url: String,
    pub asana_task_url: String,
}

/// Confirms the task exists, then leaves the PR link on it as a story.
pub async fn add_pr_to_task(asana: &AsanaClient, gid: &str, pr_url: &str) -> Result<()> {
    asana.get_task(gid).await?;
    asana
        .add_story(gid, &format!("GitHub PR: {}", pr_url))
        .await
}

/// Posts the task's canonical URL as a comment on the pull request.
pub async fn comment_on_pr(
    github: &GithubClient,
    owner: &str,
    repo: &str,
    issue_number: u64,
    asana_task_url: &str,
) -> Result<()> {
    github
        .create_issue_comment(
            owner,
            repo,
            issue_number,
            &format!("Asana Task: {}", asana_task_url),
        )
        .await
}

/// Runs the full linking sequence for a pull request.
pub async fn run_link_pipeline(
    asana: &AsanaClient,
    github: &GithubClient,
    ctx: &TriggerContext,
) -> Result<LinkOutcome> {
    let (owner, repo) = split_full_name(&ctx.full_name)?;
    let gid = task_gid_from_ref(&ctx.branch_ref)?;

    // 1. PR link onto the task
    info!("Posting PR link on Asana task {}", gid);
    add_pr_to_task(asana, gid, &ctx.pr_url).await?;

    // 2. Canonical task URL, an independent round trip
    info!("Fetching permalink for Asana task {}", gid);
    let asana_task_url = asana.task_permalink(gid).await?;

    // 3. Task link back onto the PR
    info!(
        "Posting Asana link on {}/{} pull request #{}",
        owner, repo, ctx.issue_number
    );
    comment_on_pr(github, owner, repo, ctx.issue_number, &asana_task_url).await?;

    Ok(LinkOutcome {
        pr_url: ctx.pr_url.clone(),
        asana_task_url,
    })
}
