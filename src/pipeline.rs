use crate::context::PrContext;
use crate::error::Result;
use crate::evaluate::Verdict;
use crate::platform::Platform;

const LABEL_COLOR: &str = "008E43";
const LABEL_DESCRIPTION: &str = "Codeball approved this pull request";
const APPROVE_BODY: &str = "Codeball: LGTM! :+1:";

/// Which side effects run for an approved verdict. Either, both, or neither
/// may be enabled.
#[derive(Debug, Clone)]
pub struct ActionConfig {
    pub do_approve: bool,
    pub do_label: bool,
    pub label_name: String,
}

/// What the pipeline actually did.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ActionReport {
    pub labeled: bool,
    pub review_submitted: bool,
}

/// Apply the verdict to the pull request: label first, then approve, each
/// gated by its own flag. Remote mutations are not rolled back; the first
/// failing call aborts whatever remains.
pub async fn apply(
    platform: &dyn Platform,
    ctx: &PrContext,
    config: &ActionConfig,
    verdict: &Verdict,
) -> Result<ActionReport> {
    if !verdict.approved {
        tracing::info!(job = %verdict.job_id, "Job is not approved, will not approve the PR");
        return Ok(ActionReport::default());
    }

    tracing::info!(job = %verdict.job_id, "Job is approved, approving the PR now!");

    let mut report = ActionReport::default();

    if config.do_label {
        tracing::debug!(label = %config.label_name, pr = %ctx.url, "Adding label to PR");

        ensure_label_exists(platform, ctx, &config.label_name).await?;

        platform
            .add_labels(&ctx.owner, &ctx.repo, ctx.number, &[config.label_name.clone()])
            .await?;

        report.labeled = true;
    }

    if config.do_approve {
        platform
            .approve_pull_request(&ctx.owner, &ctx.repo, ctx.number, &ctx.head_sha, APPROVE_BODY)
            .await?;

        report.review_submitted = true;
    }

    Ok(report)
}

/// Create the label on the repository if it doesn't exist yet. Attaching an
/// already-attached label is accepted by GitHub, so the caller stays
/// idempotent across re-runs.
async fn ensure_label_exists(
    platform: &dyn Platform,
    ctx: &PrContext,
    label_name: &str,
) -> Result<()> {
    let existing = platform.list_labels(&ctx.owner, &ctx.repo).await?;

    if existing.iter().any(|label| label.name == label_name) {
        tracing::debug!(label = %label_name, "Label already exists, will not create it");
        return Ok(());
    }

    tracing::info!(label = %label_name, "Label does not exist, creating it now");

    platform
        .create_label(&ctx.owner, &ctx.repo, label_name, LABEL_COLOR, LABEL_DESCRIPTION)
        .await
}
