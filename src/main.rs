use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use codeball_approver::codeball::poll::{self, PollConfig};
use codeball_approver::codeball::JobClient;
use codeball_approver::config::ActionInputs;
use codeball_approver::context::{EventPayload, PrContext};
use codeball_approver::error::{AppError, Result};
use codeball_approver::evaluate;
use codeball_approver::pipeline;
use codeball_approver::platform::github::GitHubPlatform;
use codeball_approver::summary::{self, StepSummary};

#[derive(Parser)]
#[command(
    name = "codeball-approver",
    about = "Labels and approves pull requests based on a Codeball prediction"
)]
struct Cli {
    /// Path to the workflow event payload (defaults to $GITHUB_EVENT_PATH)
    #[arg(short, long)]
    event: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::MissingToken) => {
            tracing::error!("No GITHUB_TOKEN found");
            ExitCode::FAILURE
        }
        Err(AppError::Permission(inner)) => {
            tracing::error!(
                "Codeball Approver failed to access GitHub. Check the \"GITHUB_TOKEN \
                 Permissions\" of this job and make sure that the job has WRITE \
                 permissions to Pull Requests."
            );
            tracing::error!(error = %inner);
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::error!(error = %e, "Codeball Approver failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let event_path = cli
        .event
        .or_else(|| std::env::var_os("GITHUB_EVENT_PATH").map(PathBuf::from))
        .ok_or_else(|| AppError::Config("No event payload found".to_string()))?;

    let event = EventPayload::load(&event_path)?;
    let ctx = PrContext::from_event(&event)?;

    let inputs = ActionInputs::load()?;

    tracing::info!(job = %inputs.job_id, "Job ID");
    tracing::info!(do_approve = inputs.actions.do_approve, "Configuration");
    tracing::info!(
        do_label = inputs.actions.do_label,
        label_name = %inputs.actions.label_name,
        "Configuration"
    );

    let client = JobClient::new();
    let job = poll::wait_for_terminal(&client, &inputs.job_id, &PollConfig::default()).await?;

    let verdict = evaluate::evaluate(&job)?;

    let platform = GitHubPlatform::new(&inputs.github_token)?;
    pipeline::apply(&platform, &ctx, &inputs.actions, &verdict).await?;

    if let Some(sink) = StepSummary::from_env() {
        if let Err(e) = sink.append(&summary::render(ctx.number, &verdict)) {
            tracing::warn!(error = %e, "Failed to write step summary");
        }
    }

    Ok(())
}
