use std::time::Duration;

use crate::error::{AppError, Result};

use super::types::Job;
use super::JobApi;

/// Retry budget for the poll loop. Prediction jobs are short and consistent,
/// so the interval is fixed rather than backing off.
#[derive(Debug, Clone)]
pub struct PollConfig {
    pub max_attempts: u32,
    pub interval: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            max_attempts: 60,
            interval: Duration::from_secs(5),
        }
    }
}

/// Poll the job until it reaches a terminal status.
///
/// The first fetch always happens and does not count against the budget.
/// Each retry sleeps `interval` before fetching again, so the worst case
/// blocks for `max_attempts * interval` wall-clock time and issues
/// `max_attempts + 1` fetches before failing with a timeout.
pub async fn wait_for_terminal<C: JobApi + ?Sized>(
    client: &C,
    job_id: &str,
    config: &PollConfig,
) -> Result<Job> {
    let mut job = client.fetch(job_id).await?;
    let mut attempts = 0;

    while !job.status.is_terminal() && attempts < config.max_attempts {
        attempts += 1;
        tracing::info!(
            job = %job_id,
            attempt = attempts,
            max_attempts = config.max_attempts,
            "Waiting for job to complete"
        );
        tokio::time::sleep(config.interval).await;
        job = client.fetch(job_id).await?;
    }

    if !job.status.is_terminal() {
        return Err(AppError::Timeout {
            job_id: job_id.to_string(),
            attempts,
        });
    }

    Ok(job)
}
