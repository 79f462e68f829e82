use crate::codeball::types::{ContributionResult, Job, JobKind};
use crate::error::{AppError, Result};

/// The approval decision derived from a finished job.
#[derive(Debug, Clone)]
pub struct Verdict {
    pub approved: bool,
    pub job_id: String,
}

/// Interpret a terminal job. Only contribution jobs carry an approval result;
/// anything else is a hard error rather than a guess.
///
/// A contribution counts as approved only when the service reported
/// `approved`; a rejected or missing result leaves the pull request untouched.
pub fn evaluate(job: &Job) -> Result<Verdict> {
    let contribution = match &job.kind {
        JobKind::Contribution { contribution } => contribution,
        JobKind::Other {} => {
            return Err(AppError::NotContributionJob {
                job_id: job.id.clone(),
            })
        }
    };

    Ok(Verdict {
        approved: contribution.result == Some(ContributionResult::Approved),
        job_id: job.id.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codeball::types::{ContributionPayload, JobStatus};

    fn contribution_job(result: Option<ContributionResult>) -> Job {
        Job {
            id: "abc".to_string(),
            status: JobStatus::Completed,
            kind: JobKind::Contribution {
                contribution: ContributionPayload { result },
            },
        }
    }

    #[test]
    fn test_approved_result_yields_approved_verdict() {
        let verdict = evaluate(&contribution_job(Some(ContributionResult::Approved))).unwrap();
        assert!(verdict.approved);
        assert_eq!(verdict.job_id, "abc");
    }

    #[test]
    fn test_rejected_result_is_not_approved() {
        let verdict = evaluate(&contribution_job(Some(ContributionResult::Rejected))).unwrap();
        assert!(!verdict.approved);
    }

    #[test]
    fn test_missing_result_is_not_approved() {
        let verdict = evaluate(&contribution_job(None)).unwrap();
        assert!(!verdict.approved);
    }

    #[test]
    fn test_unrecognized_result_is_not_approved() {
        let verdict = evaluate(&contribution_job(Some(ContributionResult::Unknown))).unwrap();
        assert!(!verdict.approved);
    }

    #[test]
    fn test_non_contribution_job_is_an_error() {
        let job = Job {
            id: "xyz".to_string(),
            status: JobStatus::Completed,
            kind: JobKind::Other {},
        };

        let err = evaluate(&job).unwrap_err();
        assert!(matches!(
            err,
            AppError::NotContributionJob { job_id } if job_id == "xyz"
        ));
    }
}
