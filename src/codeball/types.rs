use serde::Deserialize;

/// A prediction job as returned by `GET /jobs/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Job {
    pub id: String,
    pub status: JobStatus,
    #[serde(flatten)]
    pub kind: JobKind,
}

/// Lifecycle status of a job. The service may grow new statuses; anything
/// unrecognized is treated as still in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Pending,
    Running,
    Completed,
    Failed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl JobStatus {
    /// Whether the job can transition no further. Polling stops here.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            JobStatus::Completed | JobStatus::Failed | JobStatus::Cancelled
        )
    }
}

/// What kind of prediction the job carries, discriminated by the presence of
/// the `contribution` object in the wire document.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum JobKind {
    Contribution { contribution: ContributionPayload },
    Other {},
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContributionPayload {
    #[serde(default)]
    pub result: Option<ContributionResult>,
}

/// Outcome reported for a contribution job. Only `approved` triggers the
/// action pipeline; anything else, including results this crate doesn't know
/// about, leaves the pull request alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContributionResult {
    Approved,
    Rejected,
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_contribution_job() {
        let job: Job = serde_json::from_str(
            r#"{"id":"abc","status":"completed","contribution":{"result":"approved"}}"#,
        )
        .unwrap();

        assert_eq!(job.id, "abc");
        assert_eq!(job.status, JobStatus::Completed);
        match job.kind {
            JobKind::Contribution { contribution } => {
                assert_eq!(contribution.result, Some(ContributionResult::Approved));
            }
            JobKind::Other {} => panic!("expected contribution job"),
        }
    }

    #[test]
    fn test_decode_non_contribution_job() {
        let job: Job =
            serde_json::from_str(r#"{"id":"xyz","status":"running"}"#).unwrap();
        assert!(matches!(job.kind, JobKind::Other {}));
    }

    #[test]
    fn test_decode_contribution_without_result() {
        let job: Job = serde_json::from_str(
            r#"{"id":"abc","status":"running","contribution":{}}"#,
        )
        .unwrap();
        match job.kind {
            JobKind::Contribution { contribution } => {
                assert_eq!(contribution.result, None);
            }
            JobKind::Other {} => panic!("expected contribution job"),
        }
    }

    #[test]
    fn test_unrecognized_result_stays_a_contribution_job() {
        let job: Job = serde_json::from_str(
            r#"{"id":"abc","status":"completed","contribution":{"result":"skipped"}}"#,
        )
        .unwrap();
        match job.kind {
            JobKind::Contribution { contribution } => {
                assert_eq!(contribution.result, Some(ContributionResult::Unknown));
            }
            JobKind::Other {} => panic!("expected contribution job"),
        }
    }

    #[test]
    fn test_unknown_status_is_not_terminal() {
        let job: Job =
            serde_json::from_str(r#"{"id":"abc","status":"enqueued"}"#).unwrap();
        assert_eq!(job.status, JobStatus::Unknown);
        assert!(!job.status.is_terminal());
    }

    #[test]
    fn test_terminal_partition() {
        assert!(JobStatus::Completed.is_terminal());
        assert!(JobStatus::Failed.is_terminal());
        assert!(JobStatus::Cancelled.is_terminal());
        assert!(!JobStatus::Pending.is_terminal());
        assert!(!JobStatus::Running.is_terminal());
        assert!(!JobStatus::Unknown.is_terminal());
    }
}
