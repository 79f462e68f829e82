use thiserror::Error;

/// GitHub's message when the workflow token lacks write scope on the repo.
const PERMISSION_DENIED_MARKER: &str = "Resource not accessible by integration";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No GITHUB_TOKEN found")]
    MissingToken,

    #[error("Job {job_id} is not finished (gave up after {attempts} attempts)")]
    Timeout { job_id: String, attempts: u32 },

    #[error("Job {job_id} is not a contribution job")]
    NotContributionJob { job_id: String },

    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    #[error("GitHub permission error: {0}")]
    Permission(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Classify a GitHub API failure message. Token-scope failures get their own
/// variant so the top level can print remediation instructions.
fn classify_github_error(message: String) -> AppError {
    if message.contains(PERMISSION_DENIED_MARKER) {
        AppError::Permission(message)
    } else {
        AppError::GitHubApi(message)
    }
}

impl From<octocrab::Error> for AppError {
    fn from(e: octocrab::Error) -> Self {
        classify_github_error(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_message_is_distinguished() {
        let err = classify_github_error(
            "GitHub: Resource not accessible by integration".to_string(),
        );
        assert!(matches!(err, AppError::Permission(_)));
    }

    #[test]
    fn test_other_github_errors_stay_generic() {
        let err = classify_github_error("GitHub: Not Found".to_string());
        assert!(matches!(err, AppError::GitHubApi(_)));
    }

    #[test]
    fn test_timeout_message_carries_job_and_attempts() {
        let err = AppError::Timeout {
            job_id: "abc".to_string(),
            attempts: 60,
        };
        assert_eq!(
            err.to_string(),
            "Job abc is not finished (gave up after 60 attempts)"
        );
    }
}
