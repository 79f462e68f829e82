pub mod github;
pub mod types;

use async_trait::async_trait;

use crate::error::Result;
use types::Label;

/// Repository-hosting operations the action pipeline needs. Kept behind a
/// trait so the pipeline can run against an in-process fake in tests.
#[async_trait]
pub trait Platform: Send + Sync {
    /// List the labels defined on a repository.
    async fn list_labels(&self, owner: &str, repo: &str) -> Result<Vec<Label>>;

    /// Create a repository label.
    async fn create_label(
        &self,
        owner: &str,
        repo: &str,
        name: &str,
        color: &str,
        description: &str,
    ) -> Result<()>;

    /// Attach labels to an issue or PR.
    async fn add_labels(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        labels: &[String],
    ) -> Result<()>;

    /// Submit an approving review against a specific head commit.
    async fn approve_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
        commit_sha: &str,
        body: &str,
    ) -> Result<()>;
}
