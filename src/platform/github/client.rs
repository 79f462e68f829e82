use async_trait::async_trait;
use octocrab::Octocrab;

use crate::error::{AppError, Result};
use crate::platform::types::Label;
use crate::platform::Platform;

use super::mapper;

pub struct GitHubPlatform {
    client: Octocrab,
}

impl GitHubPlatform {
    pub fn new(token: &str) -> Result<Self> {
        let client = Octocrab::builder()
            .personal_token(token.to_string())
            .build()
            .map_err(|e| AppError::GitHubApi(format!("Failed to build octocrab client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Platform for GitHubPlatform {
    async fn list_labels(&self, owner: &str, repo: &str) -> Result<Vec<Label>> {
        let page = self
            .client
            .issues(owner, repo)
            .list_labels_for_repo()
            .per_page(100)
            .send()
            .await?;

        Ok(page.items.into_iter().map(mapper::map_label).collect())
    }

    async fn create_label(
        &self,
        owner: &str,
        repo: &str,
        name: &str,
        color: &str,
        description: &str,
    ) -> Result<()> {
        self.client
            .issues(owner, repo)
            .create_label(name, color, description)
            .await?;

        Ok(())
    }

    async fn add_labels(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        labels: &[String],
    ) -> Result<()> {
        self.client
            .issues(owner, repo)
            .add_labels(issue_number, labels)
            .await?;

        Ok(())
    }

    async fn approve_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
        commit_sha: &str,
        body: &str,
    ) -> Result<()> {
        // octocrab doesn't have a typed create-review builder, use the API directly
        let route = format!("/repos/{owner}/{repo}/pulls/{pr_number}/reviews");
        let payload = serde_json::json!({
            "commit_id": commit_sha,
            "body": body,
            "event": "APPROVE",
        });

        let _: serde_json::Value = self.client.post(&route, Some(&payload)).await?;

        Ok(())
    }
}
