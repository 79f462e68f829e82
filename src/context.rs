use std::path::Path;

use serde::Deserialize;

use crate::error::{AppError, Result};

/// The slice of the workflow event payload this action reads. Every field is
/// optional on the wire; `PrContext::from_event` is where absence becomes an
/// error.
#[derive(Debug, Deserialize)]
pub struct EventPayload {
    pub pull_request: Option<PullRequestPayload>,
    pub repository: Option<RepositoryPayload>,
}

#[derive(Debug, Deserialize)]
pub struct PullRequestPayload {
    pub number: Option<u64>,
    pub html_url: Option<String>,
    pub head: Option<PullRequestRef>,
}

#[derive(Debug, Deserialize)]
pub struct PullRequestRef {
    pub sha: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RepositoryPayload {
    pub name: Option<String>,
    pub owner: Option<OwnerPayload>,
}

#[derive(Debug, Deserialize)]
pub struct OwnerPayload {
    pub login: Option<String>,
}

impl EventPayload {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read(path)?;
        let payload = serde_json::from_slice(&raw)?;
        Ok(payload)
    }
}

/// Everything the action needs to know about the target pull request,
/// validated once at entry. No network activity happens before this succeeds.
#[derive(Debug, Clone)]
pub struct PrContext {
    pub owner: String,
    pub repo: String,
    pub number: u64,
    pub head_sha: String,
    pub url: String,
}

impl PrContext {
    pub fn from_event(event: &EventPayload) -> Result<Self> {
        let pull_request = event.pull_request.as_ref();

        let url = pull_request
            .and_then(|pr| pr.html_url.clone())
            .ok_or_else(|| AppError::Config("No pull request URL found".to_string()))?;

        let number = pull_request
            .and_then(|pr| pr.number)
            .ok_or_else(|| AppError::Config("No pull request number found".to_string()))?;

        let head_sha = pull_request
            .and_then(|pr| pr.head.as_ref())
            .and_then(|head| head.sha.clone())
            .ok_or_else(|| AppError::Config("No commit ID found".to_string()))?;

        let owner = event
            .repository
            .as_ref()
            .and_then(|repo| repo.owner.as_ref())
            .and_then(|owner| owner.login.clone())
            .ok_or_else(|| AppError::Config("No repo owner found".to_string()))?;

        let repo = event
            .repository
            .as_ref()
            .and_then(|repo| repo.name.clone())
            .ok_or_else(|| AppError::Config("No repo name found".to_string()))?;

        Ok(Self {
            owner,
            repo,
            number,
            head_sha,
            url,
        })
    }
}
