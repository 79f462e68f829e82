pub mod poll;
pub mod types;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::Result;
use types::Job;

const CODEBALL_API_URL: &str = "https://api.codeball.ai";

/// Read access to the prediction service. The poll loop drives this; retries
/// live there, not here.
#[async_trait]
pub trait JobApi: Send + Sync {
    /// Fetch the current state of a job. One network round trip.
    async fn fetch(&self, job_id: &str) -> Result<Job>;
}

pub struct JobClient {
    client: Client,
    base_url: String,
}

impl JobClient {
    pub fn new() -> Self {
        Self::with_base_url(CODEBALL_API_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for JobClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JobApi for JobClient {
    async fn fetch(&self, job_id: &str) -> Result<Job> {
        let url = format!("{}/jobs/{}", self.base_url, job_id);

        let body = self.client.get(&url).send().await?.bytes().await?;

        let job = serde_json::from_slice(&body)?;
        Ok(job)
    }
}
