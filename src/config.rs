use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::pipeline::ActionConfig;

/// Action inputs exactly as the workflow runner exposes them: `INPUT_*`
/// environment variables, every value a string and unset inputs often present
/// as empty strings.
#[derive(Debug, Default, Deserialize)]
pub struct RawInputs {
    #[serde(rename = "codeball-job-id")]
    pub codeball_job_id: Option<String>,
    pub github_token: Option<String>,
    #[serde(rename = "do-approve")]
    pub do_approve: Option<String>,
    #[serde(rename = "do-label")]
    pub do_label: Option<String>,
    #[serde(rename = "label-name")]
    pub label_name: Option<String>,
}

/// Validated, immutable inputs for one run.
pub struct ActionInputs {
    pub job_id: String,
    pub github_token: String,
    pub actions: ActionConfig,
}

// Manual Debug impl to avoid leaking the token
impl std::fmt::Debug for ActionInputs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionInputs")
            .field("job_id", &self.job_id)
            .field("github_token", &"[REDACTED]")
            .field("actions", &self.actions)
            .finish()
    }
}

impl ActionInputs {
    pub fn load() -> Result<Self> {
        let raw: RawInputs = config::Config::builder()
            .add_source(config::Environment::with_prefix("INPUT"))
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| AppError::Config(e.to_string()))?;

        raw.validate()
    }
}

impl RawInputs {
    /// Turn raw inputs into a run configuration. Booleans follow the action
    /// input convention: the literal string `"true"` enables, anything else
    /// disables.
    pub fn validate(self) -> Result<ActionInputs> {
        let job_id = self
            .codeball_job_id
            .filter(|v| !v.is_empty())
            .ok_or_else(|| AppError::Config("No job ID found".to_string()))?;

        let github_token = self
            .github_token
            .filter(|v| !v.is_empty())
            .ok_or(AppError::MissingToken)?;

        let do_approve = self.do_approve.as_deref() == Some("true");
        let do_label = self.do_label.as_deref() == Some("true");
        let label_name = self.label_name.unwrap_or_default();

        if do_label && label_name.is_empty() {
            return Err(AppError::Config("No label name found".to_string()));
        }

        Ok(ActionInputs {
            job_id,
            github_token,
            actions: ActionConfig {
                do_approve,
                do_label,
                label_name,
            },
        })
    }
}
