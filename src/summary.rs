use std::io::Write;
use std::path::PathBuf;

use crate::error::Result;
use crate::evaluate::Verdict;

const PREDICTION_URL: &str = "https://codeball.ai/prediction";

/// Render the markdown step summary: the verdict for the PR plus a link to
/// the hosted prediction page.
pub fn render(pr_number: u64, verdict: &Verdict) -> String {
    let result = if verdict.approved {
        "Approved ✅"
    } else {
        "Not approved"
    };

    format!(
        "## Codeball\n\n\
         | Pull Request | Result |\n\
         | --- | --- |\n\
         | #{pr_number} | {result} |\n\n\
         [View on web]({PREDICTION_URL}/{job_id})\n",
        job_id = verdict.job_id,
    )
}

/// The runner's step-summary file. Absent outside workflow runs, and writing
/// it is best-effort either way: the caller logs failures and moves on.
pub struct StepSummary {
    path: PathBuf,
}

impl StepSummary {
    pub fn from_env() -> Option<Self> {
        std::env::var_os("GITHUB_STEP_SUMMARY").map(|path| Self { path: path.into() })
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn append(&self, markdown: &str) -> Result<()> {
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        file.write_all(markdown.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(approved: bool) -> Verdict {
        Verdict {
            approved,
            job_id: "abc".to_string(),
        }
    }

    #[test]
    fn test_render_approved() {
        let markdown = render(42, &verdict(true));

        assert!(markdown.contains("## Codeball"));
        assert!(markdown.contains("| Pull Request | Result |"));
        assert!(markdown.contains("| #42 | Approved ✅ |"));
        assert!(markdown.contains("[View on web](https://codeball.ai/prediction/abc)"));
    }

    #[test]
    fn test_render_not_approved() {
        let markdown = render(7, &verdict(false));
        assert!(markdown.contains("| #7 | Not approved |"));
    }

    #[test]
    fn test_append_accumulates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.md");
        let sink = StepSummary::at(&path);

        sink.append("first\n").unwrap();
        sink.append("second\n").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }
}
