use serde::{Deserialize, Serialize};

/// Status of an async search job. The backend contract for the status
/// endpoint is still undefined, so parsing is deliberately permissive:
/// anything unrecognized maps to `Unknown` and keeps the poll loop going
/// until the attempt cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Pending,
    Running,
    Done,
    Failed,
    Unknown,
}

impl JobStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "pending" | "queued" => JobStatus::Pending,
            "running" | "processing" | "in_progress" => JobStatus::Running,
            "done" | "completed" | "success" => JobStatus::Done,
            "failed" | "error" => JobStatus::Failed,
            _ => JobStatus::Unknown,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Done | JobStatus::Failed)
    }
}
