use std::collections::BTreeMap;
use std::time::Duration;
use reqwest::Client;
use uuid::Uuid;
use crate::config::constants::{poll_interval, request_timeout};
use crate::enums::job_status::JobStatus;
use crate::errors::{PanelError, PanelResult};
use crate::structs::api::job_status_response::JobStatusResponse;
use crate::structs::api::search_request::SearchRequest;
use crate::structs::api::search_response::SearchResponse;
use crate::structs::api::statistics_response::StatisticsResponse;
use crate::structs::config::api_config::ApiConfig;
use crate::structs::search_session::SearchSession;
use crate::structs::statistic::Statistic;

/// Client for the search and visualization endpoints.
#[derive(Clone)]
pub struct SearchClient {
    base_url: String,
    client: Client,
    poll_interval: Duration,
    max_poll_attempts: u32,
}

impl SearchClient {

    pub fn new(config: &ApiConfig) -> PanelResult<Self> {
        let client = Client::builder()
            .timeout(request_timeout(config.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            poll_interval: poll_interval(config.poll_interval_ms),
            max_poll_attempts: config.max_poll_attempts,
        })
    }

    /// Natural-language search. Waits for the async job to finish when the
    /// response names one, then returns a fresh session that replaces any
    /// previous one held by the caller.
    pub async fn search(&self, query: &str, limit: Option<usize>) -> PanelResult<SearchSession> {
        let url = format!("{}/search/nl", self.base_url);
        let request_body = SearchRequest {
            query: query.to_string(),
            limit,
        };

        log::info!("Submitting search: {}", query);
        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await?;
        let response = Self::check_status("natural-language search", &url, response).await?;
        let parsed: SearchResponse = response.json().await?;

        if let Some(task_id) = &parsed.task_id {
            self.wait_for_job(task_id).await?;
        }

        // Some backends omit the session id; synthesize a local one so the
        // rest of the pipeline can still label its outputs.
        let session_id = parsed
            .session_id
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        log::info!(
            "Search returned {} respondents (session {})",
            parsed.respondents.len(),
            session_id
        );
        Ok(SearchSession::new(session_id, query.to_string(), parsed.respondents))
    }

    pub async fn fetch_statistics(&self, session_id: &str) -> PanelResult<BTreeMap<String, Statistic>> {
        let url = format!("{}/visualization/{}", self.base_url, session_id);
        let response = self.client.get(&url).send().await?;
        let response = Self::check_status("visualization statistics", &url, response).await?;
        let parsed: StatisticsResponse = response.json().await?;
        Ok(parsed.statistics)
    }

    /// Polls the job status endpoint until a terminal status or the attempt
    /// cap. The real status protocol is still undefined on the backend side,
    /// so unknown statuses just keep the loop going.
    pub async fn wait_for_job(&self, task_id: &str) -> PanelResult<JobStatus> {
        let url = format!("{}/search/status/{}", self.base_url, task_id);

        for attempt in 1..=self.max_poll_attempts {
            let response = self.client.get(&url).send().await?;
            let response = Self::check_status("job status poll", &url, response).await?;
            let parsed: JobStatusResponse = response.json().await?;
            let status = JobStatus::parse(&parsed.status);
            log::debug!("Job {} attempt {}/{}: {:?}", task_id, attempt, self.max_poll_attempts, status);

            match status {
                JobStatus::Done => return Ok(JobStatus::Done),
                JobStatus::Failed => {
                    let reason = parsed
                        .detail
                        .unwrap_or_else(|| "search job reported failure".to_string());
                    return Err(PanelError::search_error("job polling", &reason, true));
                }
                _ => tokio::time::sleep(self.poll_interval).await,
            }
        }

        Err(PanelError::search_error(
            "job polling",
            "search job did not finish within the attempt cap",
            true,
        ))
    }

    async fn check_status(
        operation: &str,
        url: &str,
        response: reqwest::Response,
    ) -> PanelResult<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let reason = match status {
            401 => format!("authentication failed: {}", error_text),
            _ => error_text,
        };

        Err(PanelError::network_error(operation, Some(url), Some(status), &reason))
    }
}
