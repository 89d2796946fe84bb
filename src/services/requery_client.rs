use std::pin::Pin;
use reqwest::Client;
use futures::{FutureExt, Stream, StreamExt, TryStreamExt};
use crate::config::constants::request_timeout;
use crate::errors::{PanelError, PanelResult};
use crate::structs::api::api_error_body::ApiErrorBody;
use crate::structs::api::requery_request::RequeryRequest;
use crate::structs::chat_event::{ChatEvent, ChatEventData};
use crate::structs::config::api_config::ApiConfig;

/// Client for the LLM re-query endpoint. Responses arrive as an SSE stream
/// of `data:` lines carrying assistant text deltas and, at the end, the
/// refined respondent list.
#[derive(Clone)]
pub struct RequeryClient {
    base_url: String,
    client: Client,
}

impl RequeryClient {

    pub fn new(config: &ApiConfig) -> PanelResult<Self> {
        let client = Client::builder()
            .timeout(request_timeout(config.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub async fn stream_requery(
        &self,
        session_id: &str,
        message: &str,
    ) -> PanelResult<Pin<Box<dyn Stream<Item = PanelResult<ChatEvent>> + Send>>> {
        let url = format!("{}/search/requery", self.base_url);
        let request_body = RequeryRequest {
            session_id: session_id.to_string(),
            message: message.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Accept", "text/event-stream")
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            // A server-provided detail string overrides the canned chat
            // fallback; surface it as the recoverable search error the chat
            // loop looks for.
            if let Ok(body) = serde_json::from_str::<ApiErrorBody>(&error_text) {
                if let Some(detail) = body.detail {
                    return Err(PanelError::search_error("re-query", &detail, true));
                }
            }
            return Err(PanelError::network_error("re-query", Some(&url), Some(status), &error_text));
        }

        let stream = response
            .bytes_stream()
            .map_err(|e| PanelError::network_error("re-query stream", None, None, &e.to_string()))
            .fold(String::new(), |mut buffer, chunk_result| async move {
                match chunk_result {
                    Ok(chunk) => {
                        buffer.push_str(&String::from_utf8_lossy(&chunk));
                        buffer
                    }
                    Err(_) => buffer,
                }
            })
            .map(|complete_data| {
                let items: Vec<PanelResult<ChatEvent>> = complete_data
                    .lines()
                    .filter_map(Self::parse_sse_line)
                    .collect();
                futures::stream::iter(items)
            })
            .flatten_stream();

        Ok(Box::pin(stream))
    }

    fn parse_sse_line(line: &str) -> Option<PanelResult<ChatEvent>> {
        if line.trim().is_empty() || !line.starts_with("data: ") {
            return None;
        }

        let data = &line[6..];
        if data.trim() == "[DONE]" {
            return Some(Ok(ChatEvent::Done));
        }

        match serde_json::from_str::<ChatEventData>(data) {
            Ok(event) => match event.event_type.as_str() {
                "delta" => Some(Ok(ChatEvent::Delta(event.text.unwrap_or_default()))),
                "result" => Some(Ok(ChatEvent::Result(event.respondents.unwrap_or_default()))),
                "done" => Some(Ok(ChatEvent::Done)),
                _ => None,
            },
            Err(e) => Some(Err(PanelError::parse_error("re-query event", &e.to_string()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_delta_and_result_lines() {
        let delta = RequeryClient::parse_sse_line(r#"data: {"type":"delta","text":"안녕"}"#);
        assert!(matches!(delta, Some(Ok(ChatEvent::Delta(text))) if text == "안녕"));

        let result = RequeryClient::parse_sse_line(
            r#"data: {"type":"result","respondents":[{"user_id":"u1"}]}"#,
        );
        match result {
            Some(Ok(ChatEvent::Result(respondents))) => {
                assert_eq!(respondents.len(), 1);
                assert_eq!(respondents[0].user_id, "u1");
            }
            _ => panic!("expected a result event"),
        }
    }

    #[test]
    fn ignores_non_data_lines_and_ends_on_done() {
        assert!(RequeryClient::parse_sse_line("event: ping").is_none());
        assert!(RequeryClient::parse_sse_line("").is_none());
        assert!(matches!(
            RequeryClient::parse_sse_line("data: [DONE]"),
            Some(Ok(ChatEvent::Done))
        ));
    }
}
