use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::config::SmokeConfig;
use crate::error::{Error, Result};
use crate::models::{GenerateReply, GenerateRequest, ReportFormat, extract_logs};
use crate::outcome::{
    FAILURE_PREVIEW_CHARS, LogsOutcome, NO_LOG_DATA_PREVIEW_CHARS, ReportOutcome, preview,
};

/// HTTP client for the report service smoke endpoints.
#[derive(Debug)]
pub struct ReportClient {
    /// HTTP client used for all requests.
    client: Client,
    /// Base URL of the service under test, without a trailing slash.
    base_url: String,
    /// Timeout applied to the log fetch only.
    ///
    /// Report generation is paced by the server, so that request runs
    /// without a deadline.
    log_timeout: Duration,
}

impl ReportClient {
    /// Creates a client for the service described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured base URL is empty or the HTTP
    /// client cannot be constructed.
    pub fn new(config: &SmokeConfig) -> Result<Self> {
        let base_url = config.base_url.trim();
        if base_url.is_empty() {
            return Err(Error::Config("base URL must not be empty".to_owned()));
        }

        Ok(Self {
            client: Client::builder().build()?,
            base_url: base_url.trim_end_matches('/').to_owned(),
            log_timeout: config.log_timeout(),
        })
    }

    /// Requests a report in the given format and classifies the result.
    pub async fn generate_report(&self, format: ReportFormat) -> ReportOutcome {
        debug!("POST {}/api/generate-report format={format}", self.base_url);
        match self.send_report(format).await {
            Ok((status, body)) => classify_report(status, &body),
            Err(err) => ReportOutcome::Unreachable {
                error: err.to_string(),
            },
        }
    }

    /// Fetches the service log and classifies the result.
    pub async fn fetch_logs(&self) -> LogsOutcome {
        debug!("GET {}/api/logs", self.base_url);
        match self.send_logs().await {
            Ok((status, body)) => classify_logs(status, &body),
            Err(err) => LogsOutcome::Unreachable {
                error: err.to_string(),
            },
        }
    }

    async fn send_report(&self, format: ReportFormat) -> CallResult {
        let response = self
            .client
            .post(format!("{}/api/generate-report", self.base_url))
            .json(&GenerateRequest { format })
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok((status, body))
    }

    async fn send_logs(&self) -> CallResult {
        let response = self
            .client
            .get(format!("{}/api/logs", self.base_url))
            .timeout(self.log_timeout)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok((status, body))
    }
}

type CallResult = core::result::Result<(u16, String), reqwest::Error>;

/// Folds a raw report response into an outcome.
///
/// The service signals application failure through the `success` flag,
/// so a 200 alone is not a pass. A missing flag counts as failure.
fn classify_report(status: u16, body: &str) -> ReportOutcome {
    if status != 200 {
        return ReportOutcome::HttpFailure {
            status,
            body: body.to_owned(),
        };
    }

    match serde_json::from_str::<GenerateReply>(body) {
        Ok(reply) if reply.success => ReportOutcome::Generated {
            message: reply.message,
            file_name: reply.file_name,
            preview_url: reply.preview_url,
        },
        Ok(reply) => ReportOutcome::Rejected {
            message: reply.message,
        },
        Err(err) => ReportOutcome::MalformedBody {
            error: err.to_string(),
            body: body.to_owned(),
        },
    }
}

/// Folds a raw log response into an outcome.
///
/// Bodies attached to non-passing outcomes are clipped so a misbehaving
/// service cannot flood the run output.
fn classify_logs(status: u16, body: &str) -> LogsOutcome {
    if status != 200 {
        return LogsOutcome::HttpFailure {
            status,
            body: preview(body, FAILURE_PREVIEW_CHARS),
        };
    }

    match serde_json::from_str::<Value>(body) {
        Ok(parsed) => match extract_logs(&parsed) {
            Some(entries) => LogsOutcome::Fetched { entries },
            None => LogsOutcome::NoLogData {
                body: preview(body, NO_LOG_DATA_PREVIEW_CHARS),
            },
        },
        Err(err) => LogsOutcome::MalformedBody {
            error: err.to_string(),
            body: preview(body, FAILURE_PREVIEW_CHARS),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(base_url: &str) -> Result<ReportClient> {
        ReportClient::new(&SmokeConfig::default().with_base_url(base_url.to_owned()))
    }

    #[test]
    fn test_new_rejects_empty_base_url() {
        let error = client_for("").unwrap_err();
        assert!(matches!(error, Error::Config(_)));

        let error = client_for("   ").unwrap_err();
        assert!(matches!(error, Error::Config(_)));
    }

    #[test]
    fn test_new_strips_trailing_slash() {
        let client = client_for("http://localhost:8080/")
            .unwrap_or_else(|err| panic!("Failed to build client: {err}"));
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_classify_report_success() {
        let body = r#"{"success": true, "message": "done", "fileName": "report.xlsx", "previewUrl": "/preview/1"}"#;
        let outcome = classify_report(200, body);
        assert_eq!(
            outcome,
            ReportOutcome::Generated {
                message: Some("done".to_owned()),
                file_name: Some("report.xlsx".to_owned()),
                preview_url: Some("/preview/1".to_owned()),
            }
        );
    }

    #[test]
    fn test_classify_report_success_without_details() {
        let outcome = classify_report(200, r#"{"success": true}"#);
        assert_eq!(
            outcome,
            ReportOutcome::Generated {
                message: None,
                file_name: None,
                preview_url: None,
            }
        );
    }

    #[test]
    fn test_classify_report_rejection() {
        let outcome = classify_report(200, r#"{"success": false, "message": "template missing"}"#);
        assert_eq!(
            outcome,
            ReportOutcome::Rejected {
                message: Some("template missing".to_owned()),
            }
        );
    }

    #[test]
    fn test_classify_report_missing_success_flag() {
        // No flag means no confirmation, which is a rejection.
        let outcome = classify_report(200, r#"{"message": "maybe"}"#);
        assert_eq!(
            outcome,
            ReportOutcome::Rejected {
                message: Some("maybe".to_owned()),
            }
        );
    }

    #[test]
    fn test_classify_report_http_failure_keeps_body() {
        let outcome = classify_report(500, "stack trace here");
        assert_eq!(
            outcome,
            ReportOutcome::HttpFailure {
                status: 500,
                body: "stack trace here".to_owned(),
            }
        );
    }

    #[test]
    fn test_classify_report_non_200_success_codes_fail() {
        // The service commits to plain 200 on success, anything else is wrong.
        let outcome = classify_report(201, r#"{"success": true}"#);
        assert!(matches!(outcome, ReportOutcome::HttpFailure { status: 201, .. }));
    }

    #[test]
    fn test_classify_report_malformed_body() {
        let outcome = classify_report(200, "<html>gateway error</html>");
        let ReportOutcome::MalformedBody { error, body } = outcome else {
            panic!("Expected malformed body outcome");
        };
        assert!(!error.is_empty());
        assert_eq!(body, "<html>gateway error</html>");
    }

    #[test]
    fn test_classify_logs_fetched() {
        let outcome = classify_logs(200, r#"{"logs": ["boot", "ready"]}"#);
        assert_eq!(
            outcome,
            LogsOutcome::Fetched {
                entries: vec!["boot".to_owned(), "ready".to_owned()],
            }
        );
    }

    #[test]
    fn test_classify_logs_missing_key_clips_to_200_chars() {
        let padding = "x".repeat(400);
        let body = format!(r#"{{"status": "{padding}"}}"#);
        let LogsOutcome::NoLogData { body: clipped } = classify_logs(200, &body) else {
            panic!("Expected no-log-data outcome");
        };
        assert_eq!(clipped.chars().count(), NO_LOG_DATA_PREVIEW_CHARS);
        assert_eq!(clipped, preview(&body, NO_LOG_DATA_PREVIEW_CHARS));
    }

    #[test]
    fn test_classify_logs_http_failure_clips_to_500_chars() {
        let body = "e".repeat(900);
        let LogsOutcome::HttpFailure { status, body: clipped } = classify_logs(503, &body) else {
            panic!("Expected http failure outcome");
        };
        assert_eq!(status, 503);
        assert_eq!(clipped.chars().count(), FAILURE_PREVIEW_CHARS);
    }

    #[test]
    fn test_classify_logs_malformed_body_clips_to_500_chars() {
        let body = format!("not json {}", "y".repeat(900));
        let LogsOutcome::MalformedBody { error, body: clipped } = classify_logs(200, &body) else {
            panic!("Expected malformed body outcome");
        };
        assert!(!error.is_empty());
        assert_eq!(clipped.chars().count(), FAILURE_PREVIEW_CHARS);
    }

    #[test]
    fn test_classify_logs_multibyte_body_clips_cleanly() {
        let body = "日".repeat(600);
        let LogsOutcome::MalformedBody { body: clipped, .. } = classify_logs(200, &body) else {
            panic!("Expected malformed body outcome");
        };
        assert_eq!(clipped.chars().count(), FAILURE_PREVIEW_CHARS);
    }

    #[test]
    fn test_classify_logs_empty_array_is_fetched() {
        let outcome = classify_logs(200, r#"{"logs": []}"#);
        assert_eq!(outcome, LogsOutcome::Fetched { entries: Vec::new() });
    }
}
