use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Output format accepted by the report endpoint.
///
/// The wire format is the lowercase name, so requests carry
/// `"excel"` or `"html"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Spreadsheet report.
    Excel,
    /// Standalone HTML report.
    Html,
}

impl ReportFormat {
    /// All formats the endpoint accepts, in the order a full run exercises them.
    pub fn all() -> [Self; 2] {
        [Self::Excel, Self::Html]
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Excel => write!(f, "excel"),
            Self::Html => write!(f, "html"),
        }
    }
}

/// Request body for report generation.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    /// Requested output format.
    pub format: ReportFormat,
}

/// Response body of a completed report request.
///
/// The service reports application-level failure through `success`,
/// so every field other than that flag may be absent.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateReply {
    /// Whether the service generated the report.
    #[serde(default)]
    pub success: bool,
    /// Human-readable status or error detail.
    pub message: Option<String>,
    /// Name of the generated report file.
    #[serde(rename = "fileName")]
    pub file_name: Option<String>,
    /// URL where the generated report can be previewed.
    #[serde(rename = "previewUrl")]
    pub preview_url: Option<String>,
}

/// Pulls the log entries out of a parsed log response.
///
/// Returns `None` when the body has no `logs` array at the top level.
/// Entries are kept as strings; anything non-string is rendered as the
/// JSON it came in as, so unexpected shapes still show up in output.
pub fn extract_logs(body: &Value) -> Option<Vec<String>> {
    let entries = body.get("logs")?.as_array()?;
    Some(entries.iter().map(render_entry).collect())
}

fn render_entry(entry: &Value) -> String {
    entry
        .as_str()
        .map_or_else(|| entry.to_string(), ToOwned::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_wire_format() {
        let request = GenerateRequest {
            format: ReportFormat::Excel,
        };
        let value = serde_json::to_value(&request)
            .unwrap_or_else(|err| panic!("Failed to serialize: {err}"));
        assert_eq!(value, json!({"format": "excel"}));
    }

    #[test]
    fn test_format_display() {
        assert_eq!(ReportFormat::Excel.to_string(), "excel");
        assert_eq!(ReportFormat::Html.to_string(), "html");
    }

    #[test]
    fn test_format_all_order() {
        assert_eq!(ReportFormat::all(), [ReportFormat::Excel, ReportFormat::Html]);
    }

    #[test]
    fn test_reply_full() {
        let reply: GenerateReply = serde_json::from_value(json!({
            "success": true,
            "message": "Report generated",
            "fileName": "report.xlsx",
            "previewUrl": "/preview/report.xlsx"
        }))
        .unwrap_or_else(|err| panic!("Failed to deserialize: {err}"));

        assert!(reply.success);
        assert_eq!(reply.message.as_deref(), Some("Report generated"));
        assert_eq!(reply.file_name.as_deref(), Some("report.xlsx"));
        assert_eq!(reply.preview_url.as_deref(), Some("/preview/report.xlsx"));
    }

    #[test]
    fn test_reply_missing_fields_default() {
        let reply: GenerateReply = serde_json::from_value(json!({}))
            .unwrap_or_else(|err| panic!("Failed to deserialize: {err}"));

        assert!(!reply.success);
        assert!(reply.message.is_none());
        assert!(reply.file_name.is_none());
        assert!(reply.preview_url.is_none());
    }

    #[test]
    fn test_extract_logs_strings() {
        let body = json!({"logs": ["first", "second"]});
        let entries = extract_logs(&body).unwrap_or_else(|| panic!("Expected log entries"));
        assert_eq!(entries, vec!["first".to_owned(), "second".to_owned()]);
    }

    #[test]
    fn test_extract_logs_renders_non_strings() {
        let body = json!({"logs": ["first", {"level": "warn"}, 7]});
        let entries = extract_logs(&body).unwrap_or_else(|| panic!("Expected log entries"));
        assert_eq!(entries[1], "{\"level\":\"warn\"}");
        assert_eq!(entries[2], "7");
    }

    #[test]
    fn test_extract_logs_missing_key() {
        let body = json!({"status": "ok"});
        assert!(extract_logs(&body).is_none());
    }

    #[test]
    fn test_extract_logs_non_array() {
        let body = json!({"logs": "not a list"});
        assert!(extract_logs(&body).is_none());
    }
}
