/// Longest body preview attached when a log response has no log data.
pub const NO_LOG_DATA_PREVIEW_CHARS: usize = 200;

/// Longest body preview attached to a failed log fetch.
pub const FAILURE_PREVIEW_CHARS: usize = 500;

/// Classified result of one report generation request.
///
/// A report call never returns an `Err`. Whatever happens on the wire is
/// folded into one of these variants so a run can keep going and report
/// every scenario it attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    /// The service accepted the request and produced a report.
    Generated {
        /// Status detail from the service, if any.
        message: Option<String>,
        /// Name of the generated file, if reported.
        file_name: Option<String>,
        /// Preview URL for the generated file, if reported.
        preview_url: Option<String>,
    },
    /// The service answered 200 but reported an application-level failure.
    Rejected {
        /// Error detail from the service, if any.
        message: Option<String>,
    },
    /// The service answered with a non-200 status.
    HttpFailure {
        /// HTTP status code of the response.
        status: u16,
        /// Response body as returned.
        body: String,
    },
    /// The service answered 200 with a body that is not valid JSON.
    MalformedBody {
        /// Parse error description.
        error: String,
        /// Response body as returned.
        body: String,
    },
    /// The request never produced a response.
    Unreachable {
        /// Transport error description.
        error: String,
    },
}

impl ReportOutcome {
    /// Whether this outcome counts as a passing scenario.
    pub fn passed(&self) -> bool {
        matches!(self, Self::Generated { .. })
    }
}

/// Classified result of one log fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogsOutcome {
    /// The service returned a log array.
    Fetched {
        /// Every entry the service returned, oldest first.
        entries: Vec<String>,
    },
    /// The service answered 200 with JSON that carries no log array.
    ///
    /// This is not a failure. An idle service legitimately has nothing
    /// to report, so the body preview is kept for display only.
    NoLogData {
        /// Body preview, at most 200 characters.
        body: String,
    },
    /// The service answered with a non-200 status.
    HttpFailure {
        /// HTTP status code of the response.
        status: u16,
        /// Body preview, at most 500 characters.
        body: String,
    },
    /// The service answered 200 with a body that is not valid JSON.
    MalformedBody {
        /// Parse error description.
        error: String,
        /// Body preview, at most 500 characters.
        body: String,
    },
    /// The request never produced a response.
    ///
    /// Covers refused connections and the log fetch timeout alike.
    Unreachable {
        /// Transport error description.
        error: String,
    },
}

impl LogsOutcome {
    /// Whether this outcome counts as a passing scenario.
    pub fn passed(&self) -> bool {
        matches!(self, Self::Fetched { .. } | Self::NoLogData { .. })
    }
}

/// Truncates a response body for display.
///
/// Cuts on character boundaries, never bytes, so multi-byte content
/// cannot split mid-character.
pub fn preview(body: &str, limit: usize) -> String {
    body.chars().take(limit).collect()
}

/// Returns the most recent `limit` entries, oldest first.
pub fn tail(entries: &[String], limit: usize) -> &[String] {
    &entries[entries.len().saturating_sub(limit)..]
}
