use std::fmt;

use reqwest::StatusCode;

/// Result of a single API call.
pub type ApiResult<T = crate::api::Response> = std::result::Result<T, ApiError>;

/// A failed request against the FreeSSL API.
///
/// Carries the request path (relative to the base URL, including any query string) and whatever
/// came back from the transport.
#[derive(Debug)]
pub struct ApiError {
    path: String,
    kind: ErrorKind,
}

#[derive(Debug)]
enum ErrorKind {
    /// Server answered with a non-success status.
    Status { status: StatusCode, body: String },

    /// No usable response, e.g. connection refused.
    Transport(reqwest::Error),

    /// Body could not be encoded, or a success body was not the expected JSON.
    Json(serde_json::Error),

    /// Parameters could not be encoded as a query string.
    Query(serde_urlencoded::ser::Error),

    /// A raw success body was not text.
    Utf8(std::string::FromUtf8Error),
}

impl ApiError {
    pub(crate) fn status(path: &str, status: StatusCode, body: String) -> Self {
        Self {
            path: path.to_owned(),
            kind: ErrorKind::Status { status, body },
        }
    }

    pub(crate) fn transport(path: &str, err: reqwest::Error) -> Self {
        Self {
            path: path.to_owned(),
            kind: ErrorKind::Transport(err),
        }
    }

    pub(crate) fn json(path: &str, err: serde_json::Error) -> Self {
        Self {
            path: path.to_owned(),
            kind: ErrorKind::Json(err),
        }
    }

    pub(crate) fn query(path: &str, err: serde_urlencoded::ser::Error) -> Self {
        Self {
            path: path.to_owned(),
            kind: ErrorKind::Query(err),
        }
    }

    pub(crate) fn utf8(path: &str, err: std::string::FromUtf8Error) -> Self {
        Self {
            path: path.to_owned(),
            kind: ErrorKind::Utf8(err),
        }
    }

    /// Request path this error belongs to, e.g. `/certs/abc/download`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// HTTP status, when the server answered at all.
    pub fn status_code(&self) -> Option<StatusCode> {
        match &self.kind {
            ErrorKind::Status { status, .. } => Some(*status),
            ErrorKind::Transport(err) => err.status(),
            ErrorKind::Json(_) | ErrorKind::Query(_) | ErrorKind::Utf8(_) => None,
        }
    }

    /// Raw response body of a non-success response.
    pub fn body(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::Status { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Human readable description of the failure.
    ///
    /// The API reports failures as `{"code": .., "error": ".."}`. When such a body is present its
    /// `error` text is used, otherwise the status line and raw body.
    pub fn message(&self) -> String {
        match &self.kind {
            ErrorKind::Status { status, body } => api_error_text(body)
                .unwrap_or_else(|| format!("{status} body: {body}")),
            ErrorKind::Transport(err) => err.to_string(),
            ErrorKind::Json(err) => format!("invalid JSON: {err}"),
            ErrorKind::Query(err) => format!("invalid query parameters: {err}"),
            ErrorKind::Utf8(err) => format!("response body is not UTF-8: {err}"),
        }
    }
}

fn api_error_text(body: &str) -> Option<String> {
    let value = serde_json::from_str::<serde_json::Value>(body).ok()?;

    ["error", "msg"]
        .iter()
        .filter_map(|key| value.get(key)?.as_str())
        .find(|text| !text.is_empty())
        .map(str::to_owned)
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message())
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Status { .. } => None,
            ErrorKind::Transport(err) => Some(err),
            ErrorKind::Json(err) => Some(err),
            ErrorKind::Query(err) => Some(err),
            ErrorKind::Utf8(err) => Some(err),
        }
    }
}
