use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::transport::TransportError;
use crate::types::ConstraintError;

/// Errors returned by [`PinnacleClient`](crate::PinnacleClient) and its
/// resource clients.
#[derive(Debug, thiserror::Error)]
pub enum PinnacleError {
    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout(#[source] Box<dyn StdError + Send + Sync>),

    /// The server answered with a non-2xx status.
    #[error(transparent)]
    Response(#[from] ResponseError),

    /// HTTP client failure other than a timeout (DNS, TLS, connection reset).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// A request or response payload did not match its model.
    #[error("invalid payload: {0}")]
    Constraint(#[from] ConstraintError),

    /// The client configuration or a per-request option is unusable.
    #[error("configuration error: {0}")]
    Config(String),

    /// A local file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PinnacleError {
    /// HTTP status for response errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Response(err) => Some(err.code),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}

impl From<TransportError> for PinnacleError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Timeout(source) => Self::Timeout(source),
            TransportError::Other(source) => Self::Transport(source),
        }
    }
}

/// A non-2xx response with its status code and raw body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} ({code}): {body}")]
pub struct ResponseError {
    pub kind: ResponseErrorKind,
    pub code: u16,
    pub body: String,
}

impl ResponseError {
    pub fn new(code: u16, body: impl Into<String>) -> Self {
        Self {
            kind: ResponseErrorKind::for_code(code),
            code,
            body: body.into(),
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.kind.is_client_error()
    }

    pub fn is_server_error(&self) -> bool {
        self.kind.is_server_error()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseErrorKind {
    Redirect,
    Unauthorized,
    Forbidden,
    NotFound,
    /// Any other 4xx.
    Client,
    ServiceUnavailable,
    /// Any other 5xx.
    Server,
    Other,
}

impl ResponseErrorKind {
    pub fn for_code(code: u16) -> Self {
        match code {
            300..=399 => Self::Redirect,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            400..=499 => Self::Client,
            503 => Self::ServiceUnavailable,
            500..=599 => Self::Server,
            _ => Self::Other,
        }
    }

    pub fn is_client_error(self) -> bool {
        matches!(
            self,
            Self::Unauthorized | Self::Forbidden | Self::NotFound | Self::Client
        )
    }

    pub fn is_server_error(self) -> bool {
        matches!(self, Self::Server | Self::ServiceUnavailable)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Redirect => "redirect",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not found",
            Self::Client => "client error",
            Self::ServiceUnavailable => "service unavailable",
            Self::Server => "server error",
            Self::Other => "unexpected status",
        }
    }
}

impl fmt::Display for ResponseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_kinds() {
        let cases = [
            (301, ResponseErrorKind::Redirect),
            (304, ResponseErrorKind::Redirect),
            (400, ResponseErrorKind::Client),
            (401, ResponseErrorKind::Unauthorized),
            (403, ResponseErrorKind::Forbidden),
            (404, ResponseErrorKind::NotFound),
            (422, ResponseErrorKind::Client),
            (429, ResponseErrorKind::Client),
            (500, ResponseErrorKind::Server),
            (502, ResponseErrorKind::Server),
            (503, ResponseErrorKind::ServiceUnavailable),
            (100, ResponseErrorKind::Other),
            (600, ResponseErrorKind::Other),
        ];
        for (code, kind) in cases {
            assert_eq!(ResponseErrorKind::for_code(code), kind, "code {code}");
        }
    }

    #[test]
    fn client_and_server_groups() {
        assert!(ResponseError::new(404, "").is_client_error());
        assert!(!ResponseError::new(404, "").is_server_error());
        assert!(ResponseError::new(503, "").is_server_error());
        assert!(!ResponseError::new(302, "").is_client_error());
        assert!(!ResponseError::new(302, "").is_server_error());
    }

    #[test]
    fn display_includes_code_and_body() {
        let err = PinnacleError::from(ResponseError::new(401, "bad key"));
        assert_eq!(err.to_string(), "unauthorized (401): bad key");
        assert_eq!(err.status(), Some(401));
    }
}
