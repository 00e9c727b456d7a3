//! Request error taxonomy for the classification endpoint.

use std::fmt;

/// Message shown when a failure carries no description of its own.
pub const FALLBACK_MESSAGE: &str = "Failed to analyze sentiment";

/// Categories of request errors.
///
/// The form treats every kind the same way; the kind only feeds logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestErrorKind {
    /// Non-success HTTP status (4xx and 5xx are not distinguished).
    HttpStatus,
    /// Connection, DNS or transport-level failure.
    Transport,
    /// Response body could not be decoded.
    Parse,
}

impl fmt::Display for RequestErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestErrorKind::HttpStatus => write!(f, "http_status"),
            RequestErrorKind::Transport => write!(f, "transport"),
            RequestErrorKind::Parse => write!(f, "parse"),
        }
    }
}

/// A failed sentiment request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestError {
    pub kind: RequestErrorKind,
    /// Descriptive message, if the failure produced one.
    pub message: Option<String>,
}

impl RequestError {
    /// Creates a new request error. Blank messages are dropped.
    pub fn new(kind: RequestErrorKind, message: Option<String>) -> Self {
        let message = message.filter(|m| !m.trim().is_empty());
        Self { kind, message }
    }

    /// Creates an HTTP status error. The body is not inspected.
    pub fn http_status(status: u16) -> Self {
        Self::new(
            RequestErrorKind::HttpStatus,
            Some(format!("HTTP error! status: {status}")),
        )
    }

    /// Creates a transport error.
    pub fn transport(message: Option<String>) -> Self {
        Self::new(RequestErrorKind::Transport, message)
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(RequestErrorKind::Parse, Some(message.into()))
    }

    /// Returns the text shown to the user.
    pub fn display_message(&self) -> &str {
        self.message.as_deref().unwrap_or(FALLBACK_MESSAGE)
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_message())
    }
}

impl std::error::Error for RequestError {}

impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::parse(err.to_string())
        } else {
            Self::transport(Some(err.to_string()))
        }
    }
}
