//! Sentiment classification: wire types, request errors and the HTTP client.

mod client;
mod error;
mod types;

pub use client::{Endpoint, SentimentClient, SentimentService, USER_AGENT};
pub use error::{FALLBACK_MESSAGE, RequestError, RequestErrorKind};
pub use types::{AnalyzeRequest, Analysis, HealthStatus, Polarity, format_confidence};
