use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;
use thiserror::Error;
use tracing::error;

/// Which side of the option chain a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionSide {
    Call,
    Put,
}

impl fmt::Display for OptionSide {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OptionSide::Call => write!(f, "call"),
            OptionSide::Put => write!(f, "put"),
        }
    }
}

#[derive(Debug, Error)]
pub enum OiError {
    /// Provider returned a non-success status or could not be reached
    #[error("Market data unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Provider answered with a body we cannot use (block page, shape change)
    #[error("Unexpected market data response: {0}")]
    UpstreamMalformed(String),

    #[error("No usable {side} open interest in option chain")]
    EmptyOpenInterestData { side: OptionSide },

    #[error("Text generation failed: {0}")]
    GenerationService(String),

    #[error("Missing configuration: {0}")]
    ConfigurationMissing(String),
}

pub type OiResult<T> = Result<T, OiError>;

impl OiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            OiError::UpstreamUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            OiError::UpstreamMalformed(_)
            | OiError::EmptyOpenInterestData { .. }
            | OiError::GenerationService(_) => StatusCode::BAD_GATEWAY,
            OiError::ConfigurationMissing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message; details stay in the logs
    pub fn public_message(&self) -> &'static str {
        match self {
            OiError::UpstreamUnavailable(_) => "Market data provider is unavailable, try again later",
            OiError::UpstreamMalformed(_) => "Market data provider returned an unexpected response",
            OiError::EmptyOpenInterestData { .. } => "Market data provider returned no open interest data",
            OiError::GenerationService(_) => "Post generation failed",
            OiError::ConfigurationMissing(_) => "Service is misconfigured",
        }
    }
}

impl IntoResponse for OiError {
    fn into_response(self) -> Response {
        error!(error = %self, "request failed");
        (self.status_code(), self.public_message()).into_response()
    }
}

/// Preview of a response body for error messages
pub(crate) fn body_preview(body: &str) -> String {
    body.chars().take(200).collect()
}
