//! Errors surfaced by the YouTube API client.

use thiserror::Error;

/// A request to the YouTube Data API could not be completed.
///
/// Only the search call propagates this to callers unconditionally. Statistics and comment
/// lookups have lenient forms that log the error and degrade to "no data" instead.
#[derive(Error, Debug)]
pub enum UpstreamRequestError {
    /// The search query was empty after trimming; no request was sent.
    #[error("search query is empty")]
    EmptyQuery,

    /// The HTTP client itself could not be constructed.
    #[error("build HTTP client")]
    Client(#[source] reqwest::Error),

    /// The request never produced a response (DNS, connect, TLS, timeout, ...).
    #[error("send request to {url}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-2xx status.
    #[error("YouTube API request to {url} failed with status {status}: {body}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body was not the JSON shape we expected.
    #[error("parse YouTube API response from {url} as JSON")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl UpstreamRequestError {
    /// The HTTP status the API returned, if the failure was a non-2xx response.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
