use thiserror::Error;

/// Failures of a single playlist request.
///
/// Every variant ends up as a 500 response; the split only matters for logs.
#[derive(Error, Debug)]
pub enum PlaylistError {
    #[error("token exchange failed with status {status}: {body}")]
    Authentication { status: u16, body: String },

    #[error("sentiment inference failed with status {status}: {body}")]
    Inference { status: u16, body: String },

    #[error("track search failed with status {status}: {body}")]
    Catalog { status: u16, body: String },

    #[error("UpstreamShapeError: {upstream} returned an unexpected body: {reason}")]
    UpstreamShape {
        upstream: &'static str,
        reason: String,
    },

    #[error("request to upstream failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("invalid request header: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),
}

impl PlaylistError {
    pub fn shape(upstream: &'static str, reason: impl Into<String>) -> Self {
        PlaylistError::UpstreamShape {
            upstream,
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}
