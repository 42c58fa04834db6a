//! Shared HTTP client setup for upstream services.

use std::time::Duration;

use reqwest::Url;

/// Identifies us to public OSM services, which require a descriptive agent
pub const USER_AGENT: &str = "FireGuardApp/1.0";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("{url} is not a valid url: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("{url} cannot be used as a base url")]
    CannotBeABase { url: String },

    #[error("failed to build http client: {0}")]
    Build(#[from] reqwest::Error),
}

pub fn parse_base_url(base: &str) -> Result<Url, ClientError> {
    let url = Url::parse(base).map_err(|e| ClientError::InvalidUrl {
        url: base.to_owned(),
        reason: e.to_string(),
    })?;

    if url.cannot_be_a_base() {
        return Err(ClientError::CannotBeABase {
            url: base.to_owned(),
        });
    }

    Ok(url)
}

pub fn build_client(timeout: Duration) -> Result<reqwest::Client, ClientError> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()?;

    Ok(client)
}

/// Append path segments to a base url, keeping any path the base already has.
pub fn join_segments<'s>(
    base: &Url,
    segments: impl IntoIterator<Item = &'s str>,
) -> Result<Url, ClientError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| ClientError::CannotBeABase {
            url: base.to_string(),
        })?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}
