use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned status {status}")]
    Status { url: String, status: StatusCode },
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Deserialize)]
struct DocumentEnvelope<T> {
    data: Vec<T>,
}

/// Fetch one upstream document of the form `{"data": [...]}` and return the
/// inner collection.
pub async fn fetch_collection<T: DeserializeOwned>(
    client: &Client,
    url: &str,
) -> Result<Vec<T>, UpstreamError> {
    let response = client.get(url).send().await.map_err(|source| {
        UpstreamError::Transport {
            url: url.to_string(),
            source,
        }
    })?;

    let status = response.status();
    if !status.is_success() {
        warn!(%url, %status, "upstream document fetch failed");
        return Err(UpstreamError::Status {
            url: url.to_string(),
            status,
        });
    }

    let envelope: DocumentEnvelope<T> =
        response.json().await.map_err(|source| UpstreamError::Decode {
            url: url.to_string(),
            source,
        })?;
    debug!(%url, records = envelope.data.len(), "fetched upstream document");
    Ok(envelope.data)
}
