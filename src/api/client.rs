use super::endpoint::{redact, Endpoints};
use super::RequestPacing;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::models::{decode, League};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Shared GET and decode path used by the league clients
#[derive(Debug, Clone)]
pub struct FeedClient {
    client: Client,
    endpoints: Endpoints,
    pacing: RequestPacing,
}

impl FeedClient {
    pub fn new(config: &ClientConfig, league: League) -> Self {
        Self {
            client: Client::new(),
            endpoints: Endpoints::new(
                config.base_url.as_str(),
                league,
                config.access_level,
                config.api_key.as_str(),
            ),
            pacing: config.pacing,
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn pacing(&self) -> &RequestPacing {
        &self.pacing
    }

    /// GET a feed document and decode it. Anything but 200 is an error.
    pub async fn fetch<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let endpoint = redact(&url);
        debug!(%endpoint, "requesting feed document");

        // reqwest errors embed the full URL, api key included
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Transport(e.without_url()))?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(%endpoint, status = status.as_u16(), "unexpected response status");
            return Err(Error::UnexpectedStatus {
                status: status.as_u16(),
                endpoint,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Transport(e.without_url()))?;
        decode(&body)
    }
}
