use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::error;
use url::Url;

use crate::{error::AppError, models::trip::Trip};

/// Where trip collections come from. The HTTP implementation below is the
/// production source; tests inject fixture sources through the same seam.
#[async_trait]
pub trait TripSource: Send + Sync {
    async fn fetch_trips(&self) -> Result<Vec<Trip>, AppError>;
}

/// The provider wraps the collection as `{"trips": [...]}`; accept a bare
/// array too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TripsDocument {
    Wrapped { trips: Vec<Trip> },
    Bare(Vec<Trip>),
}

impl TripsDocument {
    fn into_trips(self) -> Vec<Trip> {
        match self {
            TripsDocument::Wrapped { trips } => trips,
            TripsDocument::Bare(trips) => trips,
        }
    }
}

#[derive(Clone)]
pub struct UpstreamService {
    client: Client,
    url: Url,
}

impl UpstreamService {
    pub fn new(url: Url) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }

    async fn request(&self) -> Result<Vec<Trip>, reqwest::Error> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await?
            .error_for_status()?;
        let document: TripsDocument = response.json().await?;
        Ok(document.into_trips())
    }
}

#[async_trait]
impl TripSource for UpstreamService {
    /// One fetch per incoming request: no caching, no retries. Failures are
    /// logged here and propagated to the request boundary.
    async fn fetch_trips(&self) -> Result<Vec<Trip>, AppError> {
        match self.request().await {
            Ok(trips) => Ok(trips),
            Err(err) => {
                error!("error fetching trips: {err}");
                Err(err.into())
            }
        }
    }
}
