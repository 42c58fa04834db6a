//! Client for the Nominatim reverse geocoding API.
//!
//! Nominatim's usage policy requires an identifying `User-Agent`, which the
//! shared client sets.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use fireguard_stations::Coordinate;
use reqwest::Url;
use serde::Deserialize;

use crate::geocoding::AddressLookup;
use crate::network::http::{self, ClientError};
use crate::network::traits::ReverseGeocoder;

pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

#[derive(Debug, thiserror::Error)]
pub enum GeocodingError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    display_name: Option<String>,
}

#[derive(Clone)]
pub struct NominatimGeocoder {
    inner: reqwest::Client,
    base: Url,
}

impl NominatimGeocoder {
    pub fn new(base: &str, timeout: Duration) -> Result<Self, ClientError> {
        Ok(Self {
            inner: http::build_client(timeout)?,
            base: http::parse_base_url(base)?,
        })
    }

    fn reverse_url(&self, point: Coordinate) -> Result<Url, ClientError> {
        let mut url = http::join_segments(&self.base, ["reverse"])?;
        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair("lat", &point.latitude.to_string())
            .append_pair("lon", &point.longitude.to_string());

        Ok(url)
    }

    pub async fn lookup(&self, point: Coordinate) -> Result<AddressLookup, GeocodingError> {
        let url = self.reverse_url(point)?;
        let response = self.inner.get(url).send().await?.error_for_status()?;
        let body: ReverseResponse = response.json().await?;

        Ok(match body.display_name {
            Some(name) if !name.trim().is_empty() => AddressLookup::Found(name),
            _ => AddressLookup::NotFound,
        })
    }
}

impl ReverseGeocoder for NominatimGeocoder {
    fn reverse<'a>(
        &'a self,
        point: Coordinate,
    ) -> Pin<Box<dyn Future<Output = AddressLookup> + Send + 'a>> {
        Box::pin(async move {
            match self.lookup(point).await {
                Ok(lookup) => lookup,
                Err(e) => {
                    tracing::warn!("reverse geocoding failed: {e}");
                    AddressLookup::Unavailable
                }
            }
        })
    }
}
