use filmap_core::gateways::geocode::GeocodingError;
use serde::de::DeserializeOwned;
use std::time::Duration;

mod arcgis;
mod nominatim;
mod opencage;

pub use self::{arcgis::*, nominatim::*, opencage::*};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking HTTP client shared by all geocoding backends.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::blocking::Client,
}

impl HttpClient {
    pub fn new(timeout: Duration, user_agent: &str) -> reqwest::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    fn get_json<T>(&self, url: &str, query: &[(&str, &str)]) -> Result<T, GeocodingError>
    where
        T: DeserializeOwned,
    {
        log::trace!("GET {url} {query:?}");
        self.client
            .get(url)
            .query(query)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|err| {
                log::debug!("Request to {url} failed: {err}");
                GeocodingError::Transport(err.to_string())
            })?
            .json()
            .map_err(|err| {
                log::debug!("Unexpected response from {url}: {err}");
                if err.is_decode() {
                    GeocodingError::UnexpectedResponse(err.to_string())
                } else {
                    GeocodingError::Transport(err.to_string())
                }
            })
    }
}
