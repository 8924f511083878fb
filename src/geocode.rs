//! Nominatim HTTP adapter for place search.

use serde::Deserialize;
use tracing::debug;

use crate::error::GeocodeError;
use crate::traits::Geocoder;
use crate::waypoint::Waypoint;

#[derive(Debug, Clone)]
pub struct NominatimConfig {
    pub base_url: String,
    /// Sent with every request; the public instance rejects anonymous clients.
    pub user_agent: String,
    pub timeout_secs: u64,
    pub limit: u32,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: "https://nominatim.openstreetmap.org".to_string(),
            user_agent: concat!("route-planner/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 10,
            limit: 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NominatimClient {
    config: NominatimConfig,
    client: reqwest::blocking::Client,
}

impl NominatimClient {
    pub fn new(config: NominatimConfig) -> Result<Self, GeocodeError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { config, client })
    }
}

impl Geocoder for NominatimClient {
    fn search(&self, query: &str) -> Result<Option<Waypoint>, GeocodeError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(None);
        }

        let url = format!("{}/search", self.config.base_url.trim_end_matches('/'));
        let limit = self.config.limit.to_string();

        let places = self
            .client
            .get(url)
            .query(&[("format", "json"), ("q", query), ("limit", limit.as_str())])
            .send()?
            .error_for_status()?
            .json::<Vec<NominatimPlace>>()?;

        debug!(query, results = places.len(), "nominatim search");

        places.into_iter().next().map(NominatimPlace::into_waypoint).transpose()
    }
}

/// One entry of a Nominatim `format=json` search response.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: String,
}

impl NominatimPlace {
    fn into_waypoint(self) -> Result<Waypoint, GeocodeError> {
        let lat = parse_coordinate(&self.lat)?;
        let lng = parse_coordinate(&self.lon)?;
        Waypoint::try_new(lat, lng, self.display_name)
            .map_err(|err| GeocodeError::InvalidResponse(err.to_string()))
    }
}

fn parse_coordinate(raw: &str) -> Result<f64, GeocodeError> {
    raw.trim()
        .parse()
        .map_err(|_| GeocodeError::InvalidResponse(format!("non-numeric coordinate {:?}", raw)))
}
