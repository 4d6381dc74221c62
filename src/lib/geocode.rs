use super::error::GeocodeError;
use super::geo::Location;
use serde::Deserialize;

pub const NOMINATIM_ENDPOINT: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_USER_AGENT: &str = concat!("addr2kml/", env!("CARGO_PKG_VERSION"));

/// Resolves a free-text address to a location. Implemented by the Nominatim
/// client below; tests substitute their own resolvers.
pub trait Geocoder {
    fn resolve(&self, address: &str) -> Result<Location, GeocodeError>;
}

/// Nominatim returns lat/lon as JSON strings.
#[derive(Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
}

pub struct Nominatim {
    endpoint: String,
    user_agent: String,
}

impl Nominatim {
    pub fn new(endpoint: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Nominatim {
            endpoint: endpoint.into(),
            user_agent: user_agent.into(),
        }
    }
}

impl Default for Nominatim {
    fn default() -> Self {
        Nominatim::new(NOMINATIM_ENDPOINT, DEFAULT_USER_AGENT)
    }
}

impl Geocoder for Nominatim {
    fn resolve(&self, address: &str) -> Result<Location, GeocodeError> {
        let url = format!("{}/search", self.endpoint);
        let response = ureq::get(&url)
            .set("User-Agent", &self.user_agent)
            .query("q", address)
            .query("format", "json")
            .query("limit", "1")
            .call()
            .map_err(|err| GeocodeError::Service(err.to_string()))?;
        let results: Vec<SearchResult> = response
            .into_json()
            .map_err(|err| GeocodeError::Service(err.to_string()))?;
        let result = results
            .into_iter()
            .next()
            .ok_or(GeocodeError::AddressNotFound)?;
        let lat = result
            .lat
            .parse()
            .map_err(|_| GeocodeError::AddressNotFound)?;
        let lon = result
            .lon
            .parse()
            .map_err(|_| GeocodeError::AddressNotFound)?;
        Ok(Location::new(lat, lon))
    }
}
