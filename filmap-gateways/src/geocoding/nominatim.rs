use super::HttpClient;
use filmap_core::{
    entities::{GeoPoint, MapPoint},
    gateways::geocode::{GeoCodingGateway, GeocodingError},
};
use serde::Deserialize;

pub const NOMINATIM_DEFAULT_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";

/// Geocoding with the OpenStreetMap Nominatim gazetteer.
///
/// Nominatim requires a meaningful User-Agent, see
/// <https://operations.osmfoundation.org/policies/nominatim/>.
#[derive(Debug, Clone)]
pub struct Nominatim {
    client: HttpClient,
    endpoint: String,
}

impl Nominatim {
    pub fn new(client: HttpClient, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
    display_name: String,
}

fn first_place(places: Vec<Place>) -> Result<Option<GeoPoint>, GeocodingError> {
    let Some(place) = places.into_iter().next() else {
        return Ok(None);
    };
    let invalid = || {
        GeocodingError::UnexpectedResponse(format!(
            "Invalid coordinates ({},{})",
            place.lat, place.lon
        ))
    };
    let lat = place.lat.parse::<f64>().map_err(|_| invalid())?;
    let lng = place.lon.parse::<f64>().map_err(|_| invalid())?;
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng).ok_or_else(invalid)?;
    Ok(Some(GeoPoint {
        pos,
        address: place.display_name,
    }))
}

impl GeoCodingGateway for Nominatim {
    fn resolve(&self, address: &str) -> Result<Option<GeoPoint>, GeocodingError> {
        let query = [("q", address), ("format", "json"), ("limit", "1")];
        let places: Vec<Place> = self.client.get_json(&self.endpoint, &query)?;
        first_place(places)
    }
}
