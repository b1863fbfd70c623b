use super::HttpClient;
use filmap_core::{
    entities::{GeoPoint, MapPoint},
    gateways::geocode::{GeoCodingGateway, GeocodingError},
};
use serde::Deserialize;

pub const ARCGIS_DEFAULT_ENDPOINT: &str =
    "https://geocode.arcgis.com/arcgis/rest/services/World/GeocodeServer/findAddressCandidates";

/// Geocoding with the ArcGIS World Geocoding Service.
#[derive(Debug, Clone)]
pub struct ArcGis {
    client: HttpClient,
    endpoint: String,
}

impl ArcGis {
    pub fn new(client: HttpClient, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Response {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    address: String,
    location: Location,
}

#[derive(Debug, Deserialize)]
struct Location {
    x: f64,
    y: f64,
}

fn first_candidate(res: Response) -> Result<Option<GeoPoint>, GeocodingError> {
    let Some(Candidate { address, location }) = res.candidates.into_iter().next() else {
        return Ok(None);
    };
    let pos = MapPoint::try_from_lat_lng_deg(location.y, location.x).ok_or_else(|| {
        GeocodingError::UnexpectedResponse(format!(
            "Invalid coordinates ({},{})",
            location.y, location.x
        ))
    })?;
    Ok(Some(GeoPoint { pos, address }))
}

impl GeoCodingGateway for ArcGis {
    fn resolve(&self, address: &str) -> Result<Option<GeoPoint>, GeocodingError> {
        let query = [("singleLine", address), ("f", "json"), ("maxLocations", "1")];
        let res: Response = self.client.get_json(&self.endpoint, &query)?;
        first_candidate(res)
    }
}
