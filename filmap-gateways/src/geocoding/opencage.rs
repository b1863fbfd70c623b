use super::HttpClient;
use filmap_core::{
    entities::{GeoPoint, MapPoint},
    gateways::geocode::{GeoCodingGateway, GeocodingError},
};
use serde::Deserialize;

pub const OPENCAGE_DEFAULT_ENDPOINT: &str = "https://api.opencagedata.com/geocode/v1/json";

/// Geocoding with the OpenCage API (requires an API key).
#[derive(Debug, Clone)]
pub struct OpenCage {
    client: HttpClient,
    endpoint: String,
    api_key: String,
}

impl OpenCage {
    pub fn new(client: HttpClient, endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Response {
    results: Vec<Match>,
}

#[derive(Debug, Deserialize)]
struct Match {
    formatted: String,
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    lat: f64,
    lng: f64,
}

fn first_result(res: Response) -> Result<Option<GeoPoint>, GeocodingError> {
    let Some(Match {
        formatted,
        geometry,
    }) = res.results.into_iter().next()
    else {
        return Ok(None);
    };
    let pos = MapPoint::try_from_lat_lng_deg(geometry.lat, geometry.lng).ok_or_else(|| {
        GeocodingError::UnexpectedResponse(format!(
            "Invalid coordinates ({},{})",
            geometry.lat, geometry.lng
        ))
    })?;
    Ok(Some(GeoPoint {
        pos,
        address: formatted,
    }))
}

impl GeoCodingGateway for OpenCage {
    fn resolve(&self, address: &str) -> Result<Option<GeoPoint>, GeocodingError> {
        let query = [
            ("q", address),
            ("key", self.api_key.as_str()),
            ("limit", "1"),
            ("no_annotations", "1"),
        ];
        let res: Response = self.client.get_json(&self.endpoint, &query)?;
        first_result(res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_first_result() {
        let res: Response = serde_json::from_str(
            r#"{
              "results": [{
                "components": {"city": "Chicago", "country": "United States"},
                "confidence": 5,
                "formatted": "Chicago, Illinois, United States of America",
                "geometry": {"lat": 41.8755616, "lng": -87.6244212}
              }],
              "status": {"code": 200, "message": "OK"},
              "total_results": 1
            }"#,
        )
        .unwrap();
        let point = first_result(res).unwrap().unwrap();
        assert_eq!(point.address, "Chicago, Illinois, United States of America");
        assert_eq!(point.pos.to_lat_lng_deg(), (41.8755616, -87.6244212));
    }

    #[test]
    fn no_results() {
        let res: Response = serde_json::from_str(r#"{"results":[],"total_results":0}"#).unwrap();
        assert!(first_result(res).unwrap().is_none());
    }
}
