use anyhow::{Context, Result};
use filmap_core::{
    entities::{MapDocument, MapPoint},
    gateways::{geocode::GeoCodingGateway, render::MapRenderer},
    usecases::{self, MapSettings},
};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub struct Request {
    pub year: u16,
    pub reference: MapPoint,
    pub path: PathBuf,
}

/// Parse, geocode and rank the locations of the requested year.
pub fn compose_map<G>(req: &Request, geocoder: &G, settings: &MapSettings) -> Result<MapDocument>
where
    G: GeoCodingGateway + ?Sized,
{
    let records = usecases::load_locations(&req.path, req.year)?;
    let points = usecases::resolve_locations(geocoder, &records);
    let ranking = usecases::rank_by_distance(req.reference, points);
    log::info!("Ranked {} locations around {}", ranking.len(), req.reference);
    Ok(usecases::compose_map(req.reference, &ranking, req.year, settings))
}

pub fn render_map<R>(renderer: &R, doc: &MapDocument, output: &Path) -> Result<()>
where
    R: MapRenderer + ?Sized,
{
    let html = renderer.render(doc)?;
    fs::write(output, html).with_context(|| format!("Unable to write {}", output.display()))?;
    log::info!("Map was written to {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use filmap_core::{
        entities::GeoPoint,
        gateways::geocode::{CachedGeocoder, GeocodingError},
    };
    use filmap_entities::builders::Builder;
    use filmap_gateways::map::LeafletHtml;
    use std::{cell::RefCell, io::Write};

    #[derive(Default)]
    struct MockGeoCodingGw {
        requests: RefCell<Vec<String>>,
    }

    impl GeoCodingGateway for MockGeoCodingGw {
        fn resolve(&self, address: &str) -> Result<Option<GeoPoint>, GeocodingError> {
            self.requests.borrow_mut().push(address.to_string());
            let point = match address {
                "Chicago, Illinois, USA" => (41.88425, -87.63245),
                "Lviv, Ukraine" => (49.84, 24.03),
                "Kyiv, Ukraine" => (50.45, 30.52),
                _ => return Ok(None),
            };
            Ok(Some(
                GeoPoint::build()
                    .lat_lng(point.0, point.1)
                    .address(address)
                    .finish(),
            ))
        }
    }

    fn listing() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for line in [
            "Serious Business (1999) Chicago, Illinois, USA",
            "Lviv Story (1999) Lviv, Ukraine (old town)",
            "Kyiv Story (1999) Kyiv, Ukraine",
            "Kyiv Story II (1999) Kyiv, Ukraine",
            "Lost (1999) Atlantis",
            "Later (2000) Kyiv, Ukraine",
        ] {
            writeln!(file, "{line}").unwrap();
        }
        file
    }

    #[test]
    fn compose_map_from_listing() {
        let file = listing();
        let gw = CachedGeocoder::new(MockGeoCodingGw::default());
        let req = Request {
            year: 1999,
            reference: MapPoint::from_lat_lng_deg(49, 24),
            path: file.path().to_owned(),
        };
        let doc = compose_map(&req, &gw, &MapSettings::default()).unwrap();
        assert_eq!(gw.hits(), 1);

        let closest: Vec<_> = doc.layers[0]
            .markers
            .iter()
            .map(|m| m.popup.place.as_str())
            .collect();
        // Both Kyiv films share one distance, so only one of them is kept.
        assert_eq!(
            closest,
            ["Lviv, Ukraine", "Kyiv, Ukraine", "Chicago, Illinois, USA"]
        );
        assert_eq!(doc.layers[1].markers[0].popup.place, "Chicago, Illinois, USA");
    }

    #[test]
    fn missing_listing_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let req = Request {
            year: 1999,
            reference: MapPoint::from_lat_lng_deg(0, 0),
            path: dir.path().join("missing.list"),
        };
        let gw = MockGeoCodingGw::default();
        assert!(compose_map(&req, &gw, &MapSettings::default()).is_err());
        assert!(gw.requests.borrow().is_empty());
    }

    #[test]
    fn write_rendered_map() {
        let file = listing();
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("map.html");
        let req = Request {
            year: 1999,
            reference: MapPoint::from_lat_lng_deg(49, 24),
            path: file.path().to_owned(),
        };
        let gw = MockGeoCodingGw::default();
        let doc = compose_map(&req, &gw, &MapSettings::default()).unwrap();
        render_map(&LeafletHtml::default(), &doc, &output).unwrap();
        let html = fs::read_to_string(&output).unwrap();
        assert!(html.contains("Closest movies"));
        assert!(html.contains("Farthest movies"));
    }
}
