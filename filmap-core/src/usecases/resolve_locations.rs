use super::prelude::*;

/// Geocode the place of each record.
///
/// Records whose place cannot be resolved are dropped,
/// the order of the remaining ones is preserved.
pub fn resolve_locations<G>(gw: &G, records: &[LocationRecord]) -> Vec<GeoPoint>
where
    G: GeoCodingGateway + ?Sized,
{
    let points: Vec<_> = records
        .iter()
        .filter_map(|record| match gw.resolve(&record.place) {
            Ok(point) => point,
            Err(err) => {
                log::debug!("Skipping '{}': {err}", record.title);
                None
            }
        })
        .collect();
    log::info!("Resolved {} of {} locations", points.len(), records.len());
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use filmap_entities::builders::Builder;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MockGeoCodingGw {
        requests: RefCell<Vec<String>>,
    }

    impl GeoCodingGateway for MockGeoCodingGw {
        fn resolve(
            &self,
            address: &str,
        ) -> std::result::Result<Option<GeoPoint>, GeocodingError> {
            self.requests.borrow_mut().push(address.to_string());
            match address {
                "Chicago, Illinois" => Ok(Some(
                    GeoPoint::build()
                        .lat_lng(41.88425, -87.63245)
                        .address("Chicago, Illinois")
                        .finish(),
                )),
                "Kyiv" => Ok(Some(
                    GeoPoint::build()
                        .lat_lng(50.45, 30.52)
                        .address("Kyiv, Ukraine")
                        .finish(),
                )),
                "Broken" => Err(GeocodingError::Transport("timeout".into())),
                _ => Ok(None),
            }
        }
    }

    fn record(place: &str) -> LocationRecord {
        LocationRecord::build().title("Film").place(place).finish()
    }

    #[test]
    fn drop_unresolved_records() {
        let gw = MockGeoCodingGw::default();
        let records = vec![
            record("Kyiv"),
            record("Atlantis"),
            record("Broken"),
            record("Chicago, Illinois"),
        ];
        let points = resolve_locations(&gw, &records);
        let addresses: Vec<_> = points.iter().map(|p| p.address.as_str()).collect();
        assert_eq!(addresses, vec!["Kyiv, Ukraine", "Chicago, Illinois"]);
        assert_eq!(gw.requests.borrow().len(), 4);
    }

    #[test]
    fn resolve_through_cache() {
        let gw = CachedGeocoder::new(MockGeoCodingGw::default());
        let records = vec![record("Kyiv"), record("Kyiv"), record("Atlantis")];
        let points = resolve_locations(&gw, &records);
        assert_eq!(points.len(), 2);
        assert_eq!(gw.hits(), 1);
    }
}
