use super::prelude::*;

pub const CLOSEST_LAYER_NAME: &str = "Closest movies";
pub const FARTHEST_LAYER_NAME: &str = "Farthest movies";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapSettings {
    pub closest: usize,
    pub farthest: usize,
    pub zoom: u8,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            closest: 10,
            farthest: 10,
            zoom: 5,
        }
    }
}

fn marker_layer<'a, I>(name: &str, color: MarkerColor, year: u16, entries: I) -> MarkerLayer
where
    I: Iterator<Item = (Distance, &'a GeoPoint)>,
{
    let markers = entries
        .map(|(_, point)| Marker {
            pos: point.pos,
            popup: Popup {
                year,
                place: point.address.clone(),
            },
        })
        .collect();
    MarkerLayer {
        name: name.to_owned(),
        color,
        markers,
    }
}

/// Compose a map around the reference point with one layer for the
/// closest and one for the farthest ranked locations.
///
/// Each layer holds as many entries as requested or as available,
/// whichever is less.
pub fn compose_map(
    reference: MapPoint,
    ranking: &Ranking,
    year: u16,
    settings: &MapSettings,
) -> MapDocument {
    let closest = marker_layer(
        CLOSEST_LAYER_NAME,
        MarkerColor::Blue,
        year,
        ranking.closest(settings.closest),
    );
    let farthest = marker_layer(
        FARTHEST_LAYER_NAME,
        MarkerColor::Red,
        year,
        ranking.farthest(settings.farthest),
    );
    log::debug!(
        "Composed map with {} closest and {} farthest locations",
        closest.markers.len(),
        farthest.markers.len()
    );
    MapDocument {
        center: reference,
        zoom: settings.zoom,
        layers: vec![closest, farthest],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filmap_entities::builders::Builder;

    fn ranking_with(n: usize) -> Ranking {
        let mut ranking = Ranking::default();
        for i in 0..n {
            let point = GeoPoint::build()
                .lat_lng(i as f64, 0.0)
                .address(&format!("place {i}"))
                .finish();
            ranking.insert(Distance::from_km(i as f64 * 100.0), point);
        }
        ranking
    }

    fn addresses(layer: &MarkerLayer) -> Vec<&str> {
        layer
            .markers
            .iter()
            .map(|m| m.popup.place.as_str())
            .collect()
    }

    #[test]
    fn two_layers_of_ten() {
        let ranking = ranking_with(25);
        let doc = compose_map(
            MapPoint::from_lat_lng_deg(0, 0),
            &ranking,
            1999,
            &MapSettings::default(),
        );
        assert_eq!(doc.zoom, 5);
        assert_eq!(doc.layers.len(), 2);

        let closest = &doc.layers[0];
        assert_eq!(closest.name, CLOSEST_LAYER_NAME);
        assert_eq!(closest.color, MarkerColor::Blue);
        assert_eq!(addresses(closest)[..3], ["place 0", "place 1", "place 2"]);
        assert_eq!(closest.markers.len(), 10);

        let farthest = &doc.layers[1];
        assert_eq!(farthest.name, FARTHEST_LAYER_NAME);
        assert_eq!(farthest.color, MarkerColor::Red);
        assert_eq!(addresses(farthest)[..2], ["place 24", "place 23"]);
        assert_eq!(farthest.markers.len(), 10);

        // no overlap with at least 20 entries
        assert!(addresses(closest)
            .iter()
            .all(|a| !addresses(farthest).contains(a)));
    }

    #[test]
    fn fewer_entries_than_requested() {
        let ranking = ranking_with(3);
        let doc = compose_map(
            MapPoint::from_lat_lng_deg(20, 20),
            &ranking,
            2001,
            &MapSettings::default(),
        );
        assert_eq!(addresses(&doc.layers[0]), ["place 0", "place 1", "place 2"]);
        assert_eq!(addresses(&doc.layers[1]), ["place 2", "place 1", "place 0"]);
        assert!(doc.layers[0].markers.iter().all(|m| m.popup.year == 2001));
    }

    #[test]
    fn empty_ranking() {
        let doc = compose_map(
            MapPoint::from_lat_lng_deg(0, 0),
            &Ranking::default(),
            1999,
            &MapSettings::default(),
        );
        assert!(doc.layers.iter().all(|l| l.markers.is_empty()));
    }
}
