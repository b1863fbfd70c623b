use super::prelude::*;

/// Rank resolved locations by their geodesic distance to the reference point.
pub fn rank_by_distance<I>(reference: MapPoint, points: I) -> Ranking
where
    I: IntoIterator<Item = GeoPoint>,
{
    let mut ranking = Ranking::default();
    for point in points {
        match MapPoint::distance(reference, point.pos) {
            Some(distance) => ranking.insert(distance, point),
            None => log::warn!("Cannot measure the distance to '{}'", point.address),
        }
    }
    ranking
}

#[cfg(test)]
mod tests {
    use super::*;
    use filmap_entities::builders::Builder;
    use log::{Level, Log, Metadata, Record};
    use std::{
        sync::{Mutex, Once},
        thread::{self, ThreadId},
    };

    static RECORDS: Mutex<Vec<(ThreadId, Level)>> = Mutex::new(Vec::new());

    struct RecordingLogger;

    static LOGGER: RecordingLogger = RecordingLogger;

    impl Log for RecordingLogger {
        fn enabled(&self, _: &Metadata) -> bool {
            true
        }
        fn log(&self, record: &Record) {
            RECORDS
                .lock()
                .unwrap()
                .push((thread::current().id(), record.level()));
        }
        fn flush(&self) {}
    }

    fn init_logger() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            log::set_logger(&LOGGER).unwrap();
            log::set_max_level(log::LevelFilter::Trace);
        });
    }

    fn warnings_of_current_thread() -> usize {
        let id = thread::current().id();
        RECORDS
            .lock()
            .unwrap()
            .iter()
            .filter(|(thread, level)| *thread == id && *level == Level::Warn)
            .count()
    }

    #[test]
    fn rank_single_location() {
        let chicago = GeoPoint::build()
            .lat_lng(41.88425, -87.63245)
            .address("Chicago, Illinois")
            .finish();
        let ranking = rank_by_distance(MapPoint::from_lat_lng_deg(20, 20), vec![chicago.clone()]);
        assert_eq!(ranking.len(), 1);
        let (distance, point) = ranking.iter().next().unwrap();
        assert!((distance.to_km() - 9919.096357004097).abs() < 1e-6);
        assert_eq!(point, &chicago);
    }

    #[test]
    fn equal_distances_collapse() {
        let reference = MapPoint::from_lat_lng_deg(0, 0);
        let points = vec![
            GeoPoint::build().lat_lng(1.0, 0.0).address("north").finish(),
            GeoPoint::build().lat_lng(1.0, 0.0).address("north again").finish(),
            GeoPoint::build().lat_lng(0.0, 2.0).address("east").finish(),
        ];
        let ranking = rank_by_distance(reference, points);
        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking.overwritten(), 1);
        let (_, closest) = ranking.closest(1).next().unwrap();
        assert_eq!(closest.address, "north again");
    }

    #[test]
    fn key_count_never_exceeds_point_count() {
        let reference = MapPoint::from_lat_lng_deg(48.0, 11.0);
        let points: Vec<_> = (0..30)
            .map(|i| {
                GeoPoint::build()
                    .lat_lng(f64::from(i) - 15.0, f64::from(i) * 3.0)
                    .finish()
            })
            .collect();
        let n = points.len();
        let ranking = rank_by_distance(reference, points);
        assert_eq!(ranking.len() + ranking.overwritten(), n);
        assert!(ranking.len() <= n);
    }

    #[test]
    fn each_equal_distance_is_reported_once() {
        init_logger();
        let before = warnings_of_current_thread();
        let reference = MapPoint::from_lat_lng_deg(49, 24);
        let kyiv = GeoPoint::build().lat_lng(50.45, 30.52).address("Kyiv").finish();
        let ranking = rank_by_distance(reference, vec![kyiv.clone(), kyiv]);
        assert_eq!(ranking.overwritten(), 1);
        assert_eq!(warnings_of_current_thread() - before, 1);
    }
}
