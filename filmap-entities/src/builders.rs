pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{geo_point_builder::*, location_record_builder::*};

pub mod geo_point_builder {

    use super::*;
    use crate::{geo::*, location::*};

    #[derive(Debug)]
    pub struct GeoPointBuild {
        geo_point: GeoPoint,
    }

    impl GeoPointBuild {
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.geo_point.pos = pos;
            self
        }
        pub fn lat_lng(mut self, lat: f64, lng: f64) -> Self {
            self.geo_point.pos = MapPoint::from_lat_lng_deg(lat, lng);
            self
        }
        pub fn address(mut self, address: &str) -> Self {
            self.geo_point.address = address.into();
            self
        }
        pub fn finish(self) -> GeoPoint {
            self.geo_point
        }
    }

    impl Builder for GeoPoint {
        type Build = GeoPointBuild;
        fn build() -> Self::Build {
            Self::Build {
                geo_point: GeoPoint {
                    pos: MapPoint::from_lat_lng_deg(0.0, 0.0),
                    address: "".into(),
                },
            }
        }
    }
}

pub mod location_record_builder {

    use super::*;
    use crate::location::*;

    #[derive(Debug)]
    pub struct LocationRecordBuild {
        record: LocationRecord,
    }

    impl LocationRecordBuild {
        pub fn title(mut self, title: &str) -> Self {
            self.record.title = title.into();
            self
        }
        pub fn place(mut self, place: &str) -> Self {
            self.record.place = place.into();
            self
        }
        pub fn finish(self) -> LocationRecord {
            self.record
        }
    }

    impl Builder for LocationRecord {
        type Build = LocationRecordBuild;
        fn build() -> Self::Build {
            Self::Build {
                record: LocationRecord {
                    title: "".into(),
                    place: "".into(),
                },
            }
        }
    }
}
