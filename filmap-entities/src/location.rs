use crate::geo::*;

/// A film together with the place where it was shot,
/// as found in a locations listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationRecord {
    pub title: String,
    pub place: String,
}

/// A resolved filming location.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoPoint {
    pub pos: MapPoint,
    /// Canonical address as reported by the geocoding backend.
    pub address: String,
}

impl GeoPoint {
    pub fn new(pos: MapPoint, address: impl Into<String>) -> Self {
        Self {
            pos,
            address: address.into(),
        }
    }
}
