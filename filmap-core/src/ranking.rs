use crate::entities::{Distance, GeoPoint};
use std::collections::BTreeMap;

/// Resolved locations keyed by their distance to a reference point.
///
/// The distance is the key, so two locations at exactly the same
/// distance cannot both be kept: the one inserted last wins and the
/// collision is counted in [`Ranking::overwritten`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ranking {
    entries: BTreeMap<Distance, GeoPoint>,
    overwritten: usize,
}

impl Ranking {
    pub fn insert(&mut self, distance: Distance, point: GeoPoint) {
        if let Some(prev) = self.entries.insert(distance, point) {
            log::warn!(
                "'{}' has the same distance ({distance}) as another location and replaced it",
                prev.address
            );
            self.overwritten += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries that were replaced by a later one with an equal distance.
    pub fn overwritten(&self) -> usize {
        self.overwritten
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (Distance, &GeoPoint)> {
        self.entries.iter().map(|(d, p)| (*d, p))
    }

    /// At most `n` entries in ascending order of distance.
    pub fn closest(&self, n: usize) -> impl Iterator<Item = (Distance, &GeoPoint)> {
        self.iter().take(n)
    }

    /// At most `n` entries in descending order of distance.
    pub fn farthest(&self, n: usize) -> impl Iterator<Item = (Distance, &GeoPoint)> {
        self.iter().rev().take(n)
    }
}
