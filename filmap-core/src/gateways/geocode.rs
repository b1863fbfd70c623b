use crate::entities::GeoPoint;
use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeocodingError {
    #[error("Geocoding request failed: {0}")]
    Transport(String),
    #[error("Unexpected geocoding response: {0}")]
    UnexpectedResponse(String),
}

pub trait GeoCodingGateway {
    /// Resolve a free-text address.
    ///
    /// `Ok(None)` means the backend answered but did not find anything.
    fn resolve(&self, address: &str) -> Result<Option<GeoPoint>, GeocodingError>;
}

impl<G> GeoCodingGateway for Box<G>
where
    G: GeoCodingGateway + ?Sized,
{
    fn resolve(&self, address: &str) -> Result<Option<GeoPoint>, GeocodingError> {
        (**self).resolve(address)
    }
}

/// Asks a list of backends in order and returns the first hit.
///
/// Errors of a single backend are treated like a miss of that
/// backend, so the next one still gets its chance.
#[derive(Default)]
pub struct FallbackGeocoder {
    backends: Vec<(String, Box<dyn GeoCodingGateway>)>,
}

impl FallbackGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_backend<G>(mut self, name: impl Into<String>, gw: G) -> Self
    where
        G: GeoCodingGateway + 'static,
    {
        self.backends.push((name.into(), Box::new(gw)));
        self
    }

    pub fn backend_names(&self) -> impl Iterator<Item = &str> {
        self.backends.iter().map(|(name, _)| name.as_str())
    }
}

impl GeoCodingGateway for FallbackGeocoder {
    fn resolve(&self, address: &str) -> Result<Option<GeoPoint>, GeocodingError> {
        for (name, gw) in &self.backends {
            match gw.resolve(address) {
                Ok(Some(point)) => {
                    log::debug!("Resolved '{address}' with {name}: {}", point.pos);
                    return Ok(Some(point));
                }
                Ok(None) => {
                    log::debug!("{name} did not find '{address}'");
                }
                Err(err) => {
                    log::debug!("{name} failed to resolve '{address}': {err}");
                }
            }
        }
        Ok(None)
    }
}

/// Memoizes the results of another gateway by the exact address string.
///
/// Misses are cached too. Entries never expire.
pub struct CachedGeocoder<G> {
    gw: G,
    cache: RefCell<HashMap<String, Option<GeoPoint>>>,
    hits: Cell<usize>,
}

impl<G> CachedGeocoder<G> {
    pub fn new(gw: G) -> Self {
        Self {
            gw,
            cache: Default::default(),
            hits: Default::default(),
        }
    }

    /// Number of lookups that were answered from the cache.
    pub fn hits(&self) -> usize {
        self.hits.get()
    }

    /// Number of distinct addresses that were passed to the inner gateway.
    pub fn misses(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl<G> GeoCodingGateway for CachedGeocoder<G>
where
    G: GeoCodingGateway,
{
    fn resolve(&self, address: &str) -> Result<Option<GeoPoint>, GeocodingError> {
        if let Some(cached) = self.cache.borrow().get(address) {
            log::debug!("Cache hit for '{address}'");
            self.hits.set(self.hits.get() + 1);
            return Ok(cached.clone());
        }
        let resolved = self.gw.resolve(address)?;
        self.cache
            .borrow_mut()
            .insert(address.to_owned(), resolved.clone());
        Ok(resolved)
    }
}
