use crate::config;
use anyhow::Result;
use filmap_core::gateways::geocode::{CachedGeocoder, FallbackGeocoder};
use filmap_gateways::{
    geocoding::{ArcGis, HttpClient, Nominatim, OpenCage},
    map::LeafletHtml,
};

pub fn geocoding_gateway(cfg: &config::Geocoding) -> Result<CachedGeocoder<FallbackGeocoder>> {
    let client = HttpClient::new(cfg.timeout, &cfg.user_agent)?;
    let mut gw = FallbackGeocoder::new();
    for resolver in &cfg.resolvers {
        gw = match resolver {
            config::Resolver::ArcGis { endpoint } => {
                log::debug!("Use ArcGIS geocoding gateway");
                gw.with_backend("ArcGIS", ArcGis::new(client.clone(), endpoint))
            }
            config::Resolver::Nominatim { endpoint } => {
                log::debug!("Use Nominatim geocoding gateway");
                gw.with_backend("Nominatim", Nominatim::new(client.clone(), endpoint))
            }
            config::Resolver::OpenCage { endpoint, api_key } => {
                log::debug!("Use OpenCage geocoding gateway");
                gw.with_backend(
                    "OpenCage",
                    OpenCage::new(client.clone(), endpoint, api_key),
                )
            }
        };
    }
    log::info!(
        "Geocoding with {}",
        gw.backend_names().collect::<Vec<_>>().join(", ")
    );
    Ok(CachedGeocoder::new(gw))
}

pub fn map_renderer(cfg: &config::Map) -> LeafletHtml {
    LeafletHtml::new(&cfg.title, &cfg.leaflet_url)
}
