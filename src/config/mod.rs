use anyhow::{anyhow, Result};
use filmap_core::usecases::MapSettings;
use filmap_gateways::{
    geocoding::{
        ARCGIS_DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, NOMINATIM_DEFAULT_ENDPOINT,
        OPENCAGE_DEFAULT_ENDPOINT,
    },
    map::LEAFLET_DEFAULT_URL,
};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "filmap.toml";
const DEFAULT_USER_AGENT: &str = "filmap";
const DEFAULT_OUTPUT_FILE_NAME: &str = "map.html";
const DEFAULT_TITLE: &str = "Filming locations";

const ENV_NAME_OPENCAGE_API_KEY: &str = "OPENCAGE_API_KEY";
const ENV_NAME_OUTPUT: &str = "FILMAP_OUTPUT";

pub struct Config {
    pub geocoding: Geocoding,
    pub map: Map,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::debug!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let mut raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::debug!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        apply_env_overrides(&mut raw_config, |name| env::var(name).ok());
        Self::try_from(raw_config)
    }
}

fn apply_env_overrides<F>(cfg: &mut raw::Config, var: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(api_key) = var(ENV_NAME_OPENCAGE_API_KEY) {
        let gateway = cfg.gateway.get_or_insert_with(Default::default);
        gateway
            .opencage
            .get_or_insert_with(Default::default)
            .api_key = Some(api_key);
    }
    if let Some(output) = var(ENV_NAME_OUTPUT) {
        cfg.map.get_or_insert_with(Default::default).output = Some(output.into());
    }
}

pub struct Geocoding {
    pub resolvers: Vec<Resolver>,
    pub timeout: Duration,
    pub user_agent: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolver {
    ArcGis { endpoint: String },
    Nominatim { endpoint: String },
    OpenCage { endpoint: String, api_key: String },
}

pub struct Map {
    pub output: PathBuf,
    pub title: String,
    pub leaflet_url: String,
    pub settings: MapSettings,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            geocoding,
            gateway,
            map,
        } = from;

        let raw::Geocoding {
            resolvers,
            timeout,
            user_agent,
        } = geocoding.unwrap_or_default();
        let gateway = gateway.unwrap_or_default();

        let resolvers = resolvers
            .or_else(|| raw::Geocoding::default().resolvers)
            .unwrap_or_default()
            .into_iter()
            .map(|name| -> Result<Resolver> {
                let resolver = match name {
                    raw::Resolver::Arcgis => {
                        let raw::Endpoint { endpoint } =
                            gateway.arcgis.clone().unwrap_or_default();
                        Resolver::ArcGis {
                            endpoint: endpoint.unwrap_or_else(|| ARCGIS_DEFAULT_ENDPOINT.into()),
                        }
                    }
                    raw::Resolver::Nominatim => {
                        let raw::Endpoint { endpoint } =
                            gateway.nominatim.clone().unwrap_or_default();
                        Resolver::Nominatim {
                            endpoint: endpoint
                                .unwrap_or_else(|| NOMINATIM_DEFAULT_ENDPOINT.into()),
                        }
                    }
                    raw::Resolver::Opencage => {
                        let raw::OpenCage { endpoint, api_key } =
                            gateway.opencage.clone().unwrap_or_default();
                        let api_key = api_key.ok_or_else(|| {
                            anyhow!(
                                "Missing API key for the 'opencage' resolver \
                                 (set {ENV_NAME_OPENCAGE_API_KEY})"
                            )
                        })?;
                        Resolver::OpenCage {
                            endpoint: endpoint
                                .unwrap_or_else(|| OPENCAGE_DEFAULT_ENDPOINT.into()),
                            api_key,
                        }
                    }
                };
                Ok(resolver)
            })
            .collect::<Result<Vec<_>>>()?;

        if resolvers.is_empty() {
            return Err(anyhow!("No geocoding resolvers defined"));
        }

        let geocoding = Geocoding {
            resolvers,
            timeout: timeout.unwrap_or(DEFAULT_TIMEOUT),
            user_agent: user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.into()),
        };

        let raw::Map {
            output,
            title,
            leaflet_url,
            zoom_start,
            closest,
            farthest,
        } = map.unwrap_or_default();

        let defaults = MapSettings::default();
        let settings = MapSettings {
            closest: closest.unwrap_or(defaults.closest),
            farthest: farthest.unwrap_or(defaults.farthest),
            zoom: zoom_start.unwrap_or(defaults.zoom),
        };
        if settings.closest == 0 || settings.farthest == 0 {
            return Err(anyhow!(
                "The number of closest and farthest locations must be positive"
            ));
        }

        let map = Map {
            output: output.unwrap_or_else(|| DEFAULT_OUTPUT_FILE_NAME.into()),
            title: title.unwrap_or_else(|| DEFAULT_TITLE.into()),
            leaflet_url: leaflet_url.unwrap_or_else(|| LEAFLET_DEFAULT_URL.into()),
            settings,
        };

        Ok(Self { geocoding, map })
    }
}
