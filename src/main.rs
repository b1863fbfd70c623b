use anyhow::{anyhow, Result};
use clap::Parser;
use filmap_core::entities::MapPoint;
use std::process;

mod cli;
mod config;
mod gateways;
mod pipeline;

fn run(args: cli::Args) -> Result<()> {
    let cli::Args {
        year,
        latitude,
        longitude,
        path,
        config: config_file,
        output,
    } = args;

    let cfg = config::Config::try_load_from_file_or_default(config_file)?;

    let reference = MapPoint::try_from_lat_lng_deg(latitude, longitude)
        .ok_or_else(|| anyhow!("Invalid reference point ({latitude},{longitude})"))?;

    let geocoder = gateways::geocoding_gateway(&cfg.geocoding)?;
    let renderer = gateways::map_renderer(&cfg.map);

    let req = pipeline::Request {
        year,
        reference,
        path,
    };
    let doc = pipeline::compose_map(&req, &geocoder, &cfg.map.settings)?;
    log::debug!(
        "Geocoding cache: {} hits, {} misses",
        geocoder.hits(),
        geocoder.misses()
    );
    let output = output.unwrap_or(cfg.map.output);
    pipeline::render_map(&renderer, &doc, &output)
}

fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = cli::Args::parse();
    if let Err(err) = run(args) {
        log::error!("{err:#}");
        process::exit(1);
    }
}
