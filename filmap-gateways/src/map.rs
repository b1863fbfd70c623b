use askama::Template;
use filmap_core::{
    entities::*,
    gateways::render::{MapRenderer, RenderError},
};
use serde::Serialize;

pub const LEAFLET_DEFAULT_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist";

const DEFAULT_TITLE: &str = "Filming locations";

#[derive(Template)]
#[template(path = "map.html")]
struct MapTemplate<'a> {
    title: &'a str,
    leaflet_url: &'a str,
    center_lat: f64,
    center_lng: f64,
    zoom: u8,
    layers_json: String,
}

#[derive(Serialize)]
struct LayerData<'a> {
    name: &'a str,
    color: &'static str,
    markers: Vec<MarkerData<'a>>,
}

#[derive(Serialize)]
struct MarkerData<'a> {
    lat: f64,
    lng: f64,
    year: u16,
    place: &'a str,
}

impl<'a> From<&'a MarkerLayer> for LayerData<'a> {
    fn from(from: &'a MarkerLayer) -> Self {
        let markers = from
            .markers
            .iter()
            .map(|m| {
                let (lat, lng) = m.pos.to_lat_lng_deg();
                MarkerData {
                    lat,
                    lng,
                    year: m.popup.year,
                    place: &m.popup.place,
                }
            })
            .collect();
        Self {
            name: &from.name,
            color: from.color.as_str(),
            markers,
        }
    }
}

/// Marker data is embedded into a `<script>` element, so the
/// JSON must not contain any markup the HTML parser reacts to.
/// Inside JSON strings the escapes decode to the same characters.
fn script_safe_json<T: Serialize>(data: &T) -> Result<String, RenderError> {
    let json = serde_json::to_string(data).map_err(|err| RenderError::Data(err.to_string()))?;
    Ok(json
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026"))
}

/// Renders a map as a standalone HTML page based on Leaflet.
#[derive(Debug, Clone)]
pub struct LeafletHtml {
    title: String,
    leaflet_url: String,
}

impl LeafletHtml {
    pub fn new(title: impl Into<String>, leaflet_url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            leaflet_url: leaflet_url.into(),
        }
    }
}

impl Default for LeafletHtml {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE, LEAFLET_DEFAULT_URL)
    }
}

impl MapRenderer for LeafletHtml {
    fn render(&self, doc: &MapDocument) -> Result<String, RenderError> {
        let layers: Vec<LayerData> = doc.layers.iter().map(LayerData::from).collect();
        let (center_lat, center_lng) = doc.center.to_lat_lng_deg();
        MapTemplate {
            title: &self.title,
            leaflet_url: &self.leaflet_url,
            center_lat,
            center_lng,
            zoom: doc.zoom,
            layers_json: script_safe_json(&layers)?,
        }
        .render()
        .map_err(|err| RenderError::Template(err.to_string()))
    }
}
