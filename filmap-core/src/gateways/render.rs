use crate::entities::MapDocument;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Unable to render map template: {0}")]
    Template(String),
    #[error("Unable to serialize map data: {0}")]
    Data(String),
}

pub trait MapRenderer {
    fn render(&self, doc: &MapDocument) -> Result<String, RenderError>;
}
