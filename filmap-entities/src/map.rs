use crate::geo::*;

/// A self-contained description of an interactive map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapDocument {
    pub center: MapPoint,
    pub zoom: u8,
    pub layers: Vec<MarkerLayer>,
}

/// A named group of markers that can be toggled as a whole.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerLayer {
    pub name: String,
    pub color: MarkerColor,
    pub markers: Vec<Marker>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub pos: MapPoint,
    pub popup: Popup,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    pub year: u16,
    pub place: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerColor {
    Blue,
    Red,
}

impl MarkerColor {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Red => "red",
        }
    }
}
