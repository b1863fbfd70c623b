pub mod geocode;
pub mod render;
