pub mod geocoding;
pub mod map;
