mod compose_map;
mod error;
mod load_locations;
mod rank_locations;
mod resolve_locations;

pub use self::{
    compose_map::*, error::Error, load_locations::*, rank_locations::*, resolve_locations::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, gateways::geocode::*, ranking::*};
}
