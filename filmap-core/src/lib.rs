pub mod gateways;
pub mod parser;
pub mod ranking;
pub mod usecases;

pub mod entities {
    pub use filmap_entities::{geo::*, location::*, map::*};
}
