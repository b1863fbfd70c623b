#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # filmap-entities
//!
//! Reusable, agnostic domain entities for filmap.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod geo;
pub mod location;
pub mod map;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
