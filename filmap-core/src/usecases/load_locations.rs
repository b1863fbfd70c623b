use super::prelude::*;
use crate::parser::read_locations;
use std::{fs::File, io::BufReader, path::Path};

/// Read all records of the given release year from a locations listing file.
pub fn load_locations(path: &Path, year: u16) -> Result<Vec<LocationRecord>> {
    let io_err = |source| Error::Io {
        path: path.to_owned(),
        source,
    };
    let file = File::open(path).map_err(io_err)?;
    let records = read_locations(BufReader::new(file), year).map_err(io_err)?;
    log::info!(
        "Found {} locations of {year} in {}",
        records.len(),
        path.display()
    );
    Ok(records)
}
