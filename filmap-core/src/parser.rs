use crate::entities::LocationRecord;
use lazy_static::lazy_static;
use regex::Regex;
use std::io::{self, BufRead};

lazy_static! {
    static ref PARENTHESIZED_REGEX: Regex = Regex::new(r"\([^()]*\)").unwrap();
}

fn year_tag(year: u16) -> String {
    format!("({year})")
}

fn parse_tagged_line(line: &str, tag: &str) -> Option<LocationRecord> {
    if !line.contains(tag) {
        return None;
    }
    // Both delimiters exist because the tag contains them.
    let title_end = line.find('(')?;
    let place_start = line.find(')')? + 1;
    let title = line[..title_end].trim().to_owned();
    let place = PARENTHESIZED_REGEX
        .replace_all(&line[place_start..], "")
        .trim()
        .to_owned();
    Some(LocationRecord { title, place })
}

/// Extract the title and the place of a listing line
/// that is tagged with the given release year.
///
/// The year tag is matched as a literal `(<year>)` anywhere in the line.
/// All innermost parenthesized groups are removed from the place.
pub fn parse_line(line: &str, year: u16) -> Option<LocationRecord> {
    parse_tagged_line(line, &year_tag(year))
}

/// Parse all lines of a locations listing, skipping
/// the ones that are not tagged with the given year.
pub fn read_locations<R: BufRead>(reader: R, year: u16) -> io::Result<Vec<LocationRecord>> {
    let tag = year_tag(year);
    let mut records = vec![];
    for line in reader.lines() {
        if let Some(record) = parse_tagged_line(&line?, &tag) {
            records.push(record);
        }
    }
    Ok(records)
}
