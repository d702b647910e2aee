//! Parsing and long-form formatting of the `YYYY-MM-DD` dates used for post
//! publication and update times.

use chrono::{NaiveDate, ParseError};
use std::fmt;

const ISO_FORMAT: &str = "%Y-%m-%d";

/// Parses a strict `YYYY-MM-DD` date. `chrono` alone would accept unpadded
/// months and days (`2021-3-5`), so the shape is checked before handing the
/// input over.
pub fn parse_date(iso_date: &str) -> Result<NaiveDate, FormatError> {
    let bytes = iso_date.as_bytes();
    let well_shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_shaped {
        return Err(FormatError {
            input: iso_date.to_owned(),
            err: None,
        });
    }

    NaiveDate::parse_from_str(iso_date, ISO_FORMAT).map_err(|err| FormatError {
        input: iso_date.to_owned(),
        err: Some(err),
    })
}

/// Converts an ISO date into the long form used on rendered pages, e.g.
/// `1970-01-01` becomes `Thursday, January 1, 1970`.
pub fn pretty_date(iso_date: &str) -> Result<String, FormatError> {
    Ok(parse_date(iso_date)?.format("%A, %B %-d, %Y").to_string())
}

/// Returned when a date is not a valid `YYYY-MM-DD` calendar date.
#[derive(Debug)]
pub struct FormatError {
    /// The offending input.
    pub input: String,

    /// The underlying parse error, if the input was well-shaped but still not
    /// a real date (e.g., `2021-02-30`).
    pub err: Option<ParseError>,
}

impl fmt::Display for FormatError {
    /// Displays a [`FormatError`] as human-readable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.err {
            Some(err) => write!(f, "invalid date `{}`: {}", self.input, err),
            None => write!(f, "invalid date `{}`: expected YYYY-MM-DD", self.input),
        }
    }
}

impl std::error::Error for FormatError {
    /// Implements the [`std::error::Error`] trait for [`FormatError`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.err {
            Some(err) => Some(err),
            None => None,
        }
    }
}
