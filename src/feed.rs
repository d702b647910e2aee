//! Support for creating an Atom feed from the blog info.

use crate::config::BlogInfo;
use crate::date::{parse_date, FormatError};
use crate::post::PostRef;
use crate::render::HOME_FILE;
use atom_syndication::{
    Category, Entry, Error as AtomError, Feed, FixedDateTime, Link, Person, Text, WriteConfig,
};
use chrono::{DateTime, NaiveDate, Utc};
use std::fmt;
use std::io::Write;

/// Used as the feed subtitle when the first page isn't the home page.
pub const PLACEHOLDER_SUBTITLE: &str = "Insert subtitle here";

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n";

const INDENT_SIZE: usize = 2;

const DATE_ELEMENTS: [&str; 2] = ["updated", "published"];

/// Builds the feed from `info` and writes it, preceded by an XML declaration,
/// to a [`std::io::Write`]. `today` becomes the feed's `updated` date.
pub fn write_feed<W: Write>(info: &BlogInfo, today: NaiveDate, mut w: W) -> Result<()> {
    w.write_all(render(info, today)?.as_bytes())?;
    Ok(())
}

/// Renders the feed document into a string. Every `updated` and `published`
/// element carries a plain `YYYY-MM-DD` calendar date.
pub fn render(info: &BlogInfo, today: NaiveDate) -> Result<String> {
    let buf = feed(info, today)?.write_with_config(
        Vec::new(),
        WriteConfig {
            write_document_declaration: false,
            indent_size: Some(INDENT_SIZE),
        },
    )?;
    // atom_syndication only ever emits UTF-8
    let xml = String::from_utf8(buf)
        .map_err(|err| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, err)))?;
    let mut out = String::with_capacity(XML_DECLARATION.len() + xml.len());
    out.push_str(XML_DECLARATION);
    out.push_str(&DATE_ELEMENTS.iter().fold(xml, |xml, name| calendar_dates(&xml, name)));
    Ok(out)
}

/// Builds the feed model: site metadata plus one entry per post, in the
/// order the posts are listed.
pub fn feed(info: &BlogInfo, today: NaiveDate) -> Result<Feed> {
    // Borrow the home page's description for the subtitle, but only when the
    // home page is listed first.
    let subtitle = match info.pages.first() {
        Some(page) if page.file == HOME_FILE => page.description.clone(),
        _ => PLACEHOLDER_SUBTITLE.to_owned(),
    };

    Ok(Feed {
        title: info.domain_name.as_str().into(),
        subtitle: Some(subtitle.into()),
        id: format!("tag:{},{}:/", info.domain_name, info.inception_date),
        updated: midnight_utc(today),
        links: vec![Link {
            href: format!("https://{}/", info.domain_name),
            rel: "alternate".to_owned(),
            mime_type: Some("text/html".to_owned()),
            ..Default::default()
        }],
        entries: info
            .posts
            .iter()
            .map(|post| entry(info, post))
            .collect::<Result<Vec<Entry>>>()?,
        ..Default::default()
    })
}

/// The public URL of a post: `https://www.{domain}/{file}`.
pub fn post_url(domain_name: &str, file: &str) -> String {
    format!("https://www.{}/{}", domain_name, file)
}

/// An RFC 4151 tag URI for a post: `tag:{domain},{published}:/{file}`.
pub fn tag_uri(domain_name: &str, post: &PostRef) -> String {
    format!("tag:{},{}:/{}", domain_name, post.published, post.file)
}

fn entry(info: &BlogInfo, post: &PostRef) -> Result<Entry> {
    let url = post_url(&info.domain_name, &post.file);
    Ok(Entry {
        authors: vec![Person {
            name: info.author.clone(),
            uri: Some(post_url(&info.domain_name, "")),
            ..Default::default()
        }],
        title: post.description.as_str().into(),
        links: vec![Link {
            href: url.clone(),
            rel: "alternate".to_owned(),
            ..Default::default()
        }],
        id: tag_uri(&info.domain_name, post),
        updated: date_time(post.last_updated())?,
        published: Some(date_time(&post.published)?),
        categories: post
            .tags
            .iter()
            .map(|tag| Category {
                term: tag.clone(),
                scheme: Some(url.clone()),
                ..Default::default()
            })
            .collect(),
        summary: Some(Text::html(post.description.as_str())),
        ..Default::default()
    })
}

// Atom wants full date-times; posts only carry a calendar date, which we pin
// to midnight UTC.
fn date_time(iso_date: &str) -> Result<FixedDateTime> {
    Ok(midnight_utc(parse_date(iso_date)?))
}

fn midnight_utc(date: NaiveDate) -> FixedDateTime {
    let midnight = date.and_time(chrono::NaiveTime::MIN);
    DateTime::<Utc>::from_naive_utc_and_offset(midnight, Utc).into()
}

// The model stores full date-times, which the writer emits as RFC 3339.
// Strip each `<{name}>` element back to its calendar date; text that isn't an
// RFC 3339 date-time is left alone.
fn calendar_dates(xml: &str, name: &str) -> String {
    let open = format!("<{}>", name);
    let close = format!("</{}>", name);
    let mut out = String::with_capacity(xml.len());
    let mut rest = xml;
    while let Some(start) = rest.find(&open) {
        let text_start = start + open.len();
        let text_len = match rest[text_start..].find(&close) {
            Some(len) => len,
            None => break,
        };
        let text = &rest[text_start..text_start + text_len];
        out.push_str(&rest[..text_start]);
        match DateTime::parse_from_rfc3339(text) {
            Ok(date_time) => out.push_str(&date_time.date_naive().format("%Y-%m-%d").to_string()),
            Err(_) => out.push_str(text),
        }
        rest = &rest[text_start + text_len..];
    }
    out.push_str(rest);
    out
}

type Result<T> = std::result::Result<T, Error>;

/// Represents a problem creating a feed. Variants include I/O, Atom, and
/// date parsing issues.
#[derive(Debug)]
pub enum Error {
    /// Returned when there is a generic I/O error.
    Io(std::io::Error),

    /// Returned when there is an Atom-related error.
    Atom(AtomError),

    /// Returned when there is an issue parsing a post's date.
    Format(FormatError),
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(err) => err.fmt(f),
            Error::Atom(err) => err.fmt(f),
            Error::Format(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Atom(err) => Some(err),
            Error::Format(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    /// Converts [`std::io::Error`]s into [`Error`]. This allows us to use the
    /// `?` operator in fallible feed operations.
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<AtomError> for Error {
    /// Converts [`AtomError`]s into [`Error`]. This allows us to use the `?`
    /// operator in fallible feed operations.
    fn from(err: AtomError) -> Error {
        Error::Atom(err)
    }
}

impl From<FormatError> for Error {
    /// Converts [`FormatError`]s into [`Error`]. This allows us to use the `?`
    /// operator in fallible feed operations.
    fn from(err: FormatError) -> Error {
        Error::Format(err)
    }
}
