//! Loads and validates the [`BlogInfo`] structure that drives a build, and
//! defines the render-time [`Options`] derived from it.

use crate::date::parse_date;
use crate::page::PageRef;
use crate::post::PostRef;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use url::Url;

/// The number of post summaries shown on the home page.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct HomePageSize(pub usize);

impl Default for HomePageSize {
    fn default() -> Self {
        HomePageSize(5)
    }
}

/// The full description of a blog: site metadata plus the ordered pages and
/// posts to render. It is loaded once and never mutated during a build.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct BlogInfo {
    pub domain_name: String,
    pub author: String,

    /// The date the domain was first used, as `YYYY-MM-DD`. Forms part of the
    /// feed's tag URI.
    pub inception_date: String,

    /// The directory holding the content fragment for every page and post.
    pub input_dir: PathBuf,

    /// The directory rendered documents are written to.
    pub output_dir: PathBuf,

    pub pages: Vec<PageRef>,

    /// Posts in ascending order of publication.
    pub posts: Vec<PostRef>,

    #[serde(default)]
    pub home_page_posts: HomePageSize,
}

impl BlogInfo {
    /// Reads, parses, and validates an info file. Files ending in `.yaml` or
    /// `.yml` are parsed as YAML; everything else is parsed as JSON.
    pub fn from_file(path: &Path) -> Result<BlogInfo> {
        let contents = std::fs::read_to_string(path).map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound => Error::NotFound {
                path: path.to_owned(),
                err,
            },
            _ => Error::Io(err),
        })?;

        let is_yaml = matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("yaml") | Some("yml")
        );
        let info = if is_yaml {
            BlogInfo::from_yaml(&contents)?
        } else {
            BlogInfo::from_json(&contents)?
        };
        debug!(
            path = %path.display(),
            pages = info.pages.len(),
            posts = info.posts.len(),
            "loaded blog info"
        );

        info.validate()?;
        Ok(info)
    }

    /// Parses an info structure from JSON. Input that is valid JSON but has
    /// the wrong shape (missing fields, wrong types) is reported as
    /// [`Error::Schema`].
    pub fn from_json(input: &str) -> Result<BlogInfo> {
        serde_json::from_str(input).map_err(|err| {
            if err.is_data() {
                Error::Schema(err.to_string())
            } else {
                Error::Json(err)
            }
        })
    }

    /// Parses an info structure from YAML.
    pub fn from_yaml(input: &str) -> Result<BlogInfo> {
        Ok(serde_yaml::from_str(input)?)
    }

    /// Checks the invariants the renderers rely on but the parser can't
    /// express: valid dates, a usable domain name, and unique file names.
    /// Unrecognized file extensions are deliberately not rejected here; the
    /// build skips those entries.
    pub fn validate(&self) -> Result<()> {
        if self.domain_name.is_empty() {
            return Err(Error::Schema("`domain_name` must not be empty".to_owned()));
        }
        match Url::parse(&format!("https://{}/", self.domain_name)) {
            Ok(url) if url.path() == "/" && url.query().is_none() => {}
            _ => {
                return Err(Error::Schema(format!(
                    "`domain_name` `{}` is not a valid host",
                    self.domain_name
                )))
            }
        }

        check_date("inception_date", &self.inception_date)?;

        if self.home_page_posts.0 == 0 {
            return Err(Error::Schema(
                "`home_page_posts` must be at least 1".to_owned(),
            ));
        }

        check_files("pages", self.pages.iter().map(|p| p.file.as_str()))?;
        check_files("posts", self.posts.iter().map(|p| p.file.as_str()))?;

        for post in &self.posts {
            check_date(&format!("posts[{}].published", post.file), &post.published)?;
            if let Some(updated) = &post.updated {
                check_date(&format!("posts[{}].updated", post.file), updated)?;
            }
            let mut seen = HashSet::new();
            for tag in &post.tags {
                if !seen.insert(tag.as_str()) {
                    return Err(Error::Schema(format!(
                        "post `{}` lists tag `{}` more than once",
                        post.file, tag
                    )));
                }
            }
        }

        // ISO dates sort lexicographically, so string comparison suffices.
        for pair in self.posts.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            if next.published < prev.published {
                warn!(
                    earlier = %prev.file,
                    later = %next.file,
                    "posts are not in ascending order of publication"
                );
            }
        }

        Ok(())
    }
}

fn check_date(field: &str, value: &str) -> Result<()> {
    parse_date(value)
        .map(|_| ())
        .map_err(|err| Error::Schema(format!("`{}`: {}", field, err)))
}

fn check_files<'a>(kind: &str, files: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for file in files {
        if file.is_empty() {
            return Err(Error::Schema(format!("{} entry has an empty `file`", kind)));
        }
        if !seen.insert(file) {
            return Err(Error::Schema(format!(
                "{} entry `{}` appears more than once",
                kind, file
            )));
        }
    }
    Ok(())
}

/// Render-time settings threaded explicitly through the renderers.
#[derive(Clone, Copy, Debug)]
pub struct Options {
    /// The maximum number of post summaries on the home page.
    pub home_page_posts: usize,

    /// The date stamped on the feed's `updated` element.
    pub today: NaiveDate,
}

impl Options {
    /// Builds [`Options`] from the info file's settings and the given date.
    pub fn new(info: &BlogInfo, today: NaiveDate) -> Options {
        Options {
            home_page_posts: info.home_page_posts.0,
            today,
        }
    }
}

/// The result of loading or validating a [`BlogInfo`].
pub type Result<T> = std::result::Result<T, Error>;

/// Represents a problem loading the blog info.
#[derive(Debug)]
pub enum Error {
    /// Returned when the info file does not exist.
    NotFound { path: PathBuf, err: std::io::Error },

    /// Returned for other I/O errors reading the info file.
    Io(std::io::Error),

    /// Returned when the info file is not syntactically valid JSON.
    Json(serde_json::Error),

    /// Returned when the info file is not valid YAML or doesn't match the
    /// expected structure.
    Yaml(serde_yaml::Error),

    /// Returned when the info structure is missing fields or violates its
    /// invariants.
    Schema(String),
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as human-readable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::NotFound { path, err } => {
                write!(f, "Opening info file '{}': {}", path.display(), err)
            }
            Error::Io(err) => err.fmt(f),
            Error::Json(err) => err.fmt(f),
            Error::Yaml(err) => err.fmt(f),
            Error::Schema(msg) => write!(f, "Invalid blog info: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::NotFound { path: _, err } => Some(err),
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Yaml(err) => Some(err),
            Error::Schema(_) => None,
        }
    }
}

impl From<serde_yaml::Error> for Error {
    /// Converts a [`serde_yaml::Error`] into an [`Error`]. It allows us to use
    /// the `?` operator for [`serde_yaml`] deserialization functions.
    fn from(err: serde_yaml::Error) -> Error {
        Error::Yaml(err)
    }
}

/// Builders for the fixtures shared by the test modules of the crate.
#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn page(file: &str, title: &str) -> PageRef {
        PageRef {
            file: file.to_owned(),
            title: title.to_owned(),
            description: format!("{} description", title),
        }
    }

    pub fn post(file: &str, published: &str, tags: &[&str]) -> PostRef {
        PostRef {
            file: file.to_owned(),
            title: format!("Title of {}", file),
            description: format!("Description of {}", file),
            published: published.to_owned(),
            updated: None,
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
        }
    }

    /// `n` posts named `post{i}.html`, published on consecutive days of
    /// January 2021.
    pub fn posts(n: usize) -> Vec<PostRef> {
        (0..n)
            .map(|i| post(&format!("post{}.html", i), &format!("2021-01-{:02}", i + 1), &[]))
            .collect()
    }

    pub fn info(pages: Vec<PageRef>, posts: Vec<PostRef>) -> BlogInfo {
        BlogInfo {
            domain_name: "example.org".to_owned(),
            author: "Jane Doe".to_owned(),
            inception_date: "2020-06-01".to_owned(),
            input_dir: PathBuf::from("input"),
            output_dir: PathBuf::from("output"),
            pages,
            posts,
            home_page_posts: HomePageSize::default(),
        }
    }

    pub fn options() -> Options {
        Options {
            home_page_posts: 5,
            today: NaiveDate::from_ymd_opt(2022, 2, 3).expect("valid date"),
        }
    }
}
