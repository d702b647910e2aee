//! Renders individual documents. Every output file corresponds to one
//! [`PageKind`], which is classified from the entry's file name and rendered
//! by [`PageKind::render`]. HTML kinds are sandwiched between
//! [`section::top`] and [`section::bottom`]; the feed is rendered by
//! [`crate::feed`] on its own.

use crate::config::{BlogInfo, Options};
use crate::date::{pretty_date, FormatError};
use crate::feed::{self, Error as FeedError};
use crate::html::{link, list, Details, PostSummary};
use crate::page::{Headline, PageRef};
use crate::post::PostRef;
use crate::section;
use crate::tag::TagIndex;
use std::fmt;
use std::path::PathBuf;

/// The file name of the home page.
pub const HOME_FILE: &str = "index.html";

/// The file name of the archive page.
pub const ARCHIVE_FILE: &str = "archive.html";

/// The file name of the Atom feed.
pub const FEED_FILE: &str = "feed.xml";

const HTML_EXTENSION: &str = ".html";

/// The kinds of document the generator knows how to produce. Each variant
/// carries only what its renderer needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PageKind<'a> {
    /// `index.html`: summaries of the most recent posts.
    Home(&'a PageRef),

    /// `archive.html`: every post by date and by tag.
    Archive(&'a PageRef),

    /// Any other `.html` page: its content fragment, unchanged.
    Generic(&'a PageRef),

    /// `feed.xml`: the Atom feed.
    Feed,

    /// A post together with its position in the ascending post sequence.
    Post { index: usize, post: &'a PostRef },
}

impl<'a> PageKind<'a> {
    /// Classifies a page entry by its file name. Returns `None` for files the
    /// generator doesn't render (neither `.html` nor `feed.xml`); callers skip
    /// those.
    pub fn of_page(page: &'a PageRef) -> Option<PageKind<'a>> {
        match page.file.as_str() {
            HOME_FILE => Some(PageKind::Home(page)),
            ARCHIVE_FILE => Some(PageKind::Archive(page)),
            FEED_FILE => Some(PageKind::Feed),
            file if file.ends_with(HTML_EXTENSION) => Some(PageKind::Generic(page)),
            _ => None,
        }
    }

    /// Classifies the post at `index`. Returns `None` for posts whose file
    /// isn't `.html`.
    pub fn of_post(index: usize, post: &'a PostRef) -> Option<PageKind<'a>> {
        match post.file.ends_with(HTML_EXTENSION) {
            true => Some(PageKind::Post { index, post }),
            false => None,
        }
    }

    /// The output file name.
    pub fn file(&self) -> &'a str {
        match *self {
            PageKind::Home(page) | PageKind::Archive(page) | PageKind::Generic(page) => &page.file,
            PageKind::Feed => FEED_FILE,
            PageKind::Post { post, .. } => &post.file,
        }
    }

    /// Renders the document into memory.
    pub fn render(&self, info: &BlogInfo, options: &Options) -> Result<RenderedDocument> {
        let contents = match *self {
            PageKind::Feed => feed::render(info, options.today)?,
            PageKind::Home(page) => sandwich(info, page, home(info, options.home_page_posts)?),
            PageKind::Archive(page) => sandwich(info, page, archive(info)),
            PageKind::Generic(page) => sandwich(info, page, section::middle(info, page)?),
            PageKind::Post { index, post } => sandwich(info, post, post_body(info, index, post)?),
        };
        Ok(RenderedDocument {
            path: info.output_dir.join(self.file()),
            contents,
        })
    }
}

fn sandwich(info: &BlogInfo, doc: &dyn Headline, body: String) -> String {
    let top = section::top(info, doc);
    let bottom = section::bottom();
    let mut out = String::with_capacity(top.len() + body.len() + bottom.len());
    out.push_str(&top);
    out.push_str(&body);
    out.push_str(bottom);
    out
}

/// A fully composed document and the path it will be written to.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedDocument {
    pub path: PathBuf,
    pub contents: String,
}

impl RenderedDocument {
    /// Writes the document to its path, replacing any existing file.
    pub fn write(&self) -> std::io::Result<()> {
        std::fs::write(&self.path, &self.contents)
    }
}

/// Renders summaries of the `limit` most recent posts, most recent first.
/// Posts are taken from the tail of the (ascending) post sequence.
pub fn home(info: &BlogInfo, limit: usize) -> Result<String> {
    let mut out = String::new();
    for post in info.posts.iter().rev().take(limit) {
        out.push_str(
            &PostSummary {
                title_link: &link(&post.file, &post.title),
                pretty_date: &pretty_date(&post.published)?,
                description: &post.description,
                read_more_link: &link(&post.file, "Read more..."),
            }
            .render(),
        );
    }
    Ok(out)
}

/// Renders the archive: posts by ascending date, by descending date, and by
/// tag, each in its own collapsible block.
pub fn archive(info: &BlogInfo) -> String {
    let ascending = Details {
        style: "",
        summary: "Browse by ascending date",
        contents: &browse_by_date(info.posts.iter()),
    };
    let descending = Details {
        style: "",
        summary: "Browse by descending date",
        contents: &browse_by_date(info.posts.iter().rev()),
    };
    let by_tag = Details {
        style: "",
        summary: "Browse by tag",
        contents: &browse_by_tag(&TagIndex::new(&info.posts)),
    };
    ascending.render() + &descending.render() + &by_tag.render()
}

fn dated_link(post: &PostRef) -> String {
    link(&post.file, &post.dated_title())
}

fn browse_by_date<'a>(posts: impl Iterator<Item = &'a PostRef>) -> String {
    list(None, posts.map(dated_link))
}

// Each tag's list carries the tag as its id so `archive.html#{tag}` links
// land on it.
fn browse_by_tag(index: &TagIndex) -> String {
    index
        .iter()
        .map(|(tag, posts)| {
            Details {
                style: "margin-left: 1em;",
                summary: tag,
                contents: &list(Some(tag), posts.iter().map(|post| dated_link(post))),
            }
            .render()
        })
        .collect()
}

/// Renders the body of `post`, which sits at `index` in the post sequence:
/// its dates and tags, its content fragment, and links to its neighbours.
pub fn post_body(info: &BlogInfo, index: usize, post: &PostRef) -> Result<String> {
    let mut out = post_info(post)?;
    out.push_str(&section::middle(info, post)?);
    out.push_str(&prev_next_links(&info.posts, index));
    Ok(out)
}

/// The publication date, the update date if any, and links to the archive
/// entry of each tag, followed by a rule.
pub fn post_info(post: &PostRef) -> Result<String> {
    let mut out = format!("<div>Published: {}</div>\n", pretty_date(&post.published)?);
    if let Some(updated) = &post.updated {
        out.push_str(&format!("<div>Updated: {}</div>\n", pretty_date(updated)?));
    }
    if !post.tags.is_empty() {
        let tag_links: Vec<String> = post
            .tags
            .iter()
            .map(|tag| link(&format!("{}#{}", ARCHIVE_FILE, tag), tag))
            .collect();
        out.push_str(&format!("<div>Tagged under: {}</div>\n", tag_links.join(", ")));
    }
    out.push_str("<hr/>\n");
    Ok(out)
}

/// Links to the previous and next posts. The first post only gets a next
/// link, the last only a previous link, and a lone post gets neither.
pub fn prev_next_links(posts: &[PostRef], index: usize) -> String {
    let prev = match index {
        0 => None,
        i => posts.get(i - 1).map(|p| link(&p.file, "Previous post")),
    };
    let next = posts.get(index + 1).map(|p| link(&p.file, "Next post"));
    match (prev, next) {
        (Some(prev), Some(next)) => format!("{} | {}", prev, next),
        (Some(only), None) | (None, Some(only)) => only,
        (None, None) => String::new(),
    }
}

/// The result of rendering a document.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents a problem rendering a document.
#[derive(Debug)]
pub enum Error {
    /// Returned when a post carries a malformed date.
    Format(FormatError),

    /// Returned when a content fragment doesn't exist.
    NotFound { path: PathBuf, err: std::io::Error },

    /// Returned for other I/O errors reading a content fragment.
    Io { path: PathBuf, err: std::io::Error },

    /// Returned when the feed can't be built.
    Feed(FeedError),
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as human-readable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Format(err) => err.fmt(f),
            Error::NotFound { path, err } => {
                write!(f, "Content fragment '{}' not found: {}", path.display(), err)
            }
            Error::Io { path, err } => {
                write!(f, "Reading content fragment '{}': {}", path.display(), err)
            }
            Error::Feed(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Format(err) => Some(err),
            Error::NotFound { path: _, err } => Some(err),
            Error::Io { path: _, err } => Some(err),
            Error::Feed(err) => Some(err),
        }
    }
}

impl From<FormatError> for Error {
    /// Converts a [`FormatError`] into an [`Error`]. This allows us to use
    /// the `?` operator when formatting post dates.
    fn from(err: FormatError) -> Error {
        Error::Format(err)
    }
}

impl From<FeedError> for Error {
    /// Converts a [`FeedError`] into an [`Error`].
    fn from(err: FeedError) -> Error {
        Error::Feed(err)
    }
}
