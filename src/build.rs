//! Exports the [`build_blog`] function which stitches together the high-level
//! steps of building the blog: classifying every page and post
//! ([`crate::render::PageKind`]), rendering it, and writing it into the output
//! directory.

use crate::config::{BlogInfo, Options};
use crate::render::{Error as RenderError, PageKind, RenderedDocument};
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info};

/// Builds the blog described by `info`: every renderable page (including the
/// feed), then every post. Documents are written as soon as they're rendered,
/// so a failure partway through leaves the earlier files on disk.
pub fn build_blog(info: &BlogInfo, options: &Options) -> Result<()> {
    info!(
        output_dir = %info.output_dir.display(),
        pages = info.pages.len(),
        posts = info.posts.len(),
        "building blog"
    );
    std::fs::create_dir_all(&info.output_dir).map_err(|err| Error::CreateDir {
        path: info.output_dir.clone(),
        err,
    })?;

    let mut written = 0;
    for kind in kinds(info) {
        write(&kind.render(info, options)?)?;
        written += 1;
    }

    info!(documents = written, "finished building blog");
    Ok(())
}

/// Renders every document of the blog into memory without touching the
/// output directory. Documents come in the same order [`build_blog`] writes
/// them.
pub fn render_blog(info: &BlogInfo, options: &Options) -> Result<Vec<RenderedDocument>> {
    kinds(info)
        .map(|kind| kind.render(info, options).map_err(Error::from))
        .collect()
}

// Pages first, then posts with their ascending index. Entries with a file we
// don't know how to render are skipped.
fn kinds(info: &BlogInfo) -> impl Iterator<Item = PageKind<'_>> {
    let pages = info.pages.iter().filter_map(|page| {
        let kind = PageKind::of_page(page);
        if kind.is_none() {
            debug!(file = %page.file, "skipping page with unrecognized extension");
        }
        kind
    });
    let posts = info.posts.iter().enumerate().filter_map(|(index, post)| {
        let kind = PageKind::of_post(index, post);
        if kind.is_none() {
            debug!(file = %post.file, "skipping post with unrecognized extension");
        }
        kind
    });
    pages.chain(posts)
}

fn write(doc: &RenderedDocument) -> Result<()> {
    doc.write().map_err(|err| Error::Write {
        path: doc.path.clone(),
        err,
    })?;
    info!(path = %doc.path.display(), "wrote document");
    Ok(())
}

type Result<T> = std::result::Result<T, Error>;

/// The error type for building a blog. Errors can occur while rendering a
/// document or while writing it to disk.
#[derive(Debug)]
pub enum Error {
    /// Returned for errors rendering a document.
    Render(RenderError),

    /// Returned for I/O problems while creating the output directory.
    CreateDir { path: PathBuf, err: std::io::Error },

    /// Returned for I/O problems while writing a document.
    Write { path: PathBuf, err: std::io::Error },
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Render(err) => err.fmt(f),
            Error::CreateDir { path, err } => {
                write!(f, "Creating output directory '{}': {}", path.display(), err)
            }
            Error::Write { path, err } => {
                write!(f, "Writing '{}': {}", path.display(), err)
            }
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Render(err) => Some(err),
            Error::CreateDir { path: _, err } => Some(err),
            Error::Write { path: _, err } => Some(err),
        }
    }
}

impl From<RenderError> for Error {
    /// Converts [`RenderError`]s into [`Error`]. This allows us to use the `?`
    /// operator.
    fn from(err: RenderError) -> Error {
        Error::Render(err)
    }
}
