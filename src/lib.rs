//! The library code for the `underwood` static blog generator. A blog is
//! described by a [`config::BlogInfo`] structure (site metadata plus ordered
//! lists of pages and posts) and a directory of raw HTML content fragments.
//! Building the blog is a single pass over the two lists:
//!
//! 1. Each page is classified by its file name ([`render::PageKind`]):
//!    `index.html` becomes the home page, `archive.html` the archive,
//!    `feed.xml` the Atom feed ([`feed`]), and any other `.html` page is its
//!    content fragment unchanged. Anything else is skipped.
//! 2. Each post is rendered with its dates, tags, content fragment, and links
//!    to the neighbouring posts.
//!
//! Every HTML document is assembled from the same shared sections
//! ([`section`]): the top (head, banner and navigation), the page-specific
//! body, and the bottom (footer). [`build::build_blog`] writes each document
//! into the output directory as soon as it's rendered.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod build;
pub mod config;
pub mod date;
pub mod feed;
pub mod html;
pub mod page;
pub mod post;
pub mod render;
pub mod section;
pub mod tag;
