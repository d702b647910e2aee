//! Defines [`PageRef`], a standalone page of the blog, and the [`Headline`]
//! trait shared by pages and posts.

use serde::Deserialize;

/// The fields every rendered HTML document needs for its header: where its
/// content lives, its title, and its one-line description.
pub trait Headline {
    /// The file name of the content fragment and of the output document.
    fn file(&self) -> &str;

    fn title(&self) -> &str;

    fn description(&self) -> &str;
}

/// A page entry from the blog info. The page's identity is its `file`, which
/// is unique within [`crate::config::BlogInfo::pages`].
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct PageRef {
    pub file: String,
    pub title: String,
    pub description: String,
}

impl Headline for PageRef {
    fn file(&self) -> &str {
        &self.file
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }
}
