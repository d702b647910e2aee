//! Defines [`PostRef`], a single blog post's metadata.

use crate::page::Headline;
use serde::Deserialize;

/// A post entry from the blog info. Posts are expected to be listed in
/// ascending order of their `published` date; nothing downstream re-sorts
/// them.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct PostRef {
    pub file: String,
    pub title: String,
    pub description: String,

    /// The publication date as `YYYY-MM-DD`.
    pub published: String,

    /// The date of the latest revision as `YYYY-MM-DD`, if any.
    #[serde(default)]
    pub updated: Option<String>,

    /// The tags associated with the post, in the order they were listed.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl PostRef {
    /// The date the post was last touched: `updated` when present, otherwise
    /// `published`.
    pub fn last_updated(&self) -> &str {
        self.updated.as_deref().unwrap_or(&self.published)
    }

    /// The text used wherever the archive links to this post.
    pub fn dated_title(&self) -> String {
        format!("{}: {}", self.published, self.title)
    }
}

impl Headline for PostRef {
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
