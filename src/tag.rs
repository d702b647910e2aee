//! Defines the [`TagIndex`] type, which groups [`PostRef`]s by tag for the
//! archive page.

use crate::post::PostRef;
use std::collections::HashMap;

/// Maps each tag to the posts carrying it. Tags are kept in the order they are
/// first seen while scanning the posts, and each tag's posts keep the order of
/// the input slice. The index borrows from the posts and is rebuilt whenever
/// it's needed.
#[derive(Debug, Default)]
pub struct TagIndex<'a> {
    buckets: Vec<(&'a str, Vec<&'a PostRef>)>,
    positions: HashMap<&'a str, usize>,
}

impl<'a> TagIndex<'a> {
    /// Indexes a slice of posts.
    pub fn new(posts: &'a [PostRef]) -> TagIndex<'a> {
        let mut index = TagIndex::default();
        for post in posts {
            for tag in &post.tags {
                index.insert(tag, post);
            }
        }
        index
    }

    fn insert(&mut self, tag: &'a str, post: &'a PostRef) {
        match self.positions.get(tag) {
            Some(&i) => {
                let bucket = &mut self.buckets[i].1;
                // a post listing the same tag twice still appears once
                if !bucket.last().map_or(false, |last| std::ptr::eq(*last, post)) {
                    bucket.push(post);
                }
            }
            None => {
                self.positions.insert(tag, self.buckets.len());
                self.buckets.push((tag, vec![post]));
            }
        }
    }

    /// Iterates over `(tag, posts)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &[&'a PostRef])> {
        self.buckets.iter().map(|(tag, posts)| (*tag, posts.as_slice()))
    }

    /// Returns the posts carrying `tag`, if any.
    pub fn get(&self, tag: &str) -> Option<&[&'a PostRef]> {
        self.positions
            .get(tag)
            .map(|&i| self.buckets[i].1.as_slice())
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
