//! The user's favorite posts.
//!
//! [`FavoriteSet`] is an insertion-ordered list of posts, unique by id.
//! [`toggle_favorite`] is the only way the set changes shape;
//! [`FavoritesStore`] persists it as a whole.

mod store;

pub use store::{FavoritesStore, FAVORITES_KEY};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::Post;

/// Ordered collection of favorite posts with no two entries sharing an id.
///
/// Serializes as a plain JSON array of posts. Deserializing an array that
/// repeats an id keeps the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Post>", into = "Vec<Post>")]
pub struct FavoriteSet {
    posts: Vec<Post>,
}

impl FavoriteSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a post with `id` is a favorite.
    pub fn contains(&self, id: u64) -> bool {
        self.posts.iter().any(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Favorites in the order they were added.
    pub fn iter(&self) -> std::slice::Iter<'_, Post> {
        self.posts.iter()
    }

    pub fn as_slice(&self) -> &[Post] {
        &self.posts
    }

    /// Ids in insertion order.
    pub fn ids(&self) -> Vec<u64> {
        self.posts.iter().map(|p| p.id).collect()
    }
}

impl From<Vec<Post>> for FavoriteSet {
    fn from(posts: Vec<Post>) -> Self {
        let mut seen = HashSet::with_capacity(posts.len());
        let posts = posts.into_iter().filter(|p| seen.insert(p.id)).collect();
        Self { posts }
    }
}

impl From<FavoriteSet> for Vec<Post> {
    fn from(set: FavoriteSet) -> Self {
        set.posts
    }
}

impl<'a> IntoIterator for &'a FavoriteSet {
    type Item = &'a Post;
    type IntoIter = std::slice::Iter<'a, Post>;

    fn into_iter(self) -> Self::IntoIter {
        self.posts.iter()
    }
}

/// Add `post` to `current`, or remove it if its id is already there.
///
/// Returns a new set; `current` is untouched. Additions go to the end.
pub fn toggle_favorite(current: &FavoriteSet, post: &Post) -> FavoriteSet {
    let posts = if current.contains(post.id) {
        current
            .posts
            .iter()
            .filter(|p| p.id != post.id)
            .cloned()
            .collect()
    } else {
        let mut posts = Vec::with_capacity(current.len() + 1);
        posts.extend(current.posts.iter().cloned());
        posts.push(post.clone());
        posts
    };
    FavoriteSet { posts }
}
