//! View state for the posts screen.
//!
//! [`ViewState`] is the single source of truth for rendering. It only
//! changes through [`StateContainer::dispatch`], which runs the pure
//! [`reduce`] function and then notifies subscribers.

mod action;
mod container;

pub use action::{reduce, Action};
pub use container::{Listener, StateContainer, SubscriptionId};

use crate::favorites::FavoriteSet;
use crate::models::Post;

/// What the screen currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Fetch in flight
    Loading,
    /// Last fetch failed
    Error,
    /// Every fetched post
    AllPosts,
    /// Favorites only
    Favorites,
}

/// Everything the UI needs to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub loading: bool,
    /// User-facing message of the last failed fetch
    pub error: Option<String>,
    pub posts: Vec<Post>,
    pub favorites: FavoriteSet,
    /// View mode flag, orthogonal to loading/error
    pub show_favorites: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            loading: true,
            error: None,
            posts: Vec::new(),
            favorites: FavoriteSet::new(),
            show_favorites: false,
        }
    }
}

impl ViewState {
    /// Loading takes precedence over an error, and an error over the lists.
    pub fn screen(&self) -> Screen {
        if self.loading {
            Screen::Loading
        } else if self.error.is_some() {
            Screen::Error
        } else if self.show_favorites {
            Screen::Favorites
        } else {
            Screen::AllPosts
        }
    }

    /// Posts listed for the current view mode.
    pub fn visible_posts(&self) -> &[Post] {
        if self.show_favorites {
            self.favorites.as_slice()
        } else {
            &self.posts
        }
    }

    pub fn is_favorite(&self, id: u64) -> bool {
        self.favorites.contains(id)
    }
}
